use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::Game;
use games_tictactoe::{Board, Player, TicTacToe};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_queries");
    let midgame = TicTacToe::parse("X.O / .X. / O..", Player::X).unwrap();

    group.bench_function("legal_moves", |b| {
        b.iter(|| black_box(midgame).legal_moves());
    });
    group.bench_function("winner", |b| {
        b.iter(|| black_box(midgame).winner());
    });
    group.bench_function("is_terminal", |b| {
        b.iter(|| black_box(midgame).is_terminal());
    });

    let four = Board::<4>::parse("X.O. / .X.. / O..X / ....", Player::O).unwrap();
    group.bench_function("winner_4x4", |b| {
        b.iter(|| black_box(four).winner());
    });

    group.finish();
}

fn bench_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_play");
    group.bench_function("play_center", |b| {
        let base = TicTacToe::new();
        b.iter_batched(
            || base,
            |state| state.play(4).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_random_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("tictactoe_random_game");
    group.bench_function("to_terminal", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter(|| {
            let mut state = TicTacToe::new();
            while !state.is_terminal() {
                let legal = state.legal_moves();
                let &position = legal.choose(&mut rng).unwrap();
                state = state.play(position).unwrap();
            }
            black_box(state.outcome())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_queries, bench_play, bench_random_game);
criterion_main!(benches);
