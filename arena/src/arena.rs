//! Match loop.
//!
//! The engine side is driven purely through [`GameSession`]: the opponent's
//! moves are recorded into the session and the engine is asked for its reply,
//! exactly like an interactive front-end would.

use anyhow::{anyhow, Result};
use games_tictactoe::{Board, Player};
use mcts::{GameSession, MctsConfig};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::{Config, OpponentKind};
use crate::policy::{MctsPolicy, Policy, RandomPolicy};
use crate::stats::{GameRecord, GameResult, MatchSummary};

/// Play the whole match described by `config`.
pub fn run(config: &Config) -> Result<MatchSummary> {
    let base_seed = if config.seed == 0 {
        rand::random()
    } else {
        config.seed
    };
    info!(
        games = config.games,
        board_size = config.board_size,
        opponent = %config.opponent,
        iterations = config.iterations,
        seed = base_seed,
        "Starting match"
    );

    match config.board_size {
        3 => play_match::<3>(config, base_seed),
        4 => play_match::<4>(config, base_seed),
        other => Err(anyhow!("unsupported board size {}", other)),
    }
}

fn play_match<const N: usize>(config: &Config, base_seed: u64) -> Result<MatchSummary> {
    let kind = config.opponent_kind()?;
    let mut summary = MatchSummary::new(N, kind.to_string(), config.iterations, base_seed);

    for game in 0..config.games {
        // Two seeds per game: engine, then opponent
        let engine_seed = base_seed.wrapping_add(u64::from(game) * 2);
        let opponent_seed = engine_seed.wrapping_add(1);
        let engine_side = if config.engine_first || game % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        let mut opponent: Box<dyn Policy<Board<N>>> = match kind {
            OpponentKind::Random => Box::new(RandomPolicy::with_seed(opponent_seed)),
            OpponentKind::Mcts => {
                Box::new(MctsPolicy::with_seed(config.opponent_mcts(), opponent_seed))
            }
        };

        let record = play_game(
            Board::<N>::new(),
            engine_side,
            config.engine_mcts(),
            engine_seed,
            opponent.as_mut(),
        )?;

        info!(
            game = game + 1,
            engine = %engine_side,
            result = ?record.result,
            moves = record.moves.len(),
            "Game finished"
        );
        summary.record(record);
    }

    info!(
        wins = summary.engine_wins,
        draws = summary.draws,
        losses = summary.engine_losses,
        "Match finished"
    );
    Ok(summary)
}

/// Play one game from `initial` with the engine on `engine_side`.
pub fn play_game<const N: usize>(
    initial: Board<N>,
    engine_side: Player,
    mcts: MctsConfig,
    engine_seed: u64,
    opponent: &mut dyn Policy<Board<N>>,
) -> Result<GameRecord> {
    let iterations = mcts.iterations;
    let mut session = GameSession::with_seed(initial, mcts, engine_seed);
    let mut moves = Vec::new();
    let mut engine_time = Duration::ZERO;

    while session.winner().is_none() && !session.is_full() {
        let player = session.side_to_move();
        let choice = if player == engine_side {
            let start = Instant::now();
            let choice = session.choose_move(iterations)?;
            engine_time += start.elapsed();
            choice
        } else {
            opponent.select_move(session.state())?
        };

        let mv = choice.ok_or_else(|| anyhow!("{} has no move in an undecided game", player))?;
        session.record_move(mv, player)?;
        debug!(ply = moves.len() + 1, %player, mv, "Move played");
        moves.push(mv);
    }

    let result = match session.winner() {
        Some(winner) if winner == engine_side => GameResult::EngineWin,
        Some(_) => GameResult::EngineLoss,
        None => GameResult::Draw,
    };

    Ok(GameRecord {
        engine_side: engine_side.symbol(),
        moves,
        result,
        engine_ms: engine_time.as_millis() as u64,
    })
}
