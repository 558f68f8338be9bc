//! Random playouts used as the value estimate of a freshly expanded node.

use engine_core::{Game, Outcome};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

/// Play uniformly random legal moves from `state` until the game ends.
///
/// Works on a private copy: the caller's state is never touched. Sides
/// alternate locally starting with `state.side_to_move()`, and the stored
/// side to move of the intermediate states is left alone.
///
/// A state that is already won yields that win, a state with no legal
/// moves and no winner yields a draw.
pub fn playout<G: Game>(state: &G, rng: &mut ChaCha20Rng) -> Result<Outcome<G::Player>, G::Error> {
    let mut current = state.clone();
    let mut player = state.side_to_move();

    loop {
        if let Some(winner) = current.winner() {
            return Ok(Outcome::Win(winner));
        }

        let legal = current.legal_moves();
        let Some(&mv) = legal.choose(rng) else {
            return Ok(Outcome::Draw);
        };

        current = current.apply(mv, player)?;
        player = G::opponent(player);
    }
}
