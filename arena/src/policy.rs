//! Move selection policies for the engine's opponents

use anyhow::Result;
use engine_core::Game;
use mcts::{run_mcts, MctsConfig};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

/// Trait for move selection policies.
pub trait Policy<G: Game> {
    /// Pick a move for the side to move in `state`, `None` if there is none.
    fn select_move(&mut self, state: &G) -> Result<Option<G::Move>>;
}

/// Random policy that selects legal moves uniformly at random.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Policy<G> for RandomPolicy {
    fn select_move(&mut self, state: &G) -> Result<Option<G::Move>> {
        Ok(state.legal_moves().choose(&mut self.rng).copied())
    }
}

/// Policy backed by an independent MCTS search.
#[derive(Debug)]
pub struct MctsPolicy {
    config: MctsConfig,
    rng: ChaCha20Rng,
}

impl MctsPolicy {
    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Policy<G> for MctsPolicy {
    fn select_move(&mut self, state: &G) -> Result<Option<G::Move>> {
        if state.is_terminal() {
            return Ok(None);
        }

        let result = run_mcts(state.clone(), self.config.clone(), &mut self.rng)?;
        trace!(
            best_move = ?result.best_move,
            win_rate = result.win_rate,
            iterations = result.iterations,
            "Opponent search complete"
        );
        Ok(result.best_move)
    }
}
