//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Traverse tree using UCT to find a leaf
//! 2. Expansion: Add one new child to the leaf
//! 3. Simulation: Play a random game from the new child
//! 4. Backpropagation: Update statistics along the path

use std::time::{Duration, Instant};

use engine_core::{Game, Outcome};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::playout;
use crate::tree::{ChildStats, MctsTree};

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Engine error: {0}")]
    EngineError(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Search produced no move: the root has no children")]
    EmptySearchResult,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// Move of the root child with the best win rate, `None` if the root
    /// has no children (decided position or an empty budget)
    pub best_move: Option<M>,

    /// Win rate of the chosen child for the side to move at the root
    pub win_rate: f64,

    /// Number of iterations performed
    pub iterations: u32,

    /// Visit count of the root after the search
    pub root_visits: u32,

    /// Number of nodes in the tree
    pub tree_size: usize,

    /// Statistics of every root child, in creation order
    pub children: Vec<ChildStats<M>>,

    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

impl SearchError {
    /// Wrap an error raised by the game while searching.
    fn engine<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        SearchError::EngineError(Box::new(err))
    }
}

impl<M: Copy> SearchResult<M> {
    /// The recommended move, or `EmptySearchResult` when there is none.
    pub fn require_move(&self) -> Result<M, SearchError> {
        self.best_move.ok_or(SearchError::EmptySearchResult)
    }
}

/// MCTS search state. The tree lives only as long as the search.
pub struct MctsSearch<G: Game> {
    tree: MctsTree<G>,
    config: MctsConfig,
}

impl<G: Game> MctsSearch<G> {
    /// Create a new MCTS search rooted at the given game state.
    pub fn new(root_state: G, config: MctsConfig) -> Self {
        Self {
            tree: MctsTree::new(root_state),
            config,
        }
    }

    /// Run the search for the configured number of iterations.
    ///
    /// With a time limit the deadline is checked after every iteration and
    /// the answer is computed from whatever statistics exist at that point.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult<G::Move>, SearchError> {
        let start = Instant::now();
        // A limit too large to represent as an instant never expires
        let deadline = self
            .config
            .time_limit
            .and_then(|limit| start.checked_add(limit));

        let mut iterations = 0;
        while iterations < self.config.iterations {
            self.iterate(rng)?;
            iterations += 1;

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                debug!(
                    iterations,
                    budget = self.config.iterations,
                    "MCTS deadline reached"
                );
                break;
            }
        }

        let best_child = self.tree.best_child();
        let best_move = best_child.and_then(|id| self.tree.get(id).action);
        let win_rate = best_child.map_or(0.0, |id| self.tree.get(id).win_rate());
        let root_visits = self.tree.get(self.tree.root()).visit_count;
        let elapsed = start.elapsed();

        debug!(
            iterations,
            root_visits,
            tree_size = self.tree.len(),
            best_move = ?best_move,
            win_rate,
            elapsed_ms = elapsed.as_millis() as u64,
            "MCTS search complete"
        );

        Ok(SearchResult {
            best_move,
            win_rate,
            iterations,
            root_visits,
            tree_size: self.tree.len(),
            children: self.tree.root_children(),
            elapsed,
        })
    }

    /// Run a single iteration (select -> expand -> simulate -> backpropagate).
    ///
    /// Every iteration backpropagates exactly once, so the root visit count
    /// always equals the number of iterations run.
    fn iterate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        // Selection: traverse to a leaf
        let leaf_id = self.select(rng);
        let leaf = self.tree.get(leaf_id);

        // Terminal leaf: the position scores itself
        if leaf.is_terminal {
            let outcome = leaf.state.outcome().unwrap_or(Outcome::Draw);
            self.tree.backpropagate(leaf_id, outcome);
            trace!(leaf = leaf_id.0, "MCTS iteration ended at terminal node");
            return Ok(());
        }

        // Expansion, falling back to the leaf itself if nothing new was added
        let node_id = self.expand(leaf_id, rng)?.unwrap_or(leaf_id);

        // Simulation
        let outcome = playout(&self.tree.get(node_id).state, rng)
            .map_err(SearchError::engine)?;

        // Backpropagation
        self.tree.backpropagate(node_id, outcome);

        trace!(
            leaf = leaf_id.0,
            expanded = node_id.0,
            outcome = ?outcome,
            "MCTS iteration complete"
        );

        Ok(())
    }

    /// Select a leaf node by traversing the tree using UCT.
    fn select(&self, rng: &mut ChaCha20Rng) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            // Stop at terminal or not fully expanded nodes
            if node.is_leaf() {
                return current;
            }

            match self
                .tree
                .select_child(current, self.config.exploration_constant, rng)
            {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    /// Add one child for a move not yet tried from `node_id`.
    ///
    /// Legal moves are tried in random order and the first one whose
    /// resulting state is not already a child is added. Returns `None` if
    /// every legal move already has a child.
    fn expand(
        &mut self,
        node_id: NodeId,
        rng: &mut ChaCha20Rng,
    ) -> Result<Option<NodeId>, SearchError> {
        let state = self.tree.get(node_id).state.clone();
        let mut moves = state.legal_moves();
        moves.shuffle(rng);

        for mv in moves {
            let child_state = state
                .play(mv)
                .map_err(SearchError::engine)?;

            if self.tree.child_with_state(node_id, &child_state).is_none() {
                let child_id = self.tree.add_child(node_id, mv, child_state);
                trace!(parent = node_id.0, child = child_id.0, action = ?mv, "Expanded node");
                return Ok(Some(child_id));
            }
        }

        Ok(None)
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<G> {
        &self.tree
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<G: Game>(
    state: G,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<G::Move>, SearchError> {
    let mut search = MctsSearch::new(state, config);
    search.run(rng)
}
