//! Monte Carlo Tree Search (MCTS) with UCT selection and random playouts.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` Game trait.
//!
//! # Overview
//!
//! MCTS is a search algorithm that builds a search tree by running iterations.
//! Each iteration consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (UCB1 applied to trees) to
//!    balance exploration and exploitation
//! 2. **Expansion**: When reaching a node with untried moves, add a child for
//!    one of them, chosen at random
//! 3. **Simulation**: Play uniformly random moves from the new child until the
//!    game ends
//! 4. **Backpropagation**: Update visit counts along the path from the new
//!    child to the root, crediting wins to the nodes whose mover won
//!
//! After the budget is spent, the root child with the highest win rate is the
//! recommended move.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_tictactoe::{Player, TicTacToe};
//! use mcts::{run_mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! // X to move, position 2 completes the top row
//! let state = TicTacToe::parse("XX. / OO. / ...", Player::X).unwrap();
//!
//! let config = MctsConfig::default().with_iterations(500);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = run_mcts(state, config, &mut rng).unwrap();
//!
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.root_visits, 500);
//! ```
//!
//! For a game in progress, [`GameSession`] keeps the live position, checks
//! incoming moves and answers with the engine's move:
//!
//! ```rust
//! use games_tictactoe::{Player, TicTacToe};
//! use mcts::{GameSession, MctsConfig};
//!
//! let mut game = GameSession::with_seed(TicTacToe::new(), MctsConfig::for_testing(), 7);
//! game.record_move(4, Player::X).unwrap();
//! let reply = game.engine_move().unwrap();
//! assert!(reply.is_some());
//! assert_eq!(game.side_to_move(), Player::X);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `iterations`: Number of iterations per search (default: 1000)
//! - `exploration_constant`: `c` in the UCB1 formula (default: sqrt(2))
//! - `time_limit`: Optional deadline; the search stops early and answers from
//!   partial statistics
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │                    GameSession                     │
//! │          (live state, move checks, rng)            │
//! └─────────────────────────┬──────────────────────────┘
//!                           │ run_mcts
//! ┌─────────────────────────▼──────────────────────────┐
//! │                    MctsSearch                      │
//! │  ┌─────────────┐              ┌─────────────────┐  │
//! │  │  MctsTree   │              │    playout      │  │
//! │  │  (arena)    │              │ (random games)  │  │
//! │  └─────────────┘              └─────────────────┘  │
//! │       select → expand → simulate → backpropagate   │
//! └────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod session;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use rollout::playout;
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult};
pub use session::{GameSession, SessionError};
pub use tree::{ChildStats, MctsTree, TreeStats};
