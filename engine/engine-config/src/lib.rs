//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the noughts components (the engine facade and the arena runner).
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`NOUGHTS_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! Binaries put their own CLI flags on top of all three.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! NOUGHTS_<SECTION>_<KEY>=value
//!
//! Examples:
//!     NOUGHTS_COMMON_LOG_LEVEL=debug
//!     NOUGHTS_MCTS_ITERATIONS=5000
//!     NOUGHTS_MCTS_EXPLORATION_CONSTANT=1.0
//!     NOUGHTS_ARENA_OPPONENT=mcts
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
