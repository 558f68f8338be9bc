//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time, so the documented
//! defaults and the ones the code uses cannot drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    mcts: MctsDefaults,
    arena: ArenaDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    iterations: u32,
    exploration_constant: f64,
    time_limit_ms: u64,
}

#[derive(Debug, Deserialize)]
struct ArenaDefaults {
    games: u32,
    board_size: usize,
    opponent: String,
    engine_first: bool,
    seed: u64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// MCTS
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}
pub fn exploration_constant() -> f64 {
    DEFAULTS.mcts.exploration_constant
}
pub fn time_limit_ms() -> u64 {
    DEFAULTS.mcts.time_limit_ms
}

// Arena
pub fn games() -> u32 {
    DEFAULTS.arena.games
}
pub fn board_size() -> usize {
    DEFAULTS.arena.board_size
}
pub fn opponent() -> &'static str {
    &DEFAULTS.arena.opponent
}
pub fn engine_first() -> bool {
    DEFAULTS.arena.engine_first
}
pub fn seed() -> u64 {
    DEFAULTS.arena.seed
}
