//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_iterations() -> u32 {
    defaults::iterations()
}
fn d_exploration_constant() -> f64 {
    defaults::exploration_constant()
}
fn d_time_limit_ms() -> u64 {
    defaults::time_limit_ms()
}
fn d_games() -> u32 {
    defaults::games()
}
fn d_board_size() -> usize {
    defaults::board_size()
}
fn d_opponent() -> String {
    defaults::opponent().into()
}
fn d_engine_first() -> bool {
    defaults::engine_first()
}
fn d_seed() -> u64 {
    defaults::seed()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// MCTS (Monte Carlo Tree Search) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_iterations")]
    pub iterations: u32,
    #[serde(default = "d_exploration_constant")]
    pub exploration_constant: f64,
    /// Per-decision deadline in milliseconds (0 = no deadline)
    #[serde(default = "d_time_limit_ms")]
    pub time_limit_ms: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::iterations(),
            exploration_constant: defaults::exploration_constant(),
            time_limit_ms: defaults::time_limit_ms(),
        }
    }
}

/// Arena (headless match runner) configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    #[serde(default = "d_games")]
    pub games: u32,
    /// Board side length (3 or 4)
    #[serde(default = "d_board_size")]
    pub board_size: usize,
    /// Opponent kind: "random" or "mcts"
    #[serde(default = "d_opponent")]
    pub opponent: String,
    /// Engine opens every game when true, colors alternate otherwise
    #[serde(default = "d_engine_first")]
    pub engine_first: bool,
    /// Base seed for all random sources (0 = seed from entropy)
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            board_size: defaults::board_size(),
            opponent: defaults::opponent().into(),
            engine_first: defaults::engine_first(),
            seed: defaults::seed(),
        }
    }
}
