//! Configuration for the arena runner
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser};
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_board_size() -> usize {
    CENTRAL_CONFIG.arena.board_size
}

fn default_opponent() -> String {
    CENTRAL_CONFIG.arena.opponent.clone()
}

fn default_engine_first() -> bool {
    CENTRAL_CONFIG.arena.engine_first
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.arena.seed
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration_constant() -> f64 {
    CENTRAL_CONFIG.mcts.exploration_constant
}

fn default_time_limit_ms() -> u64 {
    CENTRAL_CONFIG.mcts.time_limit_ms
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

/// Who the engine plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    /// Uniformly random legal moves
    Random,
    /// A second, independently seeded MCTS engine
    Mcts,
}

impl std::str::FromStr for OpponentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "mcts" => Ok(Self::Mcts),
            other => Err(anyhow!(
                "unknown opponent '{}', expected one of random, mcts",
                other
            )),
        }
    }
}

impl std::fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Mcts => write!(f, "mcts"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "arena")]
#[command(about = "Noughts arena - plays the MCTS engine against another player")]
#[command(
    long_about = "Plays a series of games between the MCTS engine and an opponent
(uniformly random moves, or a second MCTS engine) and reports the results
from the engine's point of view.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Board side length (3 for tic-tac-toe, 4 for four in a row on 4x4)
    #[arg(long, default_value_t = default_board_size())]
    pub board_size: usize,

    /// Opponent kind (random, mcts)
    #[arg(long, default_value_t = default_opponent())]
    pub opponent: String,

    /// Engine opens every game when true, colors alternate when false
    #[arg(long, default_value_t = default_engine_first(), action = ArgAction::Set)]
    pub engine_first: bool,

    /// Base seed for every random source (0 to seed from entropy)
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// MCTS iterations per engine move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// MCTS iterations per move for the mcts opponent (defaults to --iterations)
    #[arg(long)]
    pub opponent_iterations: Option<u32>,

    /// UCT exploration constant
    #[arg(long, default_value_t = default_exploration_constant())]
    pub exploration_constant: f64,

    /// Per-move deadline in milliseconds (0 to disable)
    #[arg(long, default_value_t = default_time_limit_ms())]
    pub time_limit_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Print the match summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if !matches!(self.board_size, 3 | 4) {
            return Err(anyhow!(
                "unsupported board size {}, expected 3 or 4",
                self.board_size
            ));
        }

        self.opponent_kind()?;

        if self.iterations == 0 || self.opponent_iterations == Some(0) {
            return Err(anyhow!("iterations must be greater than 0"));
        }

        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(anyhow!(
                "exploration_constant must be a non-negative number, got {}",
                self.exploration_constant
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    pub fn opponent_kind(&self) -> Result<OpponentKind> {
        self.opponent.parse()
    }

    pub fn time_limit(&self) -> Option<Duration> {
        (self.time_limit_ms > 0).then(|| Duration::from_millis(self.time_limit_ms))
    }

    /// Search settings for the engine under test.
    pub fn engine_mcts(&self) -> MctsConfig {
        self.mcts_with_iterations(self.iterations)
    }

    /// Search settings for the mcts opponent.
    pub fn opponent_mcts(&self) -> MctsConfig {
        self.mcts_with_iterations(self.opponent_iterations.unwrap_or(self.iterations))
    }

    fn mcts_with_iterations(&self, iterations: u32) -> MctsConfig {
        let config = MctsConfig::default()
            .with_iterations(iterations)
            .with_exploration_constant(self.exploration_constant);
        match self.time_limit() {
            Some(limit) => config.with_time_limit(limit),
            None => config,
        }
    }
}
