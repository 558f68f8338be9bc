//! Arena - headless match runner for the noughts engine
//!
//! A short-lived process that:
//! 1. Loads configuration (CLI > env > config.toml > defaults)
//! 2. Plays the configured number of games, engine against opponent
//! 3. Reports wins, draws and losses from the engine's point of view

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod arena;
mod config;
mod policy;
mod stats;

use crate::config::Config;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so --json output on stdout stays machine readable
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    let summary = arena::run(&config).context("match failed")?;

    if config.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{}", json);
    } else {
        println!("{}", summary);
    }

    Ok(())
}
