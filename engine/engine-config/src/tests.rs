//! Tests for the configuration module.
//!
//! Tests that touch environment variables each own distinct keys, since the
//! process environment is shared by concurrently running tests.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.mcts.iterations, 1000);
    assert!((config.mcts.exploration_constant - std::f64::consts::SQRT_2).abs() < f64::EPSILON);
    assert_eq!(config.mcts.time_limit_ms, 0);
    assert_eq!(config.arena.games, 20);
    assert_eq!(config.arena.board_size, 3);
    assert_eq!(config.arena.opponent, "random");
    assert!(config.arena.engine_first);
    assert_eq!(config.arena.seed, 0);
}

#[test]
fn test_env_overrides() {
    std::env::set_var("NOUGHTS_COMMON_LOG_LEVEL", "debug");
    std::env::set_var("NOUGHTS_ARENA_GAMES", "7");
    std::env::set_var("NOUGHTS_MCTS_EXPLORATION_CONSTANT", "0.5");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.arena.games, 7);
    assert!((config.mcts.exploration_constant - 0.5).abs() < f64::EPSILON);

    std::env::remove_var("NOUGHTS_COMMON_LOG_LEVEL");
    std::env::remove_var("NOUGHTS_ARENA_GAMES");
    std::env::remove_var("NOUGHTS_MCTS_EXPLORATION_CONSTANT");
}

#[test]
fn test_unparseable_env_override_is_ignored() {
    std::env::set_var("NOUGHTS_ARENA_SEED", "not-a-number");
    std::env::set_var("NOUGHTS_ARENA_ENGINE_FIRST", "false");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.arena.seed, 0);
    assert!(!config.arena.engine_first);

    std::env::remove_var("NOUGHTS_ARENA_SEED");
    std::env::remove_var("NOUGHTS_ARENA_ENGINE_FIRST");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
log_level = "warn"

[mcts]
iterations = 5000
exploration_constant = 1.0
time_limit_ms = 100

[arena]
games = 3
board_size = 4
opponent = "mcts"
engine_first = false
seed = 99
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.log_level, "warn");
    assert_eq!(config.mcts.iterations, 5000);
    assert!((config.mcts.exploration_constant - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.mcts.time_limit_ms, 100);
    assert_eq!(config.arena.games, 3);
    assert_eq!(config.arena.board_size, 4);
    assert_eq!(config.arena.opponent, "mcts");
    assert!(!config.arena.engine_first);
    assert_eq!(config.arena.seed, 99);
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[mcts]
iterations = 250
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.mcts.iterations, 250);
    assert!((config.mcts.exploration_constant - std::f64::consts::SQRT_2).abs() < f64::EPSILON); // Default
    assert_eq!(config.common.log_level, "info"); // Default
    assert_eq!(config.arena.board_size, 3); // Default
}

#[test]
fn test_empty_config() {
    let config: CentralConfig = toml::from_str("").unwrap();
    assert_eq!(config.mcts.iterations, 1000);
    assert_eq!(config.arena.opponent, "random");
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[mcts]
iterations = 42
time_limit_ms = 15

[arena]
board_size = 4
opponent = "mcts"
"#
    )
    .unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.mcts.iterations, 42);
    assert_eq!(config.mcts.time_limit_ms, 15);
    assert_eq!(config.arena.board_size, 4);
    assert_eq!(config.arena.opponent, "mcts");
}

#[test]
fn test_load_from_invalid_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[mcts\niterations = ").unwrap();

    let config = load_from_path(file.path());
    assert_eq!(config.mcts.iterations, 1000);
    assert_eq!(config.arena.board_size, 3);
}

#[test]
fn test_load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.toml"));
    assert_eq!(config.mcts.iterations, 1000);
    assert_eq!(config.mcts.time_limit_ms, 0);
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config.common.log_level, cloned.common.log_level);
    assert_eq!(config.arena.opponent, cloned.arena.opponent);
}
