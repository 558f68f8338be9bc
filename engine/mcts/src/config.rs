//! MCTS configuration parameters.

use std::time::Duration;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations per search.
    pub iterations: u32,

    /// Exploration constant `c` in the UCB1 formula.
    /// Win rates live in [0, 1], so sqrt(2) is the balanced textbook value.
    /// Higher values explore more, lower values exploit more.
    pub exploration_constant: f64,

    /// Optional wall-clock budget per search. When it runs out the search
    /// stops between iterations and answers from the statistics gathered so far.
    pub time_limit: Option<Duration>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration_constant: std::f64::consts::SQRT_2,
            time_limit: None,
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 200,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of iterations.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Builder pattern: set the UCB exploration constant.
    pub fn with_exploration_constant(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Builder pattern: set the per-search deadline.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!((config.exploration_constant - 2f64.sqrt()).abs() < 1e-12);
        assert!(config.time_limit.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::default()
            .with_iterations(100)
            .with_exploration_constant(0.5)
            .with_time_limit(Duration::from_millis(25));

        assert_eq!(config.iterations, 100);
        assert!((config.exploration_constant - 0.5).abs() < 1e-12);
        assert_eq!(config.time_limit, Some(Duration::from_millis(25)));
    }

    #[test]
    fn test_testing_config() {
        let config = MctsConfig::for_testing();
        assert_eq!(config.iterations, 200);
        assert_eq!(
            config.exploration_constant,
            MctsConfig::default().exploration_constant
        );
    }
}
