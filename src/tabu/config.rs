//! Tabu Search configuration.

use crate::airplane::UrgencyPolicy;
use crate::schedule::neighbor::DEFAULT_NUM_SUCCESSORS;
use crate::schedule::Direction;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_landing::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(200)
///     .with_max_tabu_size(20);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.max_tabu_size, 20);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Number of iterations.
    pub max_iterations: usize,
    /// How many schedule keys the tabu list remembers.
    pub max_tabu_size: usize,
    /// Neighbors sampled per iteration.
    pub num_successors: usize,
    /// Probability of jumping to a random neighbor when nothing improves.
    pub diversification_rate: f64,
    /// Urgency reclassification applied before the initial schedule.
    pub urgency: Option<UrgencyPolicy>,
    /// Which way the aggregate score improves.
    pub direction: Direction,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_tabu_size: 10,
            num_successors: DEFAULT_NUM_SUCCESSORS,
            diversification_rate: 0.1,
            urgency: Some(UrgencyPolicy::ArrivalReachability),
            direction: Direction::Minimize,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_max_tabu_size(mut self, size: usize) -> Self {
        self.max_tabu_size = size;
        self
    }

    pub fn with_num_successors(mut self, n: usize) -> Self {
        self.num_successors = n;
        self
    }

    pub fn with_diversification_rate(mut self, rate: f64) -> Self {
        self.diversification_rate = rate;
        self
    }

    pub fn with_urgency(mut self, policy: Option<UrgencyPolicy>) -> Self {
        self.urgency = policy;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_successors == 0 {
            return Err("num_successors must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.diversification_rate) {
            return Err(format!(
                "diversification_rate must be in [0, 1], got {}",
                self.diversification_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.max_tabu_size, 10);
        assert_eq!(config.num_successors, 15);
        assert!((config.diversification_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.urgency, Some(UrgencyPolicy::ArrivalReachability));
        assert_eq!(config.direction, Direction::Minimize);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_max_tabu_size(3)
            .with_num_successors(5)
            .with_diversification_rate(0.0)
            .with_seed(123);

        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.max_tabu_size, 3);
        assert_eq!(config.num_successors, 5);
        assert_eq!(config.seed, Some(123));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_rate() {
        assert!(TabuConfig::default()
            .with_diversification_rate(1.5)
            .validate()
            .is_err());
    }
}
