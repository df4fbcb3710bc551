//! Hill climbing configuration.

use crate::airplane::UrgencyPolicy;
use crate::schedule::neighbor::DEFAULT_NUM_SUCCESSORS;
use crate::schedule::Direction;

/// Configuration parameters for Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_landing::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_num_successors(30)
///     .with_seed(7);
/// assert_eq!(config.num_successors, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbingConfig {
    /// Neighbors sampled per step.
    pub num_successors: usize,
    /// Urgency reclassification applied before the initial schedule.
    /// `None` keeps the fleet's flags.
    pub urgency: Option<UrgencyPolicy>,
    /// Which way the aggregate score improves.
    pub direction: Direction,
    /// Hard cap on steps. 0 = run until a local optimum.
    pub max_iterations: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            num_successors: DEFAULT_NUM_SUCCESSORS,
            urgency: Some(UrgencyPolicy::ArrivalReachability),
            direction: Direction::Minimize,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_num_successors(mut self, n: usize) -> Self {
        self.num_successors = n;
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

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_successors == 0 {
            return Err("num_successors must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbingConfig::default();
        assert_eq!(config.num_successors, 15);
        assert_eq!(config.urgency, Some(UrgencyPolicy::ArrivalReachability));
        assert_eq!(config.direction, Direction::Minimize);
        assert_eq!(config.max_iterations, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_zero_successors() {
        let config = HillClimbingConfig::default().with_num_successors(0);
        assert!(config.validate().is_err());
    }
}
