//! The input of one scheduling run.

use crate::airplane::{Airplane, Fleet, UrgencyPolicy};
use crate::error::LandingError;
use crate::schedule::{build_schedule, evaluate, NeighborGenerator, RunwayConfig, Schedule};

/// A fleet together with the runways it lands on.
///
/// # Examples
///
/// ```
/// use u_landing::airplane::{generate_stream, AirplaneBounds};
/// use u_landing::random::create_rng;
/// use u_landing::LandingProblem;
///
/// let mut rng = create_rng(42);
/// let planes = generate_stream(10, &AirplaneBounds::default(), &mut rng).unwrap();
/// let problem = LandingProblem::new(planes).unwrap();
/// let (schedule, score) = problem.initial_schedule().unwrap();
/// assert_eq!(schedule.len(), 10);
/// assert!(score.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct LandingProblem {
    fleet: Fleet,
    runways: RunwayConfig,
}

impl LandingProblem {
    /// Creates a problem on the default three runways.
    pub fn new(airplanes: Vec<Airplane>) -> Result<Self, LandingError> {
        Self::with_runways(airplanes, RunwayConfig::default())
    }

    /// Creates a problem on a custom runway configuration.
    pub fn with_runways(
        airplanes: Vec<Airplane>,
        runways: RunwayConfig,
    ) -> Result<Self, LandingError> {
        if airplanes.is_empty() {
            return Err(LandingError::EmptyFleet);
        }
        runways.validate()?;
        Ok(Self {
            fleet: Fleet::new(airplanes)?,
            runways,
        })
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn runways(&self) -> &RunwayConfig {
        &self.runways
    }

    /// Returns a copy whose airplanes are reclassified under `policy`.
    pub fn with_urgency(&self, policy: UrgencyPolicy) -> LandingProblem {
        LandingProblem {
            fleet: self.fleet.reclassified(policy),
            runways: self.runways.clone(),
        }
    }

    /// Applies an optional urgency override.
    pub(crate) fn classified(&self, policy: Option<UrgencyPolicy>) -> LandingProblem {
        match policy {
            Some(policy) => self.with_urgency(policy),
            None => self.clone(),
        }
    }

    pub fn neighbors(&self) -> NeighborGenerator<'_> {
        NeighborGenerator::new(&self.fleet, &self.runways)
    }

    /// Scores `schedule` in place against this fleet.
    pub fn evaluate(&self, schedule: &mut Schedule) -> f64 {
        evaluate(schedule, &self.fleet)
    }

    /// Builds the initial schedule in fleet order and scores it.
    pub fn initial_schedule(&self) -> Result<(Schedule, f64), LandingError> {
        self.scored_schedule(self.fleet.airplanes())
    }

    /// Builds a schedule from `airplanes` in the given order and scores it.
    pub(crate) fn scored_schedule(
        &self,
        airplanes: &[Airplane],
    ) -> Result<(Schedule, f64), LandingError> {
        let mut schedule = build_schedule(airplanes, &self.runways)?;
        let score = self.evaluate(&mut schedule);
        Ok((schedule, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm(id: u32, expected: f64) -> Airplane {
        Airplane::new(id, 10.0, expected, 1500.0).unwrap()
    }

    #[test]
    fn test_worked_example() {
        let problem = LandingProblem::new(vec![calm(1, 1.0), calm(2, 2.0), calm(3, 3.0)]).unwrap();
        let (schedule, score) = problem.initial_schedule().unwrap();

        assert!((score - 3000.0).abs() < 1e-10);
        for (pos, record) in schedule.iter().enumerate() {
            assert_eq!(record.runway, pos + 1);
            assert_eq!(record.actual_landing_time, (pos + 1) as f64);
            assert_eq!(record.score, Some(1000.0));
        }
    }

    #[test]
    fn test_empty_fleet_rejected() {
        assert!(matches!(
            LandingProblem::new(vec![]),
            Err(LandingError::EmptyFleet)
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(matches!(
            LandingProblem::new(vec![calm(1, 1.0), calm(1, 2.0)]),
            Err(LandingError::DuplicateAirplaneId(1))
        ));
    }

    #[test]
    fn test_with_urgency_does_not_touch_source() {
        let problem = LandingProblem::new(vec![calm(1, 500.0)]).unwrap();
        let strict = problem.with_urgency(UrgencyPolicy::ArrivalReachability);
        assert!(!problem.fleet().airplanes()[0].is_urgent());
        assert!(strict.fleet().airplanes()[0].is_urgent());
        assert_eq!(problem.classified(None).fleet().airplanes(), problem.fleet().airplanes());
    }
}
