//! Swap neighborhoods.
//!
//! Three ways to move from a schedule to a nearby one:
//!
//! - [`NeighborGenerator::pairwise`]: every pair swap, records untouched
//! - [`NeighborGenerator::random_recompute`]: random pair swaps, then landing
//!   times and runways are recomputed against the earliest-free runway
//! - [`NeighborGenerator::random_swap`]: one random pair swap, rescored in
//!   place with no timing change
//!
//! Every successor is a fresh copy; the source schedule is never modified.

use rand::Rng;

use super::evaluator::{evaluate, record_score};
use super::runway::RunwayConfig;
use super::types::Schedule;
use crate::airplane::Fleet;
use crate::error::LandingError;
use crate::random::distinct_pair;

/// Default number of successors drawn by [`NeighborGenerator::random_recompute`].
pub const DEFAULT_NUM_SUCCESSORS: usize = 15;

/// Generates neighbor schedules against a fixed fleet and runway set.
#[derive(Debug, Clone, Copy)]
pub struct NeighborGenerator<'a> {
    fleet: &'a Fleet,
    runways: &'a RunwayConfig,
}

impl<'a> NeighborGenerator<'a> {
    pub fn new(fleet: &'a Fleet, runways: &'a RunwayConfig) -> Self {
        Self { fleet, runways }
    }

    /// All `n(n−1)/2` pair swaps, in `(i, j)` lexicographic order.
    ///
    /// Records are exchanged verbatim: landing times and scores travel with
    /// them. A schedule with at most one record yields itself.
    pub fn pairwise(&self, schedule: &Schedule) -> Vec<Schedule> {
        let n = schedule.len();
        if n <= 1 {
            return vec![schedule.clone()];
        }

        let mut successors = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                successors.push(schedule.swapped(i, j));
            }
        }
        successors
    }

    /// `count` random pair swaps with full landing-time recomputation.
    ///
    /// After each swap, records are replayed in order: each takes the runway
    /// that frees up first (lowest number on ties), lands at
    /// `max(free_at, expected)` and blocks that runway for the occupancy
    /// time. Neither the separation gap nor the urgency clamp of the
    /// builder applies. Records whose airplane is unknown are skipped.
    ///
    /// # Errors
    ///
    /// - [`LandingError::TooFewRecords`] if the schedule has fewer than 2 records
    /// - [`LandingError::InvalidConfig`] if the runway configuration does not
    ///   validate
    pub fn random_recompute<R: Rng + ?Sized>(
        &self,
        schedule: &Schedule,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Schedule>, LandingError> {
        require_pair(schedule)?;
        self.runways.validate()?;

        let successors = (0..count)
            .map(|_| {
                let (i, j) = distinct_pair(schedule.len(), rng);
                let mut next = schedule.swapped(i, j);
                self.replay(&mut next);
                next
            })
            .collect();
        Ok(successors)
    }

    /// One random pair swap, rescored without touching landing times.
    ///
    /// Scores move with their records, so the aggregate equals the source's
    /// as long as every airplane is in the fleet.
    ///
    /// # Errors
    ///
    /// [`LandingError::TooFewRecords`] if the schedule has fewer than 2 records.
    pub fn random_swap<R: Rng + ?Sized>(
        &self,
        schedule: &Schedule,
        rng: &mut R,
    ) -> Result<Schedule, LandingError> {
        require_pair(schedule)?;

        let (i, j) = distinct_pair(schedule.len(), rng);
        let mut next = schedule.swapped(i, j);
        evaluate(&mut next, self.fleet);
        Ok(next)
    }

    fn replay(&self, schedule: &mut Schedule) {
        // (free_at, runway), earliest first.
        let mut slots: Vec<(f64, usize)> = (1..=self.runways.count).map(|r| (0.0, r)).collect();

        for record in schedule.records_mut() {
            let Some(airplane) = self.fleet.get(record.airplane_id) else {
                continue;
            };
            let (free_at, runway) = slots.remove(0);
            let actual = free_at.max(airplane.expected_landing_time());

            record.actual_landing_time = actual;
            record.runway = runway;
            record.score = Some(record_score(airplane, actual));

            slots.push((actual + self.runways.occupancy, runway));
            slots.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        }
    }
}

fn require_pair(schedule: &Schedule) -> Result<(), LandingError> {
    if schedule.len() < 2 {
        return Err(LandingError::TooFewRecords {
            required: 2,
            actual: schedule.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airplane::{Airplane, AirplaneId};
    use crate::random::create_rng;
    use crate::schedule::{build_schedule, evaluate, LandingRecord};

    fn fleet_of(expected: &[f64]) -> Fleet {
        let planes = expected
            .iter()
            .enumerate()
            .map(|(i, &t)| Airplane::new(i as AirplaneId + 1, 10.0, t, 1500.0).unwrap())
            .collect();
        Fleet::new(planes).unwrap()
    }

    fn scored(fleet: &Fleet, runways: &RunwayConfig) -> Schedule {
        let mut schedule = build_schedule(fleet.airplanes(), runways).unwrap();
        evaluate(&mut schedule, fleet);
        schedule
    }

    #[test]
    fn test_pairwise_single_record_is_identity() {
        let fleet = fleet_of(&[1.0]);
        let runways = RunwayConfig::default();
        let schedule = scored(&fleet, &runways);
        let successors = NeighborGenerator::new(&fleet, &runways).pairwise(&schedule);
        assert_eq!(successors, vec![schedule]);
    }

    #[test]
    fn test_pairwise_empty_is_identity() {
        let fleet = fleet_of(&[]);
        let runways = RunwayConfig::default();
        let successors = NeighborGenerator::new(&fleet, &runways).pairwise(&Schedule::default());
        assert_eq!(successors.len(), 1);
        assert!(successors[0].is_empty());
    }

    #[test]
    fn test_pairwise_count_and_order() {
        let fleet = fleet_of(&[1.0, 2.0, 3.0, 4.0]);
        let runways = RunwayConfig::default();
        let schedule = scored(&fleet, &runways);
        let successors = NeighborGenerator::new(&fleet, &runways).pairwise(&schedule);

        assert_eq!(successors.len(), 6);
        assert_eq!(successors[0].key(), vec![2, 1, 3, 4]);
        assert_eq!(successors[5].key(), vec![1, 2, 4, 3]);
        // Verbatim: times and scores travel with the record.
        assert_eq!(successors[0].records()[0], schedule.records()[1]);
        assert_eq!(schedule.key(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_random_recompute_needs_two_records() {
        let fleet = fleet_of(&[1.0]);
        let runways = RunwayConfig::default();
        let schedule = scored(&fleet, &runways);
        let mut rng = create_rng(42);
        let err = NeighborGenerator::new(&fleet, &runways)
            .random_recompute(&schedule, 15, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            LandingError::TooFewRecords {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_random_recompute_rejects_zero_runways() {
        let fleet = fleet_of(&[1.0, 2.0]);
        let schedule = scored(&fleet, &RunwayConfig::default());
        let runways = RunwayConfig::default().with_count(0);
        let mut rng = create_rng(42);

        let result = NeighborGenerator::new(&fleet, &runways).random_recompute(&schedule, 1, &mut rng);
        assert!(matches!(result, Err(LandingError::InvalidConfig(_))));
    }

    #[test]
    fn test_random_recompute_replays_earliest_runway() {
        // Two airplanes, single runway: whichever lands second waits 3h.
        let fleet = fleet_of(&[1.0, 1.5]);
        let runways = RunwayConfig::default().with_count(1);
        let schedule = scored(&fleet, &runways);
        let mut rng = create_rng(42);

        let successors = NeighborGenerator::new(&fleet, &runways)
            .random_recompute(&schedule, 5, &mut rng)
            .unwrap();

        assert_eq!(successors.len(), 5);
        for next in &successors {
            assert_eq!(next.key(), vec![2, 1]);
            let first = &next.records()[0];
            let second = &next.records()[1];
            assert_eq!(first.actual_landing_time, 1.5);
            assert_eq!(second.actual_landing_time, 4.5);
            assert_eq!(first.score, Some(1000.0));
            assert_eq!(second.score, Some(1000.0 - 3.5));
        }
    }

    #[test]
    fn test_random_recompute_picks_free_runway() {
        let fleet = fleet_of(&[1.0, 1.0, 1.0, 1.0]);
        let runways = RunwayConfig::default();
        let schedule = scored(&fleet, &runways);
        let mut rng = create_rng(7);

        let successors = NeighborGenerator::new(&fleet, &runways)
            .random_recompute(&schedule, 10, &mut rng)
            .unwrap();

        for next in &successors {
            let runways: Vec<usize> = next.iter().map(|r| r.runway).collect();
            let times: Vec<f64> = next.iter().map(|r| r.actual_landing_time).collect();
            assert_eq!(runways, vec![1, 2, 3, 1]);
            assert_eq!(times, vec![1.0, 1.0, 1.0, 4.0]);
        }
    }

    #[test]
    fn test_random_recompute_skips_unknown_airplane() {
        let fleet = fleet_of(&[1.0, 2.0]);
        let runways = RunwayConfig::default().with_count(1);
        let schedule = Schedule::new(vec![
            LandingRecord {
                airplane_id: 99,
                actual_landing_time: 0.0,
                is_urgent: false,
                runway: 1,
                score: None,
            },
            LandingRecord {
                airplane_id: 1,
                actual_landing_time: 1.0,
                is_urgent: false,
                runway: 1,
                score: None,
            },
        ]);
        let mut rng = create_rng(1);
        let next = NeighborGenerator::new(&fleet, &runways)
            .random_recompute(&schedule, 1, &mut rng)
            .unwrap()
            .remove(0);

        assert_eq!(next.key(), vec![1, 99]);
        assert_eq!(next.records()[0].actual_landing_time, 1.0);
        assert_eq!(next.records()[1].score, None);
        assert_eq!(next.records()[1].actual_landing_time, 0.0);
    }

    #[test]
    fn test_random_swap_preserves_aggregate() {
        let fleet = fleet_of(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let runways = RunwayConfig::default();
        let schedule = scored(&fleet, &runways);
        let mut rng = create_rng(42);

        let neighbors = NeighborGenerator::new(&fleet, &runways);
        let next = neighbors.random_swap(&schedule, &mut rng).unwrap();
        assert_ne!(next.key(), schedule.key());
        assert!((next.total_score() - schedule.total_score()).abs() < 1e-9);
        assert!(neighbors
            .random_swap(&Schedule::default(), &mut rng)
            .is_err());
    }
}
