//! Initial schedule construction.
//!
//! # Algorithm
//!
//! 1. Split airplanes by urgency flag
//! 2. Urgent airplanes first, least remaining flying time first
//! 3. Then the rest, earliest expected landing first
//! 4. Assign runways round-robin by position; each landing waits for its
//!    runway to free up plus the separation gap
//! 5. An urgent airplane never lands later than it can stay airborne, even
//!    if that breaks runway separation
//!
//! Both sorts are stable, so input order breaks ties.
//!
//! # Complexity
//! O(n log n)

use super::runway::RunwayConfig;
use super::types::{LandingRecord, Schedule};
use crate::airplane::Airplane;
use crate::error::LandingError;

/// Builds the initial, unscored schedule for `airplanes`.
///
/// # Errors
///
/// - [`LandingError::EmptyFleet`] if `airplanes` is empty
/// - [`LandingError::InvalidConfig`] if `runways` does not validate
///
/// # Examples
///
/// ```
/// use u_landing::airplane::Airplane;
/// use u_landing::schedule::{build_schedule, RunwayConfig};
///
/// let planes = vec![
///     Airplane::new(1, 10.0, 2.0, 1500.0).unwrap(),
///     Airplane::new(2, 10.0, 1.0, 1500.0).unwrap(),
/// ];
/// let schedule = build_schedule(&planes, &RunwayConfig::default()).unwrap();
/// assert_eq!(schedule.key(), vec![2, 1]);
/// ```
pub fn build_schedule(
    airplanes: &[Airplane],
    runways: &RunwayConfig,
) -> Result<Schedule, LandingError> {
    if airplanes.is_empty() {
        return Err(LandingError::EmptyFleet);
    }
    runways.validate()?;

    let (mut urgent, mut regular): (Vec<&Airplane>, Vec<&Airplane>) =
        airplanes.iter().partition(|a| a.is_urgent());
    urgent.sort_by(|a, b| a.remaining_flying_time().total_cmp(&b.remaining_flying_time()));
    regular.sort_by(|a, b| a.expected_landing_time().total_cmp(&b.expected_landing_time()));

    let mut available = vec![0.0_f64; runways.count];
    let records = urgent
        .into_iter()
        .chain(regular)
        .enumerate()
        .map(|(position, airplane)| {
            let runway = position % runways.count;
            let next_available = available[runway] + runways.separation_gap;
            let mut actual = airplane.expected_landing_time().max(next_available);

            if airplane.is_urgent() && actual > airplane.remaining_flying_time() {
                actual = airplane.remaining_flying_time();
            }

            available[runway] = actual + runways.occupancy;
            LandingRecord {
                airplane_id: airplane.id(),
                actual_landing_time: actual,
                is_urgent: airplane.is_urgent(),
                runway: runway + 1,
                score: None,
            }
        })
        .collect();

    Ok(Schedule::new(records))
}
