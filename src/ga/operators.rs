//! Schedule crossover and mutation.
//!
//! Both operators work on copies. Neither rescores: the runner evaluates
//! the whole generation afterwards.

use rand::Rng;

use crate::airplane::Fleet;
use crate::error::LandingError;
use crate::schedule::{LandingRecord, Schedule};

/// Single-point crossover.
///
/// Picks a cut uniformly in `1..=n−2` and exchanges the row suffixes:
/// `child1 = p1[..cut] + p2[cut..]`, `child2 = p2[..cut] + p1[cut..]`.
/// Rows are copied verbatim, so a child may hold the same airplane twice
/// and miss another.
///
/// # Errors
///
/// [`LandingError::TooFewRecords`] if either parent has fewer than 3 rows.
///
/// # Complexity
/// O(n)
pub fn single_point_crossover<R: Rng + ?Sized>(
    parent1: &Schedule,
    parent2: &Schedule,
    rng: &mut R,
) -> Result<(Schedule, Schedule), LandingError> {
    let n = parent1.len().min(parent2.len());
    if n < 3 {
        return Err(LandingError::TooFewRecords {
            required: 3,
            actual: n,
        });
    }

    let cut = rng.random_range(1..=n - 2);
    Ok((
        splice(parent1, parent2, cut),
        splice(parent2, parent1, cut),
    ))
}

fn splice(head: &Schedule, tail: &Schedule, cut: usize) -> Schedule {
    let records: Vec<LandingRecord> = head.records()[..cut]
        .iter()
        .chain(&tail.records()[cut..])
        .cloned()
        .collect();
    Schedule::new(records)
}

/// Per-row landing-time mutation.
///
/// Each row, with probability `rate`, swaps its actual landing time with
/// the row holding a randomly drawn fleet airplane. Nothing happens when
/// the drawn airplane is not in the schedule or is the row itself.
pub fn mutate<R: Rng + ?Sized>(
    mut schedule: Schedule,
    fleet: &Fleet,
    rate: f64,
    rng: &mut R,
) -> Schedule {
    if fleet.is_empty() {
        return schedule;
    }

    for row in 0..schedule.len() {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let drawn = fleet.airplanes()[rng.random_range(0..fleet.len())].id();
        let Some(other) = schedule.position_of(drawn) else {
            continue;
        };
        if other == row {
            continue;
        }

        let records = schedule.records_mut();
        let time = records[row].actual_landing_time;
        records[row].actual_landing_time = records[other].actual_landing_time;
        records[other].actual_landing_time = time;
    }
    schedule
}
