//! Schedule scoring.
//!
//! Each record scores `1000 − |expected − actual| − penalty`, where the
//! penalty is 100 for an urgent airplane. The aggregate is the sum of the
//! record scores.
//!
//! Whether a higher or a lower aggregate counts as better is a property of
//! the optimizer, not of the score: see [`Direction`].

use super::types::Schedule;
use crate::airplane::{Airplane, Fleet};

/// Score of a record that lands exactly on time for a non-urgent airplane.
pub const BASE_SCORE: f64 = 1000.0;

/// Deducted from the record score of an urgent airplane.
pub const URGENCY_PENALTY: f64 = 100.0;

/// Score of one landing of `airplane` at `actual_landing_time`.
pub fn record_score(airplane: &Airplane, actual_landing_time: f64) -> f64 {
    let deviation = (airplane.expected_landing_time() - actual_landing_time).abs();
    let penalty = if airplane.is_urgent() {
        URGENCY_PENALTY
    } else {
        0.0
    };
    BASE_SCORE - deviation - penalty
}

/// Scores every record of `schedule` in place and returns the aggregate.
///
/// Urgency is read from `fleet`, not from the record snapshot. A record
/// whose airplane is not in `fleet` keeps whatever score it had.
pub fn evaluate(schedule: &mut Schedule, fleet: &Fleet) -> f64 {
    for record in schedule.records_mut() {
        if let Some(airplane) = fleet.get(record.airplane_id) {
            record.score = Some(record_score(airplane, record.actual_landing_time));
        }
    }
    schedule.total_score()
}

/// Which way an optimizer reads the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower aggregate is better.
    Minimize,
    /// Higher aggregate is better.
    Maximize,
}

impl Direction {
    /// Whether `candidate` is strictly better than `incumbent`.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        self.gain(candidate, incumbent) > 0.0
    }

    /// Improvement of `candidate` over `incumbent`; positive when better.
    pub fn gain(self, candidate: f64, incumbent: f64) -> f64 {
        match self {
            Direction::Minimize => incumbent - candidate,
            Direction::Maximize => candidate - incumbent,
        }
    }

    /// The worst possible score under this direction.
    pub fn worst(self) -> f64 {
        match self {
            Direction::Minimize => f64::INFINITY,
            Direction::Maximize => f64::NEG_INFINITY,
        }
    }
}
