//! Error type shared by every module of the crate.

use std::fmt::{self, Display};

use crate::airplane::AirplaneId;

/// Input-validation failures surfaced to the caller.
///
/// Airplane-id lookups that miss are not errors: the affected record is
/// simply left unscored.
#[derive(Debug, Clone, PartialEq)]
pub enum LandingError {
    /// There are no airplanes to schedule.
    EmptyFleet,
    /// Two airplanes in the same run share an id.
    DuplicateAirplaneId(AirplaneId),
    /// The fuel consumption rate is not strictly positive and finite.
    InvalidFuelRate(f64),
    /// An operation needs more records than the schedule holds.
    TooFewRecords { required: usize, actual: usize },
    /// A configuration failed validation.
    InvalidConfig(String),
}

impl Display for LandingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingError::EmptyFleet => write!(f, "no airplanes to schedule"),
            LandingError::DuplicateAirplaneId(id) => write!(f, "duplicate airplane id: {id}"),
            LandingError::InvalidFuelRate(rate) => {
                write!(f, "fuel consumption rate must be positive, got {rate}")
            }
            LandingError::TooFewRecords { required, actual } => write!(
                f,
                "operation requires at least {required} records, schedule has {actual}"
            ),
            LandingError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for LandingError {}

impl From<String> for LandingError {
    fn from(msg: String) -> Self {
        LandingError::InvalidConfig(msg)
    }
}
