//! Random airplane generation.
//!
//! The optimizers never call this; it feeds callers, tests and benchmarks
//! with realistic input streams.

use std::ops::RangeInclusive;

use rand::Rng;

use super::model::{Airplane, AirplaneId};
use crate::error::LandingError;

/// Sampling ranges for random airplanes.
///
/// # Examples
///
/// ```
/// use u_landing::airplane::AirplaneBounds;
///
/// let bounds = AirplaneBounds::default()
///     .with_fuel(1000.0, 5000.0)
///     .with_arrival_time(0.0, 24.0);
/// assert!(bounds.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirplaneBounds {
    /// Fuel level range.
    pub fuel: (f64, f64),
    /// Expected landing time range, in hours from the scheduling epoch.
    pub arrival_time: (f64, f64),
    /// Fuel consumption rate range, in units per hour.
    pub consumption_rate: (f64, f64),
}

impl Default for AirplaneBounds {
    fn default() -> Self {
        Self {
            fuel: (1000.0, 5000.0),
            arrival_time: (0.0, 24.0),
            consumption_rate: (5.0, 20.0),
        }
    }
}

impl AirplaneBounds {
    pub fn with_fuel(mut self, min: f64, max: f64) -> Self {
        self.fuel = (min, max);
        self
    }

    pub fn with_arrival_time(mut self, min: f64, max: f64) -> Self {
        self.arrival_time = (min, max);
        self
    }

    pub fn with_consumption_rate(mut self, min: f64, max: f64) -> Self {
        self.consumption_rate = (min, max);
        self
    }

    /// Validates the ranges.
    pub fn validate(&self) -> Result<(), String> {
        for (name, (min, max)) in [
            ("fuel", self.fuel),
            ("arrival_time", self.arrival_time),
            ("consumption_rate", self.consumption_rate),
        ] {
            if !(min.is_finite() && max.is_finite()) {
                return Err(format!("{name} bounds must be finite"));
            }
            if min > max {
                return Err(format!("{name} min {min} exceeds max {max}"));
            }
        }
        if self.consumption_rate.0 <= 0.0 {
            return Err("consumption_rate must be strictly positive".into());
        }
        Ok(())
    }
}

fn range((min, max): (f64, f64)) -> RangeInclusive<f64> {
    min..=max
}

impl Airplane {
    /// Draws an airplane uniformly within `bounds`.
    ///
    /// `bounds` must have passed [`AirplaneBounds::validate`].
    pub fn random<R: Rng + ?Sized>(
        id: AirplaneId,
        bounds: &AirplaneBounds,
        rng: &mut R,
    ) -> Result<Self, LandingError> {
        let rate = rng.random_range(range(bounds.consumption_rate));
        let expected = rng.random_range(range(bounds.arrival_time));
        let fuel = rng.random_range(range(bounds.fuel));
        Airplane::new(id, rate, expected, fuel)
    }
}

/// Generates `count` random airplanes with ids `1..=count`.
pub fn generate_stream<R: Rng + ?Sized>(
    count: usize,
    bounds: &AirplaneBounds,
    rng: &mut R,
) -> Result<Vec<Airplane>, LandingError> {
    bounds.validate()?;
    (1..=count)
        .map(|id| Airplane::random(id as AirplaneId, bounds, rng))
        .collect()
}
