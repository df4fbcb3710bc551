//! The airplane entity.

use super::urgency::UrgencyPolicy;
use crate::error::LandingError;

/// Identifier of an airplane, unique within a run.
pub type AirplaneId = u32;

/// Minutes of consumption held back as the emergency reserve.
pub const EMERGENCY_FUEL_MINUTES: f64 = 60.0;

/// One airplane waiting to land.
///
/// All quantities are derived at construction. `fuel_level` is clamped up to
/// `emergency_fuel`, so `fuel_level_final` and `remaining_flying_time` are
/// never negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airplane {
    id: AirplaneId,
    fuel_consumption_rate: f64,
    expected_landing_time: f64,
    fuel_level: f64,
    emergency_fuel: f64,
    fuel_level_final: f64,
    remaining_flying_time: f64,
    is_urgent: bool,
}

impl Airplane {
    /// Creates an airplane from explicit parameters.
    ///
    /// Urgency is classified with [`UrgencyPolicy::ReserveMargin`].
    ///
    /// # Errors
    ///
    /// Returns [`LandingError::InvalidFuelRate`] when `fuel_consumption_rate`
    /// is not strictly positive and finite.
    pub fn new(
        id: AirplaneId,
        fuel_consumption_rate: f64,
        expected_landing_time: f64,
        fuel_level: f64,
    ) -> Result<Self, LandingError> {
        if !(fuel_consumption_rate.is_finite() && fuel_consumption_rate > 0.0) {
            return Err(LandingError::InvalidFuelRate(fuel_consumption_rate));
        }

        let emergency_fuel = fuel_consumption_rate * EMERGENCY_FUEL_MINUTES;
        let fuel_level = fuel_level.max(emergency_fuel);
        let fuel_level_final = fuel_level - emergency_fuel;
        let remaining_flying_time = fuel_level_final / fuel_consumption_rate;

        let mut airplane = Self {
            id,
            fuel_consumption_rate,
            expected_landing_time,
            fuel_level,
            emergency_fuel,
            fuel_level_final,
            remaining_flying_time,
            is_urgent: false,
        };
        airplane.reclassify(UrgencyPolicy::ReserveMargin);
        Ok(airplane)
    }

    pub fn id(&self) -> AirplaneId {
        self.id
    }

    pub fn fuel_consumption_rate(&self) -> f64 {
        self.fuel_consumption_rate
    }

    pub fn expected_landing_time(&self) -> f64 {
        self.expected_landing_time
    }

    pub fn fuel_level(&self) -> f64 {
        self.fuel_level
    }

    pub fn emergency_fuel(&self) -> f64 {
        self.emergency_fuel
    }

    /// Usable fuel above the emergency reserve.
    pub fn fuel_level_final(&self) -> f64 {
        self.fuel_level_final
    }

    /// Hours the airplane can stay airborne on its usable fuel.
    pub fn remaining_flying_time(&self) -> f64 {
        self.remaining_flying_time
    }

    pub fn is_urgent(&self) -> bool {
        self.is_urgent
    }

    /// Recomputes the urgency flag in place under `policy`.
    pub fn reclassify(&mut self, policy: UrgencyPolicy) {
        self.is_urgent = policy.is_urgent(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_quantities() {
        let plane = Airplane::new(1, 10.0, 2.0, 1500.0).unwrap();
        assert!((plane.emergency_fuel() - 600.0).abs() < 1e-10);
        assert!((plane.fuel_level_final() - 900.0).abs() < 1e-10);
        assert!((plane.remaining_flying_time() - 90.0).abs() < 1e-10);
        assert!(!plane.is_urgent());
    }

    #[test]
    fn test_fuel_clamped_to_reserve() {
        let plane = Airplane::new(2, 10.0, 2.0, 100.0).unwrap();
        assert!((plane.fuel_level() - plane.emergency_fuel()).abs() < 1e-10);
        assert_eq!(plane.fuel_level_final(), 0.0);
        assert_eq!(plane.remaining_flying_time(), 0.0);
        assert!(plane.is_urgent());
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert_eq!(
            Airplane::new(3, 0.0, 1.0, 100.0),
            Err(LandingError::InvalidFuelRate(0.0))
        );
        assert!(Airplane::new(3, -4.0, 1.0, 100.0).is_err());
        assert!(Airplane::new(3, f64::NAN, 1.0, 100.0).is_err());
    }

    #[test]
    fn test_reclassify_changes_only_flag() {
        // final 900 >= reserve 600 and 90h of flying time: not urgent by margin,
        // but it cannot make an arrival expected at t = 120h.
        let mut plane = Airplane::new(4, 10.0, 120.0, 1500.0).unwrap();
        let before = plane.clone();
        assert!(!plane.is_urgent());

        plane.reclassify(UrgencyPolicy::ArrivalReachability);
        assert!(plane.is_urgent());
        assert_eq!(plane.remaining_flying_time(), before.remaining_flying_time());
        assert_eq!(plane.expected_landing_time(), before.expected_landing_time());
    }
}
