//! Urgency classification policies.

use super::model::Airplane;

/// Formula used to decide whether an airplane is urgent.
///
/// A classification pass applies exactly one variant to every airplane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UrgencyPolicy {
    /// Urgent when the usable fuel is below the emergency reserve or less
    /// than one hour of flying time remains.
    ///
    /// Applied at construction; used by the schedule builder, simulated
    /// annealing and the genetic algorithm.
    #[default]
    ReserveMargin,

    /// Urgent when the airplane cannot stay airborne until its expected
    /// landing time.
    ///
    /// Used by hill climbing and tabu search.
    ArrivalReachability,
}

impl UrgencyPolicy {
    /// Evaluates the policy for one airplane.
    pub fn is_urgent(self, airplane: &Airplane) -> bool {
        match self {
            UrgencyPolicy::ReserveMargin => {
                airplane.fuel_level_final() < airplane.emergency_fuel()
                    || airplane.remaining_flying_time() < 1.0
            }
            UrgencyPolicy::ArrivalReachability => {
                airplane.remaining_flying_time() < airplane.expected_landing_time()
            }
        }
    }
}
