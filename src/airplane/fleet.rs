//! The airplanes of one scheduling run.

use std::collections::HashMap;

use super::model::{Airplane, AirplaneId};
use super::urgency::UrgencyPolicy;
use crate::error::LandingError;

/// An ordered airplane list with constant-time lookup by id.
///
/// Input order is preserved: the schedule builder relies on it for
/// tie-breaking, and the genetic algorithm shuffles it to seed diversity.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    airplanes: Vec<Airplane>,
    index: HashMap<AirplaneId, usize>,
}

impl Fleet {
    /// Builds a fleet, rejecting duplicate ids.
    pub fn new(airplanes: Vec<Airplane>) -> Result<Self, LandingError> {
        let mut index = HashMap::with_capacity(airplanes.len());
        for (pos, airplane) in airplanes.iter().enumerate() {
            if index.insert(airplane.id(), pos).is_some() {
                return Err(LandingError::DuplicateAirplaneId(airplane.id()));
            }
        }
        Ok(Self { airplanes, index })
    }

    pub fn airplanes(&self) -> &[Airplane] {
        &self.airplanes
    }

    pub fn len(&self) -> usize {
        self.airplanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airplanes.is_empty()
    }

    /// Looks up an airplane by id.
    pub fn get(&self, id: AirplaneId) -> Option<&Airplane> {
        self.index.get(&id).map(|&pos| &self.airplanes[pos])
    }

    /// Returns a copy with every airplane reclassified under `policy`.
    pub fn reclassified(&self, policy: UrgencyPolicy) -> Fleet {
        let mut fleet = self.clone();
        for airplane in &mut fleet.airplanes {
            airplane.reclassify(policy);
        }
        fleet
    }
}
