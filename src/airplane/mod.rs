//! Airplanes and their fuel-driven urgency.
//!
//! An [`Airplane`] is built once per run and is read-only afterwards,
//! except for its urgency flag, which optimizers may recompute under a
//! different [`UrgencyPolicy`] before they start.
//!
//! # Key Types
//!
//! - [`Airplane`]: Fuel state, target arrival and derived flying time
//! - [`UrgencyPolicy`]: The two named formulas for the urgency flag
//! - [`Fleet`]: The airplanes of one run, indexed by id
//! - [`AirplaneBounds`]: Ranges for random airplane generation

mod fleet;
mod generator;
mod model;
mod urgency;

pub use fleet::Fleet;
pub use generator::{generate_stream, AirplaneBounds};
pub use model::{Airplane, AirplaneId, EMERGENCY_FUEL_MINUTES};
pub use urgency::UrgencyPolicy;
