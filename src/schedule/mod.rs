//! Landing schedules and the operations every optimizer shares.
//!
//! A [`Schedule`] is an ordered list of [`LandingRecord`]s. It is a value
//! type: neighbor generation, crossover and mutation always work on a copy,
//! so a schedule handed out by any function is never changed afterwards.
//!
//! # Submodules
//!
//! - [`builder`]: Urgency-first, round-robin initial construction
//! - [`evaluator`]: Deviation-based record scores and search [`Direction`]
//! - [`neighbor`]: Swap neighborhoods (exhaustive, recomputed, plain)

pub mod builder;
pub mod evaluator;
pub mod neighbor;
mod runway;
mod types;

pub use builder::build_schedule;
pub use evaluator::{evaluate, record_score, Direction, BASE_SCORE, URGENCY_PENALTY};
pub use neighbor::NeighborGenerator;
pub use runway::RunwayConfig;
pub use types::{LandingRecord, Schedule};
