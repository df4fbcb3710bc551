//! Hill Climbing (HC).
//!
//! Steepest-descent local search over sampled swap neighborhoods. Each step
//! samples a batch of recomputed swap neighbors and moves to the best one
//! only if it strictly beats the current schedule.
//!
//! With the default [`Direction::Minimize`](crate::schedule::Direction),
//! the climber drives the aggregate score down.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbingResult, HillClimbingRunner};
