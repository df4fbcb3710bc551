//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short-term memory
//! (the tabu list) of recently seen schedules to avoid cycling. Schedules are
//! identified by their ordered airplane ids, which fully determine the
//! recomputed landing times.
//!
//! When no admissible neighbor improves on the current schedule, the search
//! either jumps to a random neighbor (diversification) or takes the best
//! neighbor of the round even if it is tabu (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::{TabuResult, TabuRunner};
