//! Genetic Algorithm (GA) over landing schedules.
//!
//! Individuals are whole schedules. Each generation draws the parent pool
//! with fitness-weighted sampling without replacement, recombines parent
//! pairs with single-point crossover, and mutates children by exchanging
//! landing times between rows.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, operator rates, stagnation limit
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best schedule, score history and final population
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and landing-time mutation
//! - [`selection`]: Inverse-score weighted parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
