//! Runway landing scheduling with local search and metaheuristics.
//!
//! Given a fleet of inbound airplanes, each with a fuel reserve, a fuel
//! consumption rate and an expected arrival time, the crate assigns every
//! airplane a landing slot on a small set of parallel runways and scores
//! the resulting schedule. Four optimizers then search the space of landing
//! orders:
//!
//! - **Hill Climbing**: Steepest descent over sampled swap neighbors; stops
//!   at the first local optimum.
//! - **Simulated Annealing (SA)**: Random record swaps accepted by the
//!   Metropolis criterion under a cooling temperature.
//! - **Tabu Search (TS)**: Swap neighborhoods with a FIFO memory of
//!   visited landing orders and random diversification.
//! - **Genetic Algorithm (GA)**: Population of schedules evolved with
//!   weighted selection, single-point crossover and landing-time mutation.
//!
//! # Architecture
//!
//! - [`airplane`]: The airplane model, urgency classification, the fleet
//!   index and a random traffic generator.
//! - [`schedule`]: Schedule construction, scoring and neighborhood moves.
//! - [`hill`], [`sa`], [`tabu`], [`ga`]: One optimizer each, split into a
//!   config and a runner.
//!
//! Every runner takes a [`LandingProblem`] by reference and never mutates
//! the caller's airplanes.
//!
//! # Example
//!
//! ```
//! use u_landing::airplane::{generate_stream, AirplaneBounds};
//! use u_landing::hill::{HillClimbingConfig, HillClimbingRunner};
//! use u_landing::random::create_rng;
//! use u_landing::LandingProblem;
//!
//! let mut rng = create_rng(42);
//! let planes = generate_stream(15, &AirplaneBounds::default(), &mut rng).unwrap();
//! let problem = LandingProblem::new(planes).unwrap();
//!
//! let config = HillClimbingConfig::default().with_seed(42);
//! let result = HillClimbingRunner::run(&problem, &config).unwrap();
//! assert!(result.score <= result.initial_score);
//! ```

pub mod airplane;
pub mod error;
pub mod ga;
pub mod hill;
mod problem;
pub mod random;
pub mod sa;
pub mod schedule;
pub mod tabu;

pub use error::LandingError;
pub use problem::LandingProblem;
