//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Reclassify urgency, build and score the initial schedule
//! 2. Sample recomputed swap neighbors of the current schedule
//! 3. Take the best neighbor (first one wins ties)
//! 4. Stop if it does not strictly beat the current score, else move
//!
//! Every accepted move strictly improves the score and the permutation
//! space is finite, so the loop always terminates.

use rand::Rng;

use super::config::HillClimbingConfig;
use crate::error::LandingError;
use crate::problem::LandingProblem;
use crate::random::rng_from_seed;
use crate::schedule::Schedule;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbingResult {
    /// The local optimum reached.
    pub schedule: Schedule,
    /// Aggregate score of `schedule`.
    pub score: f64,
    /// Aggregate score of the initial schedule.
    pub initial_score: f64,
    /// Neighborhoods sampled.
    pub iterations: usize,
    /// Current score at the start of every iteration.
    pub score_history: Vec<f64>,
}

/// Executes Hill Climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    pub fn run(
        problem: &LandingProblem,
        config: &HillClimbingConfig,
    ) -> Result<HillClimbingResult, LandingError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs hill climbing with an injected generator.
    ///
    /// # Errors
    ///
    /// - [`LandingError::InvalidConfig`] if `config` does not validate
    /// - [`LandingError::TooFewRecords`] for a fleet of one airplane
    #[tracing::instrument(level = "debug", name = "hill_climbing", skip_all)]
    pub fn run_with_rng<R: Rng + ?Sized>(
        problem: &LandingProblem,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<HillClimbingResult, LandingError> {
        config.validate()?;

        let problem = problem.classified(config.urgency);
        let neighbors = problem.neighbors();
        let (mut current, initial_score) = problem.initial_schedule()?;
        let mut current_score = initial_score;
        let mut score_history = Vec::new();

        loop {
            if config.max_iterations > 0 && score_history.len() >= config.max_iterations {
                tracing::debug!("hill climbing: iteration cap reached");
                break;
            }
            score_history.push(current_score);

            let mut next: Option<Schedule> = None;
            let mut next_score = current_score;
            for mut candidate in neighbors.random_recompute(&current, config.num_successors, rng)? {
                let score = problem.evaluate(&mut candidate);
                if config.direction.is_better(score, next_score) {
                    next_score = score;
                    next = Some(candidate);
                }
            }

            let Some(next) = next else {
                break;
            };
            tracing::debug!(
                iteration = score_history.len(),
                score = next_score,
                "hill climbing: moved"
            );
            current = next;
            current_score = next_score;
        }

        tracing::info!(
            initial = initial_score,
            score = current_score,
            iterations = score_history.len(),
            "hill climbing finished"
        );

        Ok(HillClimbingResult {
            schedule: current,
            score: current_score,
            initial_score,
            iterations: score_history.len(),
            score_history,
        })
    }
}
