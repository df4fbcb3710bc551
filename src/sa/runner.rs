//! SA execution loop.

use rand::Rng;

use super::config::SaConfig;
use crate::error::LandingError;
use crate::problem::LandingProblem;
use crate::random::rng_from_seed;
use crate::schedule::Schedule;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best schedule seen.
    pub best: Schedule,

    /// Aggregate score of `best`.
    pub best_score: f64,

    /// Total neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Accepted moves, improving or not.
    pub accepted_moves: usize,

    /// Best score after every iteration.
    pub score_history: Vec<f64>,
}

/// Executes Simulated Annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run(problem: &LandingProblem, config: &SaConfig) -> Result<SaResult, LandingError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA with an injected generator.
    ///
    /// A neighbor is accepted when it is better than the current schedule,
    /// or otherwise when `exp(gain / T)` exceeds a uniform draw.
    ///
    /// # Errors
    ///
    /// - [`LandingError::InvalidConfig`] if `config` does not validate
    /// - [`LandingError::TooFewRecords`] for a fleet of one airplane
    #[tracing::instrument(level = "debug", name = "simulated_annealing", skip_all)]
    pub fn run_with_rng<R: Rng + ?Sized>(
        problem: &LandingProblem,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult, LandingError> {
        config.validate()?;

        let problem = problem.classified(config.urgency);
        let neighbors = problem.neighbors();
        let direction = config.direction;

        let (mut current, mut current_score) = problem.initial_schedule()?;
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut score_history = Vec::new();

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = neighbors.random_swap(&current, rng)?;
                let neighbor_score = neighbor.total_score();
                let gain = direction.gain(neighbor_score, current_score);

                // Metropolis acceptance criterion
                let accept = gain > 0.0 || (gain / temperature).exp() > rng.random::<f64>();

                if accept {
                    current = neighbor;
                    current_score = neighbor_score;
                    accepted_moves += 1;

                    if direction.is_better(current_score, best_score) {
                        best = current.clone();
                        best_score = current_score;
                    }
                }

                iterations += 1;
                score_history.push(best_score);
            }

            temperature = config.cooling.cool(temperature);
            tracing::debug!(temperature, best_score, "simulated annealing: cooled");
        }

        tracing::info!(
            score = best_score,
            iterations,
            accepted_moves,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_score,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            score_history,
        })
    }
}
