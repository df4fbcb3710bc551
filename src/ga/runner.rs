//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::GaConfig;
use super::operators::{mutate, single_point_crossover};
use super::selection::select_parents;
use crate::error::LandingError;
use crate::problem::LandingProblem;
use crate::random::{distinct_pair, rng_from_seed, shuffle};
use crate::schedule::{Direction, Schedule};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best schedule found during the entire run.
    pub best: Schedule,

    /// Aggregate score of `best`.
    pub best_score: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Best score after each generation.
    pub score_history: Vec<f64>,

    /// The last generation, scored.
    pub population: Vec<Schedule>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_landing::airplane::{generate_stream, AirplaneBounds};
/// use u_landing::ga::{GaConfig, GaRunner};
/// use u_landing::random::create_rng;
/// use u_landing::LandingProblem;
///
/// let mut rng = create_rng(7);
/// let planes = generate_stream(12, &AirplaneBounds::default(), &mut rng).unwrap();
/// let problem = LandingProblem::new(planes).unwrap();
///
/// let config = GaConfig::default().with_population_size(20).with_seed(7);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.population.len() <= 20);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    pub fn run(problem: &LandingProblem, config: &GaConfig) -> Result<GaResult, LandingError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with an injected generator.
    ///
    /// # Errors
    ///
    /// - [`LandingError::InvalidConfig`] if `config` does not validate
    /// - [`LandingError::TooFewRecords`] for a fleet of fewer than 3
    ///   airplanes when `crossover_rate > 0`
    #[tracing::instrument(level = "debug", name = "genetic_algorithm", skip_all)]
    pub fn run_with_rng<R: Rng + ?Sized>(
        problem: &LandingProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, LandingError> {
        config.validate()?;

        let problem = problem.classified(config.urgency);
        let fleet = problem.fleet();
        if config.crossover_rate > 0.0 && fleet.len() < 3 {
            return Err(LandingError::TooFewRecords {
                required: 3,
                actual: fleet.len(),
            });
        }
        let direction = config.direction;

        // Initialize population from shuffled arrival orders
        let mut population = Vec::with_capacity(config.population_size);
        let mut scores = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let mut order = fleet.airplanes().to_vec();
            shuffle(&mut order, rng);
            let (schedule, score) = problem.scored_schedule(&order)?;
            population.push(schedule);
            scores.push(score);
        }

        // The initial population only feeds selection; the best is always
        // taken from an evolved generation.
        let mut best = Schedule::default();
        let mut best_score = direction.worst();
        let mut score_history = Vec::with_capacity(config.generations);
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;
        let mut generations = 0;

        for generation in 0..config.generations {
            generations = generation + 1;

            let parents = select_parents(&scores, direction, config.population_size, rng);

            let mut offspring = Vec::with_capacity(config.population_size + 1);
            while offspring.len() < config.population_size {
                let (a, b) = distinct_pair(parents.len(), rng);
                let p1 = &population[parents[a]];
                let p2 = &population[parents[b]];

                let (c1, c2) = if rng.random::<f64>() < config.crossover_rate {
                    single_point_crossover(p1, p2, rng)?
                } else {
                    (p1.clone(), p2.clone())
                };

                offspring.push(mutate(c1, fleet, config.mutation_rate, rng));
                offspring.push(mutate(c2, fleet, config.mutation_rate, rng));
            }
            offspring.truncate(config.population_size);

            population = offspring;
            scores = evaluate_population(&problem, &mut population, config.parallel);

            let gen_idx = best_index(&scores, direction);
            if generation == 0 || direction.is_better(scores[gen_idx], best_score) {
                best = population[gen_idx].clone();
                best_score = scores[gen_idx];
                stagnation_counter = 0;
                tracing::debug!(generation, best_score, "genetic algorithm: new best");
            } else {
                stagnation_counter += 1;
            }
            score_history.push(best_score);

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                tracing::debug!(generation, "genetic algorithm: stagnated");
                break;
            }
        }

        tracing::info!(best_score, generations, stagnated, "genetic algorithm finished");

        Ok(GaResult {
            best,
            best_score,
            generations,
            stagnated,
            score_history,
            population,
        })
    }
}

/// Scores every schedule in place and returns the aggregates.
#[cfg(feature = "parallel")]
fn evaluate_population(
    problem: &LandingProblem,
    population: &mut [Schedule],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        population
            .par_iter_mut()
            .map(|schedule| problem.evaluate(schedule))
            .collect()
    } else {
        evaluate_sequential(problem, population)
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population(
    problem: &LandingProblem,
    population: &mut [Schedule],
    _parallel: bool,
) -> Vec<f64> {
    evaluate_sequential(problem, population)
}

fn evaluate_sequential(problem: &LandingProblem, population: &mut [Schedule]) -> Vec<f64> {
    population
        .iter_mut()
        .map(|schedule| problem.evaluate(schedule))
        .collect()
}

/// Index of the best score; the first one wins ties.
fn best_index(scores: &[f64], direction: Direction) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if direction.is_better(score, scores[best]) {
            best = idx;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
