//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Reclassify urgency, build and score the initial schedule
//! 2. At each iteration:
//!    a. Sample recomputed swap neighbors of the current schedule
//!    b. Track the best neighbor of the round, tabu or not
//!    c. Among non-tabu neighbors, track the best one that improves on the
//!    current score; every non-tabu neighbor's key enters the tabu list
//!    d. If nothing admissible improves, jump to a random neighbor with
//!    probability `diversification_rate`, else take the round's best
//! 3. Stop after `max_iterations`

use rand::Rng;

use super::config::TabuConfig;
use super::list::TabuList;
use crate::error::LandingError;
use crate::problem::LandingProblem;
use crate::random::rng_from_seed;
use crate::schedule::Schedule;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Schedule the search ended on.
    pub schedule: Schedule,
    /// Aggregate score of `schedule`.
    pub score: f64,
    /// Best schedule visited, including the initial one.
    pub best: Schedule,
    /// Aggregate score of `best`.
    pub best_score: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Current score at the start of each iteration.
    pub score_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs tabu search with a generator seeded from `config.seed`.
    pub fn run(problem: &LandingProblem, config: &TabuConfig) -> Result<TabuResult, LandingError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs tabu search with an injected generator.
    ///
    /// # Errors
    ///
    /// - [`LandingError::InvalidConfig`] if `config` does not validate
    /// - [`LandingError::TooFewRecords`] for a fleet of one airplane when
    ///   `max_iterations > 0`
    #[tracing::instrument(level = "debug", name = "tabu_search", skip_all)]
    pub fn run_with_rng<R: Rng + ?Sized>(
        problem: &LandingProblem,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult, LandingError> {
        config.validate()?;

        let problem = problem.classified(config.urgency);
        let neighbors = problem.neighbors();
        let direction = config.direction;

        let (mut current, mut current_score) = problem.initial_schedule()?;
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut tabu = TabuList::new(config.max_tabu_size);
        let mut score_history = Vec::with_capacity(config.max_iterations);

        for iteration in 0..config.max_iterations {
            score_history.push(current_score);

            let mut candidates = neighbors.random_recompute(&current, config.num_successors, rng)?;
            let scores: Vec<f64> = candidates
                .iter_mut()
                .map(|candidate| problem.evaluate(candidate))
                .collect();

            // Indices into `candidates`; None means "stay on current".
            let mut round_best: Option<usize> = None;
            let mut round_best_score = current_score;
            let mut next: Option<usize> = None;
            let mut next_score = current_score;

            for (idx, (candidate, &score)) in candidates.iter().zip(&scores).enumerate() {
                if direction.is_better(score, round_best_score) {
                    round_best = Some(idx);
                    round_best_score = score;
                }

                let key = candidate.key();
                if !tabu.contains(&key) {
                    if direction.is_better(score, next_score) {
                        next = Some(idx);
                        next_score = score;
                    }
                    tabu.insert(key);
                }
            }

            if !direction.is_better(next_score, current_score) {
                if rng.random::<f64>() < config.diversification_rate {
                    let idx = rng.random_range(0..candidates.len());
                    tracing::debug!(iteration, "tabu search: diversification jump");
                    next = Some(idx);
                    next_score = scores[idx];
                } else {
                    next = round_best;
                    next_score = round_best_score;
                }
            }

            if let Some(idx) = next {
                current = candidates.swap_remove(idx);
                current_score = next_score;
            }

            if direction.is_better(current_score, best_score) {
                best = current.clone();
                best_score = current_score;
                tracing::debug!(iteration, best_score, "tabu search: new best");
            }
        }

        tracing::info!(
            score = current_score,
            best_score,
            iterations = score_history.len(),
            "tabu search finished"
        );

        Ok(TabuResult {
            schedule: current,
            score: current_score,
            best,
            best_score,
            iterations: score_history.len(),
            score_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airplane::{generate_stream, Airplane, AirplaneBounds};
    use crate::random::create_rng;
    use crate::schedule::{Direction, RunwayConfig};

    fn random_problem(n: usize, seed: u64) -> LandingProblem {
        let mut rng = create_rng(seed);
        let bounds = AirplaneBounds::default().with_arrival_time(0.0, 12.0);
        LandingProblem::new(generate_stream(n, &bounds, &mut rng).unwrap()).unwrap()
    }

    #[test]
    fn test_history_matches_iterations() {
        let problem = random_problem(10, 42);
        let config = TabuConfig::default().with_max_iterations(120).with_seed(42);
        let result = TabuRunner::run(&problem, &config).unwrap();

        assert_eq!(result.iterations, 120);
        assert_eq!(result.score_history.len(), result.iterations);
    }

    #[test]
    fn test_best_never_worse_than_visited() {
        let problem = random_problem(10, 7);
        let config = TabuConfig::default().with_max_iterations(200).with_seed(7);
        let result = TabuRunner::run(&problem, &config).unwrap();

        assert!(result.best_score <= result.score);
        for &score in &result.score_history {
            assert!(result.best_score <= score);
        }
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let problem = random_problem(6, 1);
        let config = TabuConfig::default().with_max_iterations(0).with_seed(1);
        let result = TabuRunner::run(&problem, &config).unwrap();
        let (initial, initial_score) = problem
            .with_urgency(crate::airplane::UrgencyPolicy::ArrivalReachability)
            .initial_schedule()
            .unwrap();

        assert_eq!(result.iterations, 0);
        assert!(result.score_history.is_empty());
        assert_eq!(result.schedule, initial);
        assert_eq!(result.score, initial_score);
    }

    #[test]
    fn test_without_diversification_never_worsens() {
        // Aspiration alone either moves to a strictly better neighbor or stays.
        let problem = random_problem(8, 9);
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_diversification_rate(0.0)
            .with_seed(9);
        let result = TabuRunner::run(&problem, &config).unwrap();

        for window in result.score_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "without diversification the current score cannot rise: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    /// One runway, airplanes due at 0h and 10h. Landing order [1, 2] is
    /// on time (2000 once recomputed); [2, 1] delays airplane 1 to 13h (1987).
    fn two_airplane_problem() -> LandingProblem {
        let planes = vec![
            Airplane::new(1, 10.0, 0.0, 1500.0).unwrap(),
            Airplane::new(2, 10.0, 10.0, 1500.0).unwrap(),
        ];
        LandingProblem::with_runways(planes, RunwayConfig::default().with_count(1)).unwrap()
    }

    #[test]
    fn test_diversification_accepts_worse_neighbor() {
        let problem = two_airplane_problem();
        let config = TabuConfig::default()
            .with_max_iterations(1)
            .with_diversification_rate(1.0)
            .with_direction(Direction::Maximize)
            .with_seed(42);
        let result = TabuRunner::run(&problem, &config).unwrap();

        // The initial schedule is optimal, so the jump must go downhill.
        assert_eq!(result.schedule.key(), vec![2, 1]);
        assert!((result.score - 1987.0).abs() < 1e-9);
        assert!(result.score < result.score_history[0]);
        assert_eq!(result.best_score, result.score_history[0]);
    }

    #[test]
    fn test_aspiration_takes_tabu_improvement() {
        let problem = two_airplane_problem();
        let config = TabuConfig::default()
            .with_max_iterations(200)
            .with_diversification_rate(0.5)
            .with_direction(Direction::Maximize)
            .with_seed(42);
        let result = TabuRunner::run(&problem, &config).unwrap();

        let is_delayed = |score: f64| (score - 1987.0).abs() < 1e-9;
        let is_on_time = |score: f64| (score - 2000.0).abs() < 1e-9;

        // Once [1, 2] has been visited its key stays tabu, yet every visit
        // to [2, 1] must still climb back to it.
        let first_on_time = result
            .score_history
            .iter()
            .position(|&s| is_on_time(s))
            .expect("the search must reach the on-time order");
        let revisits = result.score_history[first_on_time..]
            .iter()
            .filter(|&&s| is_delayed(s))
            .count();
        assert!(revisits >= 2, "expected repeated visits to [2, 1], got {revisits}");

        for window in result.score_history.windows(2) {
            if is_delayed(window[0]) {
                assert!(is_on_time(window[1]), "stayed on {} instead of improving", window[0]);
            }
        }
        assert!(is_on_time(result.best_score));
    }

    #[test]
    fn test_maximize_direction() {
        let problem = random_problem(8, 3);
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_direction(Direction::Maximize)
            .with_seed(3);
        let result = TabuRunner::run(&problem, &config).unwrap();
        for &score in &result.score_history {
            assert!(result.best_score >= score);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let problem = random_problem(9, 5);
        let config = TabuConfig::default().with_max_iterations(60).with_seed(5);
        let a = TabuRunner::run(&problem, &config).unwrap();
        let b = TabuRunner::run(&problem, &config).unwrap();
        assert_eq!(a.score_history, b.score_history);
        assert_eq!(a.schedule, b.schedule);
    }

    #[test]
    fn test_single_airplane_fails() {
        let problem =
            LandingProblem::new(vec![Airplane::new(1, 10.0, 1.0, 1500.0).unwrap()]).unwrap();
        assert!(matches!(
            TabuRunner::run(&problem, &TabuConfig::default()),
            Err(LandingError::TooFewRecords { .. })
        ));
    }
}
