//! Parent selection.
//!
//! Parents are drawn without replacement with probability proportional to
//! an inverse-score weight:
//!
//! - [`Direction::Minimize`]: `w_i = 1 / (1 + score_i)`
//! - [`Direction::Maximize`]: `w_i = 1 / (1 + (max − score_i))`
//!
//! Either way the better individuals are favoured, but only mildly: the
//! weights of typical aggregate scores differ by small ratios.
//!
//! If any weight is non-finite or non-positive (e.g. a minimized score at or
//! below −1), selection falls back to uniform sampling.

use rand::Rng;

use crate::schedule::Direction;

/// Selection weight of every individual.
pub fn weights(scores: &[f64], direction: Direction) -> Vec<f64> {
    match direction {
        Direction::Minimize => scores.iter().map(|&s| 1.0 / (1.0 + s)).collect(),
        Direction::Maximize => {
            let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            scores.iter().map(|&s| 1.0 / (1.0 + (max - s))).collect()
        }
    }
}

/// Draws `count` distinct indices into `scores`, weighted by [`weights`].
///
/// `count` is capped at `scores.len()`.
pub fn select_parents<R: Rng + ?Sized>(
    scores: &[f64],
    direction: Direction,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let n = scores.len();
    let count = count.min(n);
    let w = weights(scores, direction);

    if w.iter().all(|&x| x.is_finite() && x > 0.0) {
        if let Ok(picked) = rand::seq::index::sample_weighted(rng, n, |i| w[i], count) {
            return picked.into_vec();
        }
    }
    rand::seq::index::sample(rng, n, count).into_vec()
}
