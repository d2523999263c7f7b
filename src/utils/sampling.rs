//! Random reference draws.
//!
//! All draws go through a caller-provided [`Rng`] so results are
//! reproducible when the generator is seeded.

use crate::error::{KlError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

/// Build the generator used by analyses: seeded when `seed` is set,
/// otherwise drawn from OS entropy.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `size` values from the continuous uniform distribution over `[low, high]`.
///
/// A degenerate interval (`low == high`) yields a constant sequence.
pub fn uniform_draws(low: f64, high: f64, size: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() {
        return Err(KlError::ComputationError(format!(
            "uniform bounds must be finite, got [{}, {}]",
            low, high
        )));
    }
    if low > high {
        return Err(KlError::ComputationError(format!(
            "uniform lower bound {} exceeds upper bound {}",
            low, high
        )));
    }
    if low == high {
        return Ok(vec![low; size]);
    }

    let dist = Uniform::new_inclusive(low, high);
    Ok((0..size).map(|_| dist.sample(rng)).collect())
}

/// Draw `size` values from the normal distribution `N(mean, std^2)`.
pub fn normal_draws(mean: f64, std: f64, size: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    if !mean.is_finite() {
        return Err(KlError::ComputationError(format!(
            "normal mean must be finite, got {}",
            mean
        )));
    }
    if !(std.is_finite() && std >= 0.0) {
        return Err(KlError::ComputationError(format!(
            "normal standard deviation must be finite and non-negative, got {}",
            std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        KlError::ComputationError(format!("invalid normal parameters ({}, {}): {}", mean, std, e))
    })?;
    Ok((0..size).map(|_| dist.sample(rng)).collect())
}
