//! Reference sequences that forecasts are scored against.
//!
//! Each baseline produces a sequence of the test-set length. A forecast that
//! diverges from the test set more than a baseline does carries less
//! information about the future than that baseline.

use crate::error::{KlError, Result};
use crate::utils::sampling::{normal_draws, uniform_draws};
use crate::utils::stats::cumulative_sum;
use rand::Rng;

/// Reference baselines, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Baseline {
    /// Uniform draws over the test-set range.
    Uniform,
    /// Normal draws with the test-set mean and standard deviation.
    WhiteNoise,
    /// Running sum of normal draws.
    RandomWalk,
    /// Last training value repeated.
    Naive,
    /// Training values repeated with the seasonal period.
    SeasonalNaive,
}

impl Baseline {
    pub const ALL: [Baseline; 5] = [
        Baseline::Uniform,
        Baseline::WhiteNoise,
        Baseline::RandomWalk,
        Baseline::Naive,
        Baseline::SeasonalNaive,
    ];

    /// Key used for this baseline in an evaluation report.
    pub fn label(&self) -> &'static str {
        match self {
            Baseline::Uniform => "uniform",
            Baseline::WhiteNoise => "white_noise",
            Baseline::RandomWalk => "random_walk",
            Baseline::Naive => "naive",
            Baseline::SeasonalNaive => "seasonal_naive",
        }
    }
}

/// `size` uniform draws over `[low, high]`.
pub fn uniform(low: f64, high: f64, size: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    uniform_draws(low, high, size, rng)
}

/// `size` normal draws with the given mean and standard deviation.
pub fn white_noise(mean: f64, std: f64, size: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    normal_draws(mean, std, size, rng)
}

/// Random walk: the running sum of a fresh white-noise draw.
pub fn random_walk(mean: f64, std: f64, size: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    Ok(cumulative_sum(&normal_draws(mean, std, size, rng)?))
}

/// Last observed value of `history`, repeated `size` times.
pub fn naive(history: &[f64], size: usize) -> Result<Vec<f64>> {
    let last = *history.last().ok_or(KlError::EmptyData)?;
    Ok(vec![last; size])
}

/// Value at position `i` is `history[i % period]`.
///
/// The pattern is taken from the start of `history`, so at least one full
/// period of history is needed.
pub fn seasonal_naive(history: &[f64], period: usize, size: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(KlError::InvalidParameter(
            "seasonal period must be positive".to_string(),
        ));
    }
    if history.len() < period {
        return Err(KlError::InsufficientData {
            needed: period,
            got: history.len(),
        });
    }
    Ok((0..size).map(|i| history[i % period]).collect())
}
