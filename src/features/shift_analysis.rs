//! Divergence of a series against lagged copies of itself.
//!
//! For each lag `h` in `1..=max_horizon` the series is compared with its
//! own values shifted by `h` positions. The resulting profile shows how
//! quickly the information carried by the past decays with the horizon.

use crate::core::Serie;
use crate::error::{KlError, Result};
use crate::features::divergence::kl_divergence;
use crate::utils::sampling::{rng_from_seed, uniform_draws};
use rand::Rng;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Constant added to detrended or deseasonalized values before comparison.
pub const DEFAULT_STABILIZATION_OFFSET: f64 = 1000.0;

/// Identifier of the serie returned by [`ShiftedSerieAnalyzer::compute`].
pub const SHIFT_DIVERGENCES_IDENTIFIER: &str = "KL divergences over shifts";

/// Configuration for the lag sweep.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Largest lag to evaluate.
    pub max_horizon: usize,
    /// Divide every divergence by the divergence against a uniform draw.
    pub normalized: bool,
    /// Offset applied to detrended/deseasonalized series.
    pub stabilization_offset: f64,
    /// Random seed for the normalization reference (None for entropy).
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_horizon: 10,
            normalized: true,
            stabilization_offset: DEFAULT_STABILIZATION_OFFSET,
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config sweeping lags `1..=max_horizon`.
    pub fn new(max_horizon: usize) -> Self {
        Self {
            max_horizon,
            ..Default::default()
        }
    }

    pub fn with_normalization(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn with_stabilization_offset(mut self, offset: f64) -> Self {
        self.stabilization_offset = offset;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_horizon == 0 {
            return Err(KlError::InvalidParameter(
                "max_horizon must be positive".to_string(),
            ));
        }
        if !self.stabilization_offset.is_finite() {
            return Err(KlError::InvalidParameter(format!(
                "stabilization offset must be finite, got {}",
                self.stabilization_offset
            )));
        }
        Ok(())
    }
}

/// Computes KL divergences between a serie and shifted versions of itself.
#[derive(Debug, Clone, Default)]
pub struct ShiftedSerieAnalyzer {
    config: AnalyzerConfig,
}

impl ShiftedSerieAnalyzer {
    pub fn new(max_horizon: usize, normalized: bool) -> Self {
        Self::with_config(AnalyzerConfig::new(max_horizon).with_normalization(normalized))
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn max_horizon(&self) -> usize {
        self.config.max_horizon
    }

    pub fn normalized(&self) -> bool {
        self.config.normalized
    }

    /// Divergence profile of `serie` over lags `1..=max_horizon`.
    ///
    /// The normalization reference is drawn from the configured seed, or
    /// from OS entropy when no seed is set.
    ///
    /// # Errors
    /// * [`KlError::Validation`] if the serie has fewer than two values.
    /// * [`KlError::InvalidParameter`] for an invalid configuration.
    /// * Any error from [`kl_divergence`] or the reference draw.
    pub fn compute(&self, serie: &Serie) -> Result<Serie> {
        let mut rng = rng_from_seed(self.config.seed);
        self.compute_with_rng(serie, &mut rng)
    }

    /// Same as [`compute`](Self::compute) with a caller-provided generator.
    pub fn compute_with_rng(&self, serie: &Serie, rng: &mut impl Rng) -> Result<Serie> {
        if serie.len() <= 1 {
            return Err(KlError::Validation(
                "the values should be non-empty".to_string(),
            ));
        }
        self.config.validate()?;

        // Detrended/deseasonalized values straddle zero; lift them onto
        // positive weights. The caller's serie is never modified.
        let stabilized = serie.detrend() || serie.deseasonalize();
        let working: Cow<'_, Serie> = if stabilized {
            Cow::Owned(serie.offset(self.config.stabilization_offset))
        } else {
            Cow::Borrowed(serie)
        };

        let mut divergences = self.divergences_over_shifts(&working)?;

        if self.config.normalized {
            let reference = Self::uniform_reference(&working, rng)?;
            if reference == 0.0 || !reference.is_finite() {
                warn!(
                    reference,
                    "degenerate normalization reference, normalized divergences are not finite"
                );
            }
            for d in divergences.iter_mut() {
                *d /= reference;
            }
        }

        debug!(
            serie = working.identifier().unwrap_or("y"),
            len = working.len(),
            max_horizon = self.config.max_horizon,
            normalized = self.config.normalized,
            stabilized,
            "computed divergences over shifts"
        );

        Ok(Serie::new(divergences).with_identifier(SHIFT_DIVERGENCES_IDENTIFIER))
    }

    fn divergences_over_shifts(&self, serie: &Serie) -> Result<Vec<f64>> {
        (1..=self.config.max_horizon)
            .map(|lag| {
                let shifted = Serie::new(serie.values().iter().copied()).shift(lag as isize);
                kl_divergence(serie, &shifted)
            })
            .collect()
    }

    /// Divergence of the serie against one uniform draw over its range.
    fn uniform_reference(serie: &Serie, rng: &mut impl Rng) -> Result<f64> {
        let draws = uniform_draws(serie.min(), serie.max(), serie.len(), rng)?;
        kl_divergence(serie, &Serie::new(draws))
    }
}
