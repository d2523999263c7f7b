//! Scoring forecasts against a held-out test set.
//!
//! The test set is compared, via KL divergence, with every reference
//! baseline and every forecast. Lower is better: a forecast should diverge
//! from the test set less than the baselines do.

use crate::core::Serie;
use crate::error::{KlError, Result};
use crate::evaluation::baselines::{self, Baseline};
use crate::features::divergence::kl_divergence;
use crate::utils::sampling::rng_from_seed;
use rand::Rng;
use tracing::{debug, warn};

/// Configuration for forecast evaluation.
#[derive(Debug, Clone, Default)]
pub struct EvaluationConfig {
    /// Seasonal period for the seasonal-naive baseline (None to skip it).
    pub seasonal_period: Option<usize>,
    /// Divide every score by the uniform baseline score.
    pub normalize: bool,
    /// Random seed for the random baselines (None for entropy).
    pub seed: Option<u64>,
}

impl EvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seasonal_period(mut self, period: usize) -> Self {
        self.seasonal_period = Some(period);
        self
    }

    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Insertion-ordered mapping from label to divergence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationReport {
    entries: Vec<(String, f64)>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score. An existing label is overwritten in place and its
    /// previous score returned.
    pub fn insert(&mut self, label: impl Into<String>, value: f64) -> Option<f64> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((label, value));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Every score divided by the score of `label`.
    ///
    /// A zero or non-finite reference is not rejected; the IEEE quotients
    /// (infinite or NaN) are returned as they are.
    pub fn normalized_by(&self, label: &str) -> Result<EvaluationReport> {
        let reference = self.get(label).ok_or_else(|| {
            KlError::InvalidArgument(format!("no score labelled '{}' to normalize by", label))
        })?;
        if reference == 0.0 || !reference.is_finite() {
            warn!(label, reference, "degenerate normalization reference");
        }
        Ok(EvaluationReport {
            entries: self
                .entries
                .iter()
                .map(|(l, v)| (l.clone(), v / reference))
                .collect(),
        })
    }

    /// Labels sorted by ascending divergence; NaN scores sort last.
    pub fn ranking(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| match (a.1.is_nan(), b.1.is_nan()) {
            (false, false) => a.1.total_cmp(&b.1),
            (a_nan, b_nan) => a_nan.cmp(&b_nan),
        });
        ranked
    }
}

impl IntoIterator for EvaluationReport {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Score `forecasts` against `test_set`, alongside the reference baselines.
///
/// Report order is `uniform`, `white_noise`, `random_walk`, `naive`,
/// `seasonal_naive` (only with a seasonal period), then one entry per
/// forecast keyed by its identifier. Forecasts sharing an identifier
/// overwrite each other; the last one wins.
///
/// # Errors
/// * [`KlError::EmptyData`] for an empty train or test set.
/// * [`KlError::InvalidArgument`] for a forecast without identifier.
/// * [`KlError::InvalidParameter`] for a zero seasonal period.
/// * Any error from the baseline draws or [`kl_divergence`].
///
/// # Example
/// ```
/// use kl_evolution::core::Serie;
/// use kl_evolution::evaluation::{evaluate_forecast, EvaluationConfig};
///
/// let train = Serie::new([3.0, 4.0, 5.0, 6.0, 7.0]);
/// let test = Serie::new([5.0, 6.0, 7.0, 6.0]);
/// let forecast = Serie::new([5.5, 6.0, 6.5, 6.0]).with_identifier("model");
///
/// let config = EvaluationConfig::new().with_normalization(true).with_seed(42);
/// let report = evaluate_forecast(&train, &test, &[forecast], &config).unwrap();
///
/// assert_eq!(report.get("uniform"), Some(1.0));
/// assert!(report.contains("model"));
/// ```
pub fn evaluate_forecast(
    train_set: &Serie,
    test_set: &Serie,
    forecasts: &[Serie],
    config: &EvaluationConfig,
) -> Result<EvaluationReport> {
    let mut rng = rng_from_seed(config.seed);
    evaluate_forecast_with_rng(train_set, test_set, forecasts, config, &mut rng)
}

/// Same as [`evaluate_forecast`] with a caller-provided generator.
pub fn evaluate_forecast_with_rng(
    train_set: &Serie,
    test_set: &Serie,
    forecasts: &[Serie],
    config: &EvaluationConfig,
    rng: &mut impl Rng,
) -> Result<EvaluationReport> {
    if train_set.is_empty() || test_set.is_empty() {
        return Err(KlError::EmptyData);
    }
    let forecast_labels = forecasts
        .iter()
        .enumerate()
        .map(|(i, f)| {
            f.identifier().ok_or_else(|| {
                KlError::InvalidArgument(format!("forecast {} has no identifier", i))
            })
        })
        .collect::<Result<Vec<&str>>>()?;

    let min = test_set.min();
    let max = test_set.max();
    let mean = test_set.mean();
    let std = test_set.std();
    let size = test_set.len();

    let mut references = vec![
        (Baseline::Uniform, baselines::uniform(min, max, size, rng)?),
        (
            Baseline::WhiteNoise,
            baselines::white_noise(mean, std, size, rng)?,
        ),
        (
            Baseline::RandomWalk,
            baselines::random_walk(mean, std, size, rng)?,
        ),
        (
            Baseline::Naive,
            baselines::naive(train_set.values(), size)?,
        ),
    ];
    if let Some(period) = config.seasonal_period {
        references.push((
            Baseline::SeasonalNaive,
            baselines::seasonal_naive(train_set.values(), period, size)?,
        ));
    }

    let mut report = EvaluationReport::new();
    for (baseline, values) in references {
        report.insert(baseline.label(), kl_divergence(test_set, &Serie::new(values))?);
    }

    for (label, forecast) in forecast_labels.into_iter().zip(forecasts) {
        let score = kl_divergence(test_set, forecast)?;
        if report.insert(label, score).is_some() {
            warn!(label, "duplicate label, previous score overwritten");
        }
    }

    debug!(
        test_len = size,
        forecasts = forecasts.len(),
        seasonal = config.seasonal_period.is_some(),
        normalize = config.normalize,
        "evaluated forecasts against baselines"
    );

    if config.normalize {
        return report.normalized_by(Baseline::Uniform.label());
    }
    Ok(report)
}
