//! # kl-evolution
//!
//! Measures how the distribution of a time series changes with the time lag,
//! using the Kullback-Leibler divergence between the series and shifted
//! copies of itself, and scores forecasts against a held-out test set by
//! comparing their divergence with reference baselines (uniform, white
//! noise, random walk, naive and seasonal naive).
//!
//! ```
//! use kl_evolution::prelude::*;
//!
//! let serie = Serie::builder()
//!     .values([12.0, 14.5, 13.0, 15.5, 14.0, 16.5, 15.0, 17.5])
//!     .identifier("Temperature")
//!     .build()
//!     .unwrap();
//!
//! let analyzer = ShiftedSerieAnalyzer::new(4, false);
//! let profile = analyzer.compute(&serie).unwrap();
//! assert_eq!(profile.len(), 4);
//! ```

pub mod core;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod utils;

pub use error::{KlError, Result};

pub mod prelude {
    pub use crate::core::{Serie, SerieBuilder, SerieIndex};
    pub use crate::error::{KlError, Result};
    pub use crate::evaluation::{evaluate_forecast, Baseline, EvaluationConfig, EvaluationReport};
    pub use crate::features::{kl_divergence, AnalyzerConfig, ShiftedSerieAnalyzer};
}
