//! Divergence features of a single series.
//!
//! # Example
//!
//! ```
//! use kl_evolution::core::Serie;
//! use kl_evolution::features::{AnalyzerConfig, ShiftedSerieAnalyzer};
//!
//! let serie = Serie::new([0.1, 0.2, 0.4, 0.2, 0.1]);
//!
//! let analyzer = ShiftedSerieAnalyzer::with_config(AnalyzerConfig::new(3).with_seed(7));
//! let profile = analyzer.compute(&serie).unwrap();
//!
//! assert_eq!(profile.len(), 3);
//! ```

pub mod divergence;
pub mod shift_analysis;

pub use divergence::{kl_divergence, relative_entropy};
pub use shift_analysis::{
    AnalyzerConfig, ShiftedSerieAnalyzer, DEFAULT_STABILIZATION_OFFSET,
    SHIFT_DIVERGENCES_IDENTIFIER,
};
