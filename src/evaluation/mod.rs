//! Forecast evaluation against reference baselines.

pub mod baselines;
pub mod forecast;

pub use baselines::Baseline;
pub use forecast::{
    evaluate_forecast, evaluate_forecast_with_rng, EvaluationConfig, EvaluationReport,
};
