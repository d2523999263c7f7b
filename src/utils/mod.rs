//! Utility functions shared by the analyses.

pub mod sampling;
pub mod stats;

pub use sampling::{normal_draws, rng_from_seed, uniform_draws};
pub use stats::{nan_max, nan_mean, nan_min, nan_std, nan_to_num};
