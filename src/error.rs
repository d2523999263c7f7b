//! Error types for the kl-evolution library.

use thiserror::Error;

/// Result type alias for divergence analysis operations.
pub type Result<T> = std::result::Result<T, KlError>;

/// Errors that can occur while building series or computing divergences.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KlError {
    /// A series could not be constructed or is unfit for analysis.
    #[error("validation error: {0}")]
    Validation(String),

    /// A divergence operand is missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dimension mismatch between two series.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}
