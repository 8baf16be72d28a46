//! Error types for wavethin operations.

use thiserror::Error;

/// Errors that can occur when validating simplification inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// The tolerance is below zero.
    #[error("tolerance must be non-negative, got {epsilon}")]
    NegativeTolerance {
        /// The rejected tolerance.
        epsilon: f64,
    },

    /// The tolerance is NaN.
    #[error("tolerance is not a number")]
    NonFiniteTolerance,

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the first offending point.
        index: usize,
    },

    /// The tolerance lies outside the range accepted by the plot configuration.
    #[error("tolerance {epsilon} outside of [0, {max}]")]
    ToleranceOutOfRange {
        /// The rejected tolerance.
        epsilon: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },

    /// A sample window was requested with zero capacity.
    #[error("sample window must hold at least one sample")]
    EmptyWindow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimplifyError>;
