//! Error types raised while configuring the signal recommender.

use thiserror::Error;

use crate::Signal;

/// Errors raised when base signal weights are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("{signal} weight must be finite, got {value}")]
    NonFinite {
        /// Signal owning the weight.
        signal: Signal,
        /// Supplied weight.
        value: f64,
    },
    /// A weight was below zero.
    #[error("{signal} weight must not be negative, got {value}")]
    Negative {
        /// Signal owning the weight.
        signal: Signal,
        /// Supplied weight.
        value: f64,
    },
}
