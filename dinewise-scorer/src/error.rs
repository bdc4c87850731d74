//! Error types raised while configuring the score preprocessor.

use thiserror::Error;

/// Reasons a set of [`ScoreWeights`](crate::ScoreWeights) is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weights must be finite")]
    NotFinite,
    /// A weight was below zero.
    #[error("score weights must not be negative")]
    Negative,
    /// Both weights were zero.
    #[error("score weights must sum to a positive value")]
    ZeroTotal,
}
