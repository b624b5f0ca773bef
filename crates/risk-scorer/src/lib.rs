//! Risk Scoring
//!
//! Wraps a pre-trained classifier behind a single-method capability and
//! converts its probability output into a percent risk score. Loading
//! and deserializing the model artifact is the caller's concern.

mod scorer;

pub use scorer::{ConstantModel, ProbabilityModel, RiskScorer};

use thiserror::Error;

/// Errors during scoring
#[derive(Debug, Clone, Error)]
pub enum ScoringError {
    /// Feature vector length does not match what the model was trained on
    #[error("classifier rejected feature vector: expected length {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Classifier failed for a model-specific reason
    #[error("classifier failed: {0}")]
    ClassifierFailure(String),

    /// Classifier produced a probability outside [0, 1]
    #[error("classifier returned probability {0} outside [0, 1]")]
    InvalidProbability(f64),
}
