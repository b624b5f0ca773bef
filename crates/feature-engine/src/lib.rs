//! Feature Engineering Engine
//!
//! Computes the per-channel statistical and Welch-spectral feature
//! vector consumed by the risk scorer. Feature order is a versioned
//! positional schema; the scoring model depends on it.

mod features;
mod statistics;
mod welch;

pub use features::{
    FeatureExtractor, FeatureVector, FEATURES_PER_CHANNEL, FEATURE_NAMES, SCHEMA_VERSION,
};
pub use statistics::StatisticalFeatures;
pub use welch::{PowerSpectrum, WelchAnalyzer};

use thiserror::Error;

/// Errors during feature extraction
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Window sample count differs from the configured window length
    #[error("window holds {actual} samples per channel, expected {expected}")]
    WindowSizeMismatch { expected: usize, actual: usize },

    /// Window has no channels
    #[error("window contains no channels")]
    EmptyWindow,
}
