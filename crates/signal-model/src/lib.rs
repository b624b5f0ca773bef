//! Multichannel Signal Model
//!
//! Provides the immutable 2-D signal container consumed by the
//! windowing and feature extraction pipeline.

mod signal;

pub use signal::Signal;

use thiserror::Error;

/// Errors for invalid signal input
#[derive(Debug, Clone, Error)]
pub enum SignalError {
    /// Signal has zero samples
    #[error("signal contains no samples")]
    Empty,

    /// Signal has zero channels
    #[error("signal contains no channels")]
    NoChannels,

    /// Sampling rate is not a positive finite number
    #[error("sampling rate {0} Hz is not positive")]
    InvalidRate(f64),
}
