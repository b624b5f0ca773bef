//! Sliding Window Scheduler
//!
//! Plans the sequence of fixed-length, overlapping analysis windows
//! over a sampled signal and maps each window to its start timestamp.

mod scheduler;

pub use scheduler::{Window, WindowIter, WindowScheduler};

use thiserror::Error;

/// Errors for unusable scheduling parameters
#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    /// Window or step duration rounds to zero samples
    #[error("{field} of {duration_s} s rounds to zero samples at {sampling_rate} Hz")]
    InvalidWindowSize {
        field: &'static str,
        duration_s: f64,
        sampling_rate: f64,
    },
}
