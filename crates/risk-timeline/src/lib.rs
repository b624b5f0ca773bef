//! Risk Timeline Construction
//!
//! Drives the window scheduler, feature extractor, and risk scorer over
//! a full recording and aggregates the per-window scores into an
//! ordered, summarized risk timeline. The build is a pure batch
//! computation: it either completes for every window or fails for the
//! whole run.

mod builder;
mod config;
mod summary;

pub use builder::RiskTimelineBuilder;
pub use config::PipelineConfig;
pub use summary::{RiskBand, RiskSample, RiskSummary, RiskTimeline};

use feature_engine::FeatureError;
use risk_scorer::ScoringError;
use signal_model::SignalError;
use thiserror::Error;
use window_scheduler::ScheduleError;

/// Errors aborting a timeline build
///
/// All failures are fatal for the run; a skipped window would break the
/// fixed-cadence timestamp contract, so no partial timeline is exposed.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input signal is unusable
    ///
    /// The builder itself only ever sees an already-validated [`Signal`],
    /// so this variant is raised by callers that construct the signal and
    /// build the timeline behind a single `?`-able error type.
    ///
    /// [`Signal`]: signal_model::Signal
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Window or step parameters are unusable
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Feature extraction failed for a window
    #[error(transparent)]
    Feature(#[from] FeatureError),

    /// The classifier rejected or failed on a feature vector
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
