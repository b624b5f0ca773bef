//! Timeline Builder Implementation

use crate::{PipelineConfig, PipelineError, RiskSample, RiskSummary, RiskTimeline};
use feature_engine::FeatureExtractor;
use risk_scorer::{ProbabilityModel, RiskScorer};
use signal_model::Signal;
use tracing::{debug, info};
use window_scheduler::{ScheduleError, WindowScheduler};

/// Builds a complete risk timeline from a signal and a classifier
///
/// Windows are processed strictly in index order as a map over the
/// scheduler's iterator; each window is independent, so a parallel map
/// collected in index order would be observationally identical.
pub struct RiskTimelineBuilder {
    config: PipelineConfig,
}

impl RiskTimelineBuilder {
    /// Create a builder with the given windowing configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Create a builder with the default 60 s / 30 s windowing
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Score every window of `signal` with `model`
    ///
    /// Fails fast: the first window whose extraction or scoring fails
    /// aborts the build with no partial timeline.
    pub fn build<M: ProbabilityModel>(
        &self,
        signal: &Signal,
        model: &M,
    ) -> Result<RiskTimeline, PipelineError> {
        let scheduler = WindowScheduler::new(
            signal.samples(),
            signal.sampling_rate(),
            self.config.window_duration_s,
            self.config.step_duration_s,
        )?;

        let feature_samples = match self.config.feature_window_duration_s {
            Some(duration_s) => {
                let samples = (duration_s * signal.sampling_rate()).round();
                if !samples.is_finite() || samples < 1.0 {
                    return Err(ScheduleError::InvalidWindowSize {
                        field: "feature window duration",
                        duration_s,
                        sampling_rate: signal.sampling_rate(),
                    }
                    .into());
                }
                samples as usize
            }
            None => scheduler.window_samples(),
        };

        let mut extractor = FeatureExtractor::new(
            signal.sampling_rate(),
            scheduler.window_samples(),
            feature_samples,
        );
        let scorer = RiskScorer::new(model);

        info!(
            channels = signal.channels(),
            samples = signal.samples(),
            n_windows = scheduler.n_windows(),
            "building risk timeline"
        );

        let samples = scheduler
            .windows()
            .map(|window| {
                let features = extractor.extract(signal.window(window.start, window.end))?;
                let risk_percent = scorer.score(&features.values)?;
                debug!(window.index, window.timestamp_minutes, risk_percent, "scored window");
                Ok(RiskSample {
                    timestamp_minutes: window.timestamp_minutes,
                    risk_percent,
                })
            })
            .collect::<Result<Vec<RiskSample>, PipelineError>>()?;

        let summary = RiskSummary::from_samples(&samples);
        Ok(RiskTimeline { samples, summary })
    }
}
