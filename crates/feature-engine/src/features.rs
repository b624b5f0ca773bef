//! Feature Vector Assembly

use crate::statistics::StatisticalFeatures;
use crate::welch::WelchAnalyzer;
use crate::FeatureError;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features emitted per channel
pub const FEATURES_PER_CHANNEL: usize = 10;

/// Positional schema version
///
/// The scoring model consumes features by position, not by name; any
/// change to [`FEATURE_NAMES`] (content or order) must bump this.
pub const SCHEMA_VERSION: u32 = 1;

/// Per-channel feature names, in emission order
pub const FEATURE_NAMES: [&str; FEATURES_PER_CHANNEL] = [
    "mean_abs",
    "std",
    "kurtosis",
    "skew",
    "peak_freq",
    "peak_power",
    "delta_power",
    "theta_power",
    "alpha_power",
    "beta_power",
];

/// EEG band boundaries in Hz, closed on both ends
const DELTA_HZ: (f64, f64) = (0.5, 4.0);
const THETA_HZ: (f64, f64) = (4.0, 8.0);
const ALPHA_HZ: (f64, f64) = (8.0, 13.0);
const BETA_HZ: (f64, f64) = (13.0, 30.0);

/// Longest Welch segment, in samples
const MAX_SEGMENT_SAMPLES: usize = 256;

/// Channel-major feature vector for one window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values, `FEATURES_PER_CHANNEL` per channel in channel order
    pub values: Vec<f64>,
    /// Number of channels the vector covers
    pub channels: usize,
    /// Schema version the ordering conforms to
    pub schema_version: u32,
}

impl FeatureVector {
    /// Slice of the features for one channel
    pub fn channel(&self, channel: usize) -> &[f64] {
        let start = channel * FEATURES_PER_CHANNEL;
        &self.values[start..start + FEATURES_PER_CHANNEL]
    }
}

/// Extracts the feature vector from fixed-length signal windows
pub struct FeatureExtractor {
    analyzer: WelchAnalyzer,
    window_samples: usize,
    feature_samples: usize,
}

impl FeatureExtractor {
    /// Create an extractor for windows of exactly `window_samples` samples
    ///
    /// `feature_samples` selects the leading slice of each window that
    /// features are computed on; it is clamped to the window length.
    /// Pass `window_samples` to use the whole window.
    pub fn new(sampling_rate: f64, window_samples: usize, feature_samples: usize) -> Self {
        Self {
            analyzer: WelchAnalyzer::new(sampling_rate),
            window_samples,
            feature_samples: feature_samples.min(window_samples),
        }
    }

    /// Extract the feature vector from a (channels, samples) window
    ///
    /// Fails with [`FeatureError::WindowSizeMismatch`] when the window
    /// is not exactly the configured length; short tails are the
    /// scheduler's problem and are never silently truncated here.
    pub fn extract(&mut self, window: ArrayView2<'_, f64>) -> Result<FeatureVector, FeatureError> {
        if window.nrows() == 0 {
            return Err(FeatureError::EmptyWindow);
        }
        if window.ncols() != self.window_samples {
            return Err(FeatureError::WindowSizeMismatch {
                expected: self.window_samples,
                actual: window.ncols(),
            });
        }

        let channels = window.nrows();
        let mut values = Vec::with_capacity(channels * FEATURES_PER_CHANNEL);

        for row in window.outer_iter() {
            let samples: Vec<f64> = row.iter().copied().take(self.feature_samples).collect();

            let stats = StatisticalFeatures::compute(&samples);
            values.push(stats.mean_abs);
            values.push(stats.std_dev);
            values.push(stats.kurtosis);
            values.push(stats.skewness);

            let nperseg = MAX_SEGMENT_SAMPLES.min(samples.len());
            let spectrum = self.analyzer.estimate(&samples, nperseg);
            let (peak_freq, peak_power) = spectrum.peak();
            values.push(peak_freq);
            values.push(peak_power);
            values.push(spectrum.band_power(DELTA_HZ.0, DELTA_HZ.1));
            values.push(spectrum.band_power(THETA_HZ.0, THETA_HZ.1));
            values.push(spectrum.band_power(ALPHA_HZ.0, ALPHA_HZ.1));
            values.push(spectrum.band_power(BETA_HZ.0, BETA_HZ.1));
        }

        debug!(
            channels,
            features = values.len(),
            "extracted feature vector"
        );

        Ok(FeatureVector {
            values,
            channels,
            schema_version: SCHEMA_VERSION,
        })
    }
}
