//! Pipeline Configuration

use serde::{Deserialize, Serialize};

/// Windowing configuration for a timeline build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Analysis window length in seconds (default: 60)
    pub window_duration_s: f64,
    /// Distance between window starts in seconds (default: 30, 50% overlap)
    pub step_duration_s: f64,
    /// Leading slice of each window that features are computed on
    ///
    /// `None` uses the full window. The reference pipeline scored 60 s
    /// windows on their leading 60 s slice, so this only matters when a
    /// model was trained on a shorter slice than the scheduler window.
    pub feature_window_duration_s: Option<f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_duration_s: 60.0,
            step_duration_s: 30.0,
            feature_window_duration_s: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.window_duration_s, 60.0);
        assert_eq!(config.step_duration_s, 30.0);
        assert!(config.feature_window_duration_s.is_none());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: PipelineConfig = serde_json::from_str(r#"{"step_duration_s": 15.0}"#).unwrap();
        assert_eq!(config.window_duration_s, 60.0);
        assert_eq!(config.step_duration_s, 15.0);
    }
}
