//! Risk Samples, Bands, and Summary Statistics

use serde::{Deserialize, Serialize};

/// Risk score for one analysis window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSample {
    /// Window start time in minutes from the recording start
    pub timestamp_minutes: f64,
    /// Risk score in [0, 100]
    pub risk_percent: f64,
}

/// Risk bucket for a score
///
/// Buckets are inclusive-low/exclusive-high, unlike the closed spectral
/// bands in feature extraction. The asymmetry is deliberate and must
/// not be unified: it matches the thresholds downstream consumers
/// expect, and changing either rule would shift the summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// Risk below 20%
    Low,
    /// Risk in [20%, 50%)
    Medium,
    /// Risk at or above 50%
    High,
}

impl RiskBand {
    /// Bucket for a percent risk score
    pub fn classify(risk_percent: f64) -> Self {
        if risk_percent < 20.0 {
            RiskBand::Low
        } else if risk_percent < 50.0 {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }
}

/// Aggregate statistics over a risk timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Arithmetic mean risk
    pub mean_risk: f64,
    /// Lowest per-window risk
    pub min_risk: f64,
    /// Highest per-window risk
    pub max_risk: f64,
    /// Population standard deviation of the risk scores
    pub std_dev: f64,
    /// Percent of windows in the low band
    pub low_time_pct: f64,
    /// Percent of windows in the medium band
    pub medium_time_pct: f64,
    /// Percent of windows in the high band
    pub high_time_pct: f64,
}

impl RiskSummary {
    /// Summarize an ordered sample sequence
    ///
    /// An empty timeline yields the all-zero summary.
    pub fn from_samples(samples: &[RiskSample]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let n = samples.len() as f64;
        let mut min_risk = f64::MAX;
        let mut max_risk = f64::MIN;
        let mut sum = 0.0;
        let mut low = 0usize;
        let mut medium = 0usize;
        let mut high = 0usize;

        for sample in samples {
            let risk = sample.risk_percent;
            sum += risk;
            min_risk = min_risk.min(risk);
            max_risk = max_risk.max(risk);
            match RiskBand::classify(risk) {
                RiskBand::Low => low += 1,
                RiskBand::Medium => medium += 1,
                RiskBand::High => high += 1,
            }
        }

        let mean_risk = sum / n;
        let variance = samples
            .iter()
            .map(|s| {
                let d = s.risk_percent - mean_risk;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            mean_risk,
            min_risk,
            max_risk,
            std_dev: variance.sqrt(),
            low_time_pct: low as f64 / n * 100.0,
            medium_time_pct: medium as f64 / n * 100.0,
            high_time_pct: high as f64 / n * 100.0,
        }
    }
}

/// Complete per-recording risk assessment
///
/// Built once per run; the sample order follows the window order, so
/// timestamps are non-decreasing with no gaps or duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTimeline {
    /// One sample per analysis window, in window order
    pub samples: Vec<RiskSample>,
    /// Statistics over all samples
    pub summary: RiskSummary,
}

impl RiskTimeline {
    /// Number of scored windows
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the recording produced no full window
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
