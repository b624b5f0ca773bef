//! Classifier Capability and Risk Wrapper

use crate::ScoringError;
use tracing::debug;

/// A pre-trained binary classifier
///
/// The pipeline treats the model as opaque: one method, probability of
/// the positive class for a feature vector in the extractor's schema
/// order. Implementations must be stateless across calls.
pub trait ProbabilityModel {
    /// Probability in [0, 1] that the window belongs to the risk class
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ScoringError>;
}

impl<M: ProbabilityModel + ?Sized> ProbabilityModel for &M {
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ScoringError> {
        (**self).predict_probability(features)
    }
}

/// Converts model probabilities into percent risk scores
pub struct RiskScorer<M> {
    model: M,
}

impl<M: ProbabilityModel> RiskScorer<M> {
    /// Wrap a probability model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Score a feature vector as a percent risk in [0, 100]
    ///
    /// A rejection by the model aborts the run; skipping the window
    /// instead would leave a hole in the fixed-cadence timeline.
    pub fn score(&self, features: &[f64]) -> Result<f64, ScoringError> {
        let probability = self.model.predict_probability(features)?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScoringError::InvalidProbability(probability));
        }

        let risk_percent = probability * 100.0;
        debug!(risk_percent, "scored feature vector");
        Ok(risk_percent)
    }
}

/// Fixed-probability model for tests and development
///
/// Optionally enforces an expected feature-vector length, standing in
/// for a real model's input-shape check.
#[derive(Debug, Clone)]
pub struct ConstantModel {
    probability: f64,
    expected_len: Option<usize>,
}

impl ConstantModel {
    /// Model that always answers `probability`
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            expected_len: None,
        }
    }

    /// Additionally reject vectors that are not `expected_len` long
    pub fn with_expected_len(probability: f64, expected_len: usize) -> Self {
        Self {
            probability,
            expected_len: Some(expected_len),
        }
    }
}

impl ProbabilityModel for ConstantModel {
    fn predict_probability(&self, features: &[f64]) -> Result<f64, ScoringError> {
        if let Some(expected) = self.expected_len {
            if features.len() != expected {
                return Err(ScoringError::DimensionMismatch {
                    expected,
                    actual: features.len(),
                });
            }
        }
        Ok(self.probability)
    }
}
