//! Time-Domain Statistical Features

/// Time-domain features for one channel of a window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatisticalFeatures {
    /// Mean absolute amplitude
    pub mean_abs: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Excess kurtosis (Fisher definition, bias not corrected)
    pub kurtosis: f64,
    /// Skewness (Fisher-Pearson, bias not corrected)
    pub skewness: f64,
}

impl StatisticalFeatures {
    /// Compute the features from a slice of samples
    ///
    /// Skewness and kurtosis are defined as 0 for a zero-variance
    /// channel, matching the reference convention for flat input.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let mean_abs = values.iter().map(|v| v.abs()).sum::<f64>() / n;

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        let mut m4 = 0.0;
        for &v in values {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }

        let variance = m2 / n;
        let std_dev = variance.sqrt();

        // Skewness: E[(X-μ)³] / σ³
        let skewness = if std_dev > 0.0 {
            (m3 / n) / (std_dev * std_dev * std_dev)
        } else {
            0.0
        };

        // Excess kurtosis: E[(X-μ)⁴] / σ⁴ - 3
        let kurtosis = if std_dev > 0.0 {
            (m4 / n) / (variance * variance) - 3.0
        } else {
            0.0
        };

        Self {
            mean_abs,
            std_dev,
            kurtosis,
            skewness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_abs() {
        let stats = StatisticalFeatures::compute(&[-1.0, 2.0, -3.0, 4.0]);
        assert!((stats.mean_abs - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_dev() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = StatisticalFeatures::compute(&values);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_data_has_zero_skew() {
        let stats = StatisticalFeatures::compute(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert!(stats.skewness.abs() < 1e-12);
    }

    #[test]
    fn test_two_point_distribution_kurtosis() {
        // Equal-mass two-point distribution has kurtosis 1, excess -2
        let stats = StatisticalFeatures::compute(&[-1.0, 1.0, -1.0, 1.0]);
        assert!((stats.kurtosis - (-2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_flat_input_is_all_zero_moments() {
        let stats = StatisticalFeatures::compute(&[3.0; 64]);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.skewness, 0.0);
        assert_eq!(stats.kurtosis, 0.0);
        assert!((stats.mean_abs - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input() {
        let stats = StatisticalFeatures::compute(&[]);
        assert_eq!(stats, StatisticalFeatures::default());
    }
}
