//! Welch Power Spectral Density Estimation

use rustfft::{num_complex::Complex, FftPlanner};

/// One-sided PSD estimate over `[0, sample_rate / 2]`
#[derive(Debug, Clone, Default)]
pub struct PowerSpectrum {
    /// Frequency of each bin in Hz
    pub frequencies: Vec<f64>,
    /// Power spectral density per bin
    pub psd: Vec<f64>,
}

impl PowerSpectrum {
    /// Frequency and magnitude of the strongest bin
    ///
    /// Ties resolve to the lowest-frequency bin, so a flat (all-zero)
    /// spectrum reports a peak at 0 Hz with power 0.
    pub fn peak(&self) -> (f64, f64) {
        let mut peak_idx = 0;
        let mut peak_power = f64::NEG_INFINITY;
        for (i, &p) in self.psd.iter().enumerate() {
            if p > peak_power {
                peak_power = p;
                peak_idx = i;
            }
        }
        if self.psd.is_empty() {
            (0.0, 0.0)
        } else {
            (self.frequencies[peak_idx], peak_power)
        }
    }

    /// Sum of PSD bins whose frequency lies in the closed band [low, high] Hz
    ///
    /// Both boundaries are inclusive; a bin sitting exactly on a shared
    /// boundary contributes to both adjacent bands.
    pub fn band_power(&self, low_hz: f64, high_hz: f64) -> f64 {
        self.frequencies
            .iter()
            .zip(self.psd.iter())
            .filter(|(&f, _)| f >= low_hz && f <= high_hz)
            .map(|(_, &p)| p)
            .sum()
    }
}

/// Welch-method PSD estimator
///
/// Hann-windowed overlapping segments, averaged in the power domain.
/// Defaults follow the common convention: periodic Hann window, 50%
/// segment overlap, per-segment constant detrend, one-sided density
/// scaling by `1 / (fs · Σw²)` with interior bins doubled.
pub struct WelchAnalyzer {
    sample_rate: f64,
    planner: FftPlanner<f64>,
}

impl WelchAnalyzer {
    /// Create an analyzer for signals sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            planner: FftPlanner::new(),
        }
    }

    /// Estimate the one-sided PSD of `samples` with segment length `nperseg`
    ///
    /// `nperseg` is clamped to the input length. An empty input yields an
    /// empty spectrum.
    pub fn estimate(&mut self, samples: &[f64], nperseg: usize) -> PowerSpectrum {
        if samples.is_empty() || nperseg == 0 {
            return PowerSpectrum::default();
        }

        let nperseg = nperseg.min(samples.len());
        let noverlap = nperseg / 2;
        let step = nperseg - noverlap;
        let window = hann_periodic(nperseg);
        let window_power: f64 = window.iter().map(|w| w * w).sum();
        let scale = 1.0 / (self.sample_rate * window_power);

        let n_bins = nperseg / 2 + 1;
        let fft = self.planner.plan_fft_forward(nperseg);
        let mut psd = vec![0.0; n_bins];
        let mut n_segments = 0usize;

        let mut start = 0;
        while start + nperseg <= samples.len() {
            let segment = &samples[start..start + nperseg];
            let mean = segment.iter().sum::<f64>() / nperseg as f64;

            let mut buffer: Vec<Complex<f64>> = segment
                .iter()
                .zip(window.iter())
                .map(|(&s, &w)| Complex::new((s - mean) * w, 0.0))
                .collect();
            fft.process(&mut buffer);

            for (i, bin) in buffer[..n_bins].iter().enumerate() {
                let mut power = bin.norm_sqr() * scale;
                // One-sided spectrum: fold negative frequencies into every
                // bin except DC and (for even nperseg) Nyquist.
                if i > 0 && !(nperseg % 2 == 0 && i == n_bins - 1) {
                    power *= 2.0;
                }
                psd[i] += power;
            }

            n_segments += 1;
            start += step;
        }

        for p in &mut psd {
            *p /= n_segments as f64;
        }

        let freq_step = self.sample_rate / nperseg as f64;
        let frequencies = (0..n_bins).map(|i| i as f64 * freq_step).collect();

        PowerSpectrum { frequencies, psd }
    }
}

/// Periodic Hann window of length `n`
fn hann_periodic(n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![1.0];
    }
    (0..n)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / n as f64).cos()))
        .collect()
}
