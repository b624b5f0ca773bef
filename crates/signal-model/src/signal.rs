//! Immutable Signal Container

use crate::SignalError;
use ndarray::{s, Array2, ArrayView2};

/// An immutable multichannel recording with shape (channels, samples)
#[derive(Debug, Clone)]
pub struct Signal {
    /// Sample data, one row per channel
    data: Array2<f64>,
    /// Sampling rate in Hz
    sampling_rate: f64,
}

impl Signal {
    /// Create a signal from a (channels, samples) array
    pub fn new(data: Array2<f64>, sampling_rate: f64) -> Result<Self, SignalError> {
        if data.nrows() == 0 {
            return Err(SignalError::NoChannels);
        }
        if data.ncols() == 0 {
            return Err(SignalError::Empty);
        }
        if !(sampling_rate > 0.0) || !sampling_rate.is_finite() {
            return Err(SignalError::InvalidRate(sampling_rate));
        }

        Ok(Self {
            data,
            sampling_rate,
        })
    }

    /// Create a signal from per-channel sample vectors
    ///
    /// All channels must have the same length; ragged input fails with
    /// [`SignalError::Empty`] via the shape check.
    pub fn from_channels(
        channels: Vec<Vec<f64>>,
        sampling_rate: f64,
    ) -> Result<Self, SignalError> {
        if channels.is_empty() {
            return Err(SignalError::NoChannels);
        }
        let samples = channels[0].len();
        if samples == 0 || channels.iter().any(|c| c.len() != samples) {
            return Err(SignalError::Empty);
        }

        let flat: Vec<f64> = channels.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((flat.len() / samples, samples), flat)
            .map_err(|_| SignalError::Empty)?;
        Self::new(data, sampling_rate)
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.data.nrows()
    }

    /// Number of samples per channel
    pub fn samples(&self) -> usize {
        self.data.ncols()
    }

    /// Sampling rate in Hz
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Recording duration in seconds
    pub fn duration_s(&self) -> f64 {
        self.samples() as f64 / self.sampling_rate
    }

    /// View of the full sample array
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// View of the half-open sample range [start, end) across all channels
    ///
    /// Callers must keep `start <= end <= samples()`; the scheduler
    /// guarantees this for every window it emits.
    pub fn window(&self, start: usize, end: usize) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., start..end])
    }
}
