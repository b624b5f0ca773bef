//! Window Plan Implementation

use crate::ScheduleError;
use serde::{Deserialize, Serialize};

/// One analysis window over the sample axis
///
/// Spans the half-open sample range `[start, end)`. The timestamp is the
/// window start time in minutes, which downstream consumers rely on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// 0-based window index
    pub index: usize,
    /// First sample of the window (inclusive)
    pub start: usize,
    /// One past the last sample of the window (exclusive)
    pub end: usize,
    /// Window start time in minutes
    pub timestamp_minutes: f64,
}

/// Planner for fixed-length overlapping windows
///
/// Pure function of its constructor inputs: restartable, deterministic,
/// and free of side effects. An undersized signal yields zero windows
/// rather than an error.
#[derive(Debug, Clone)]
pub struct WindowScheduler {
    total_samples: usize,
    window_samples: usize,
    step_samples: usize,
    step_duration_s: f64,
}

impl WindowScheduler {
    /// Create a scheduler for a signal of `total_samples` at `sampling_rate` Hz
    pub fn new(
        total_samples: usize,
        sampling_rate: f64,
        window_duration_s: f64,
        step_duration_s: f64,
    ) -> Result<Self, ScheduleError> {
        let window_samples = round_to_samples(
            "window duration",
            window_duration_s,
            sampling_rate,
        )?;
        let step_samples = round_to_samples("step duration", step_duration_s, sampling_rate)?;

        Ok(Self {
            total_samples,
            window_samples,
            step_samples,
            step_duration_s,
        })
    }

    /// Samples per window
    pub fn window_samples(&self) -> usize {
        self.window_samples
    }

    /// Samples between consecutive window starts
    pub fn step_samples(&self) -> usize {
        self.step_samples
    }

    /// Advisory window count
    ///
    /// The iterator's bound check is authoritative; this count is the
    /// closed-form value used for sizing and progress reporting.
    pub fn n_windows(&self) -> usize {
        if self.total_samples < self.window_samples {
            0
        } else {
            (self.total_samples - self.window_samples) / self.step_samples + 1
        }
    }

    /// Fresh iterator over the window sequence
    pub fn windows(&self) -> WindowIter {
        WindowIter {
            scheduler: self.clone(),
            next_index: 0,
        }
    }
}

/// Lazy iterator over a scheduler's windows
#[derive(Debug, Clone)]
pub struct WindowIter {
    scheduler: WindowScheduler,
    next_index: usize,
}

impl Iterator for WindowIter {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let index = self.next_index;
        let start = index.checked_mul(self.scheduler.step_samples)?;
        let end = start.checked_add(self.scheduler.window_samples)?;

        // Runtime bound check guards against rounding drift in the
        // advisory count; once a window overruns, all later ones do too.
        if end > self.scheduler.total_samples {
            return None;
        }

        self.next_index += 1;
        Some(Window {
            index,
            start,
            end,
            timestamp_minutes: index as f64 * self.scheduler.step_duration_s / 60.0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.scheduler.n_windows().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

fn round_to_samples(
    field: &'static str,
    duration_s: f64,
    sampling_rate: f64,
) -> Result<usize, ScheduleError> {
    let samples = duration_s * sampling_rate;
    if !samples.is_finite() || samples.round() < 1.0 {
        return Err(ScheduleError::InvalidWindowSize {
            field,
            duration_s,
            sampling_rate,
        });
    }
    Ok(samples.round() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_recording_layout() {
        // 120 s of 2-channel 256 Hz data, 60 s window, 30 s step
        let scheduler = WindowScheduler::new(120 * 256, 256.0, 60.0, 30.0).unwrap();
        assert_eq!(scheduler.window_samples(), 15360);
        assert_eq!(scheduler.step_samples(), 7680);
        assert_eq!(scheduler.n_windows(), 3);

        let windows: Vec<Window> = scheduler.windows().collect();
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].start, 0);
        assert_eq!(windows[1].start, 7680);
        assert_eq!(windows[2].start, 15360);
        // Last window ends exactly at the signal boundary; end == total
        // is still in bounds for the half-open range.
        assert_eq!(windows[2].end, 30720);
        assert_eq!(windows[0].timestamp_minutes, 0.0);
        assert_eq!(windows[1].timestamp_minutes, 0.5);
        assert_eq!(windows[2].timestamp_minutes, 1.0);
    }

    #[test]
    fn test_undersized_signal_yields_no_windows() {
        let scheduler = WindowScheduler::new(100, 256.0, 60.0, 30.0).unwrap();
        assert_eq!(scheduler.n_windows(), 0);
        assert_eq!(scheduler.windows().count(), 0);
    }

    #[test]
    fn test_short_tail_window_discarded() {
        // 100 samples, 40-sample window, 30-sample step: starts 0, 30, 60
        // fit; start 90 would need end 130 and is dropped.
        let scheduler = WindowScheduler::new(100, 1.0, 40.0, 30.0).unwrap();
        let windows: Vec<Window> = scheduler.windows().collect();
        assert_eq!(windows.len(), 3);
        assert!(windows.iter().all(|w| w.end <= 100));
    }

    #[test]
    fn test_zero_sample_window_rejected() {
        let err = WindowScheduler::new(1000, 1.0, 0.2, 30.0).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::InvalidWindowSize { .. }));
        let err = WindowScheduler::new(1000, 1.0, 40.0, 0.0).unwrap_err();
        assert!(matches!(err, crate::ScheduleError::InvalidWindowSize { .. }));
    }

    #[test]
    fn test_restartable() {
        let scheduler = WindowScheduler::new(10_000, 100.0, 10.0, 5.0).unwrap();
        let first: Vec<Window> = scheduler.windows().collect();
        let second: Vec<Window> = scheduler.windows().collect();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_windows_evenly_spaced_and_bounded(
            total_samples in 0usize..200_000,
            sampling_rate in 1.0f64..1024.0,
            window_duration_s in 0.5f64..120.0,
            step_duration_s in 0.5f64..60.0,
        ) {
            let Ok(scheduler) = WindowScheduler::new(
                total_samples,
                sampling_rate,
                window_duration_s,
                step_duration_s,
            ) else {
                return Ok(());
            };

            let windows: Vec<Window> = scheduler.windows().collect();
            prop_assert_eq!(windows.len(), scheduler.n_windows());

            for (i, w) in windows.iter().enumerate() {
                prop_assert_eq!(w.index, i);
                prop_assert_eq!(w.start, i * scheduler.step_samples());
                prop_assert_eq!(w.end - w.start, scheduler.window_samples());
                prop_assert!(w.end <= total_samples);
            }
        }

        #[test]
        fn prop_timestamps_non_decreasing(
            total_samples in 1usize..100_000,
            step_duration_s in 0.5f64..60.0,
        ) {
            let scheduler =
                WindowScheduler::new(total_samples, 100.0, 5.0, step_duration_s).unwrap();
            let stamps: Vec<f64> =
                scheduler.windows().map(|w| w.timestamp_minutes).collect();
            for pair in stamps.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }
    }
}
