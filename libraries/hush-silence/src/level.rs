//! Level utilities: decibel conversions and windowed RMS
//!
//! Samples are normalized so that full scale is 1.0; dBFS values therefore
//! need no reference scaling.

use hush_core::SampleBuffer;

pub use hush_core::{frames_to_ms, ms_to_frames};

/// Convert a linear ratio to decibels
///
/// Uses `20·log10` for amplitude ratios and `10·log10` for power ratios. The
/// sign of `ratio` is ignored; a ratio of exactly zero is negative infinity.
pub fn ratio_to_decibels(ratio: f64, use_amplitude: bool) -> f64 {
    if ratio == 0.0 {
        return f64::NEG_INFINITY;
    }
    let factor = if use_amplitude { 20.0 } else { 10.0 };
    factor * ratio.abs().log10()
}

/// Convert decibels back to a linear ratio
pub fn decibels_to_ratio(db: f64, use_amplitude: bool) -> f64 {
    let factor = if use_amplitude { 20.0 } else { 10.0 };
    10.0_f64.powf(db / factor)
}

/// Root-mean-square of `samples`, accumulated in `f64`
///
/// An empty slice has an RMS of zero.
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f64 = samples
        .iter()
        .map(|&s| {
            let s = f64::from(s);
            s * s
        })
        .sum();
    (sum_squares / samples.len() as f64).sqrt()
}

/// Level of a window in dBFS
///
/// All-zero and empty windows are negative infinity.
pub fn window_dbfs(window: &[f32]) -> f64 {
    ratio_to_decibels(rms(window), true)
}

/// Level of a whole buffer in dBFS
pub fn buffer_dbfs(buffer: &SampleBuffer) -> f64 {
    window_dbfs(buffer.samples())
}

/// Contiguous frame range scored during a single scan step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// dBFS over the part of the window that lies inside `samples`
    pub fn dbfs(&self, samples: &[f32]) -> f64 {
        let start = self.start.min(samples.len());
        let end = self.start.saturating_add(self.len).min(samples.len());
        window_dbfs(&samples[start..end])
    }
}
