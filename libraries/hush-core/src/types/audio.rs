/// Audio-related types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

const MS_PER_SECOND: u64 = 1_000;

/// Convert milliseconds to a frame count at `sample_rate`
///
/// Rounds half-up (`(ms * rate + 500) / 1000` in integer math). Every
/// millisecond-to-index conversion in Hush goes through this function so that
/// interval boundaries are deterministic.
pub fn ms_to_frames(ms: u64, sample_rate: u32) -> usize {
    let scaled = ms
        .saturating_mul(u64::from(sample_rate))
        .saturating_add(MS_PER_SECOND / 2);
    usize::try_from(scaled / MS_PER_SECOND).unwrap_or(usize::MAX)
}

/// Convert a frame count to whole milliseconds, truncating any partial millisecond
///
/// A zero sample rate yields 0.
pub fn frames_to_ms(frames: usize, sample_rate: u32) -> u64 {
    if sample_rate == 0 {
        return 0;
    }
    (frames as u64).saturating_mul(MS_PER_SECOND) / u64::from(sample_rate)
}

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Common sample rates
    pub const SPEECH: Self = Self(16_000);
    pub const CD_QUALITY: Self = Self(44_100);
    pub const DVD_QUALITY: Self = Self(48_000);
    pub const HIGH_RES_96: Self = Self(96_000);
    pub const HIGH_RES_192: Self = Self(192_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }

    /// Frames spanned by `ms` milliseconds at this rate
    pub fn ms_to_frames(&self, ms: u64) -> usize {
        ms_to_frames(ms, self.0)
    }

    /// Whole milliseconds spanned by `frames` frames at this rate
    pub fn frames_to_ms(&self, frames: usize) -> u64 {
        frames_to_ms(frames, self.0)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Mono buffer of decoded samples
///
/// Samples are `f32` in the range [-1.0, 1.0], one per frame. A buffer is
/// never mutated once built: cropping and slicing return new buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: SampleRate,
}

impl SampleBuffer {
    /// Create a new sample buffer
    pub fn new(samples: Vec<f32>, sample_rate: SampleRate) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Create an empty buffer at the given rate
    pub fn empty(sample_rate: SampleRate) -> Self {
        Self::new(Vec::new(), sample_rate)
    }

    /// Borrow the samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consume the buffer, returning its samples
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Get the length in frames
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in whole milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.sample_rate.frames_to_ms(self.len())
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate.as_hz() == 0 {
            return 0.0;
        }
        self.len() as f64 / f64::from(self.sample_rate.as_hz())
    }

    /// Frame index for a start position in milliseconds, clamped to the buffer
    pub fn frame_at_ms(&self, ms: u64) -> usize {
        self.sample_rate.ms_to_frames(ms).min(self.len())
    }

    /// Frame index for an end position in milliseconds
    ///
    /// Positions at or past [`duration_ms`](Self::duration_ms) map to the
    /// buffer length, so the partial trailing millisecond is included.
    pub fn end_frame_at_ms(&self, ms: u64) -> usize {
        if ms >= self.duration_ms() {
            self.len()
        } else {
            self.frame_at_ms(ms)
        }
    }

    /// Copy out a frame range, clamped to the buffer
    ///
    /// An inverted range yields an empty buffer.
    pub fn slice_frames(&self, range: Range<usize>) -> SampleBuffer {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Self::new(self.samples[start..end].to_vec(), self.sample_rate)
    }

    /// Copy out the span `[start_ms, end_ms)`
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> SampleBuffer {
        self.slice_frames(self.frame_at_ms(start_ms)..self.end_frame_at_ms(end_ms))
    }

    /// Copy of the buffer with frames in reverse order
    pub fn reversed(&self) -> SampleBuffer {
        Self::new(self.samples.iter().rev().copied().collect(), self.sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_to_frames_rounds_half_up() {
        assert_eq!(ms_to_frames(1000, 16_000), 16_000);
        assert_eq!(ms_to_frames(10, 44_100), 441);
        // 5 ms at 44.1 kHz is 220.5 frames
        assert_eq!(ms_to_frames(5, 44_100), 221);
        // 1 ms at 22.05 kHz is 22.05 frames
        assert_eq!(ms_to_frames(1, 22_050), 22);
        assert_eq!(ms_to_frames(7, 0), 0);
    }

    #[test]
    fn frames_to_ms_truncates() {
        assert_eq!(frames_to_ms(16_000, 16_000), 1000);
        assert_eq!(frames_to_ms(44_150, 44_100), 1001);
        assert_eq!(frames_to_ms(15, 16_000), 0);
        assert_eq!(frames_to_ms(100, 0), 0);
    }

    #[test]
    fn sample_rate_common_values() {
        assert_eq!(SampleRate::CD_QUALITY.as_hz(), 44_100);
        assert_eq!(SampleRate::HIGH_RES_192.to_string(), "192000 Hz");
    }

    #[test]
    fn buffer_duration() {
        let buffer = SampleBuffer::new(vec![0.0; 24_000], SampleRate::SPEECH);
        assert_eq!(buffer.duration_ms(), 1500);
        assert!((buffer.duration_secs() - 1.5).abs() < 1e-9);
        assert!(SampleBuffer::empty(SampleRate::SPEECH).is_empty());
    }

    #[test]
    fn end_frame_covers_partial_millisecond() {
        let buffer = SampleBuffer::new(vec![0.0; 44_150], SampleRate::CD_QUALITY);
        assert_eq!(buffer.duration_ms(), 1001);
        assert_eq!(buffer.frame_at_ms(1001), 44_144);
        assert_eq!(buffer.end_frame_at_ms(1001), 44_150);
        assert_eq!(buffer.slice_ms(0, 1001).len(), 44_150);
    }

    #[test]
    fn slice_frames_clamps() {
        let buffer = SampleBuffer::new(vec![0.1, 0.2, 0.3, 0.4], SampleRate::new(1000));
        assert_eq!(buffer.slice_frames(1..3).samples(), &[0.2, 0.3]);
        assert_eq!(buffer.slice_frames(2..99).samples(), &[0.3, 0.4]);
        assert!(buffer.slice_frames(3..1).is_empty());
    }

    #[test]
    fn reversed_keeps_rate() {
        let buffer = SampleBuffer::new(vec![1.0, 0.5, 0.0], SampleRate::new(8_000));
        let reversed = buffer.reversed();
        assert_eq!(reversed.samples(), &[0.0, 0.5, 1.0]);
        assert_eq!(reversed.sample_rate(), buffer.sample_rate());
    }
}
