//! Test signal generation for silence analysis
//!
//! All generators produce mono `f32` samples and take durations in
//! milliseconds so that expected interval boundaries can be written down
//! exactly.

use hush_core::{SampleBuffer, SampleRate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Number of frames spanned by `duration_ms` at `sample_rate`
fn frame_count(sample_rate: u32, duration_ms: u64) -> usize {
    hush_core::ms_to_frames(duration_ms, sample_rate)
}

/// Generate a mono sine tone
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `duration_ms` - Duration in milliseconds
/// * `amplitude` - Peak amplitude (0.0 to 1.0)
pub fn sine(frequency: f32, sample_rate: u32, duration_ms: u64, amplitude: f32) -> Vec<f32> {
    (0..frame_count(sample_rate, duration_ms))
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            (2.0 * PI * frequency * t).sin() * amplitude
        })
        .collect()
}

/// Generate digital silence
pub fn silence(sample_rate: u32, duration_ms: u64) -> Vec<f32> {
    vec![0.0; frame_count(sample_rate, duration_ms)]
}

/// Generate a constant (DC) signal
///
/// Its RMS equals `|level|`, which makes dBFS expectations exact.
pub fn constant(level: f32, sample_rate: u32, duration_ms: u64) -> Vec<f32> {
    vec![level; frame_count(sample_rate, duration_ms)]
}

/// Generate uniform white noise from a fixed seed
pub fn white_noise(seed: u64, sample_rate: u32, duration_ms: u64, amplitude: f32) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..frame_count(sample_rate, duration_ms))
        .map(|_| rng.gen_range(-1.0f32..=1.0) * amplitude)
        .collect()
}

/// Segment of a composed test signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Sine tone at 440 Hz with the given peak amplitude
    Tone { duration_ms: u64, amplitude: f32 },
    /// Digital silence
    Silence { duration_ms: u64 },
}

impl Segment {
    pub fn tone(duration_ms: u64) -> Self {
        Self::Tone {
            duration_ms,
            amplitude: 0.5,
        }
    }

    pub fn silence(duration_ms: u64) -> Self {
        Self::Silence { duration_ms }
    }
}

/// Concatenate segments into one buffer
///
/// Each segment is rendered independently, so boundaries land exactly on the
/// frame counts of the individual durations.
pub fn compose(sample_rate: u32, segments: &[Segment]) -> SampleBuffer {
    let mut samples = Vec::new();
    for segment in segments {
        match *segment {
            Segment::Tone {
                duration_ms,
                amplitude,
            } => samples.extend(sine(440.0, sample_rate, duration_ms, amplitude)),
            Segment::Silence { duration_ms } => {
                samples.extend(silence(sample_rate, duration_ms));
            }
        }
    }
    SampleBuffer::new(samples, SampleRate::new(sample_rate))
}
