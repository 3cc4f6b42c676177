//! Leading/trailing silence measurement and edge trimming
//!
//! Edges are scanned in fixed, non-overlapping chunks of `chunk_size_ms`.
//! The scan stops at the first chunk that reaches the threshold; the part of
//! the buffer before that chunk is silence.

use crate::config::EdgeConfig;
use crate::error::{validate_buffer, Result};
use crate::level::window_dbfs;
use hush_core::SampleBuffer;
use tracing::{debug, trace};

/// Where a leading-silence scan stopped
#[derive(Debug, Clone, Copy)]
struct EdgeScan {
    offset_ms: u64,
    frames: usize,
}

fn scan_leading(buffer: &SampleBuffer, config: &EdgeConfig) -> EdgeScan {
    let rate = buffer.sample_rate();
    let samples = buffer.samples();
    let mut offset_ms = 0u64;

    loop {
        let start = rate.ms_to_frames(offset_ms);
        if start >= samples.len() {
            break;
        }
        let end = rate
            .ms_to_frames(offset_ms.saturating_add(config.chunk_size_ms))
            .min(samples.len());
        if window_dbfs(&samples[start..end]) >= config.silence_thresh_db {
            break;
        }
        offset_ms = offset_ms.saturating_add(config.chunk_size_ms);
    }

    EdgeScan {
        offset_ms: offset_ms.min(buffer.duration_ms()),
        frames: rate.ms_to_frames(offset_ms).min(samples.len()),
    }
}

/// Length of the silence at the start of `buffer`, in milliseconds
///
/// Never more than the buffer duration; a fully silent buffer reports its
/// whole duration.
pub fn leading_silence_length(buffer: &SampleBuffer, config: &EdgeConfig) -> Result<u64> {
    config.validate()?;
    validate_buffer(buffer)?;
    Ok(scan_leading(buffer, config).offset_ms)
}

/// Length of the silence at the start of `buffer`, in frames
pub fn leading_silence_frames(buffer: &SampleBuffer, config: &EdgeConfig) -> Result<usize> {
    config.validate()?;
    validate_buffer(buffer)?;
    Ok(scan_leading(buffer, config).frames)
}

/// Length of the silence at the end of `buffer`, in milliseconds
///
/// The leading scan applied to a reversed copy.
pub fn trailing_silence_length(buffer: &SampleBuffer, config: &EdgeConfig) -> Result<u64> {
    leading_silence_length(&buffer.reversed(), config)
}

/// Crop leading and trailing silence from `buffer`
///
/// A buffer that is silent throughout becomes empty.
pub fn remove_silence_edges(buffer: &SampleBuffer, config: &EdgeConfig) -> Result<SampleBuffer> {
    config.validate()?;
    validate_buffer(buffer)?;

    let lead = scan_leading(buffer, config).frames;
    let trail = scan_leading(&buffer.reversed(), config).frames;
    let end = buffer.len() - trail;

    if lead >= end {
        debug!(frames = buffer.len(), "Buffer is silent throughout");
        return Ok(SampleBuffer::empty(buffer.sample_rate()));
    }

    trace!(lead, trail, "Trimming silent edges");
    Ok(buffer.slice_frames(lead..end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_core::SampleRate;

    const RATE: SampleRate = SampleRate::SPEECH;

    fn buffer(segments: &[(f32, u64)]) -> SampleBuffer {
        let samples = segments
            .iter()
            .flat_map(|&(level, ms)| std::iter::repeat(level).take(RATE.ms_to_frames(ms)))
            .collect();
        SampleBuffer::new(samples, RATE)
    }

    #[test]
    fn leading_silence_stops_at_first_loud_chunk() {
        let config = EdgeConfig::leading();
        assert_eq!(leading_silence_length(&buffer(&[(0.0, 250), (0.3, 500)]), &config).unwrap(), 250);

        // The chunk straddling the onset already counts as loud
        assert_eq!(leading_silence_length(&buffer(&[(0.0, 255), (0.3, 500)]), &config).unwrap(), 250);
    }

    #[test]
    fn leading_silence_is_clamped_to_duration() {
        let config = EdgeConfig::leading();
        assert_eq!(leading_silence_length(&buffer(&[(0.0, 1_000)]), &config).unwrap(), 1_000);
        assert_eq!(leading_silence_length(&buffer(&[(0.0, 25)]), &config).unwrap(), 25);
        assert_eq!(leading_silence_frames(&buffer(&[(0.0, 25)]), &config).unwrap(), 400);
    }

    #[test]
    fn negative_infinity_threshold_finds_no_silence() {
        let config = EdgeConfig::new(f64::NEG_INFINITY, 10);
        assert_eq!(leading_silence_length(&buffer(&[(0.0, 500)]), &config).unwrap(), 0);
    }

    #[test]
    fn trailing_silence_scans_from_the_end() {
        let config = EdgeConfig::default();
        let audio = buffer(&[(0.0, 300), (0.3, 400), (0.0, 200)]);
        assert_eq!(trailing_silence_length(&audio, &config).unwrap(), 200);
    }

    #[test]
    fn edges_are_removed() {
        let audio = buffer(&[(0.0, 300), (0.3, 400), (0.0, 200)]);
        let trimmed = remove_silence_edges(&audio, &EdgeConfig::default()).unwrap();

        assert_eq!(trimmed.len(), 6_400);
        assert!(trimmed.samples().iter().all(|&s| s == 0.3));
    }

    #[test]
    fn silent_buffer_trims_to_empty() {
        let trimmed = remove_silence_edges(&buffer(&[(0.0, 1_003)]), &EdgeConfig::default()).unwrap();
        assert!(trimmed.is_empty());
        assert_eq!(trimmed.sample_rate(), RATE);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let result = remove_silence_edges(&buffer(&[(0.3, 100)]), &EdgeConfig::new(-42.0, 0));
        assert!(matches!(result, Err(crate::SilenceError::InvalidConfiguration(_))));
    }
}
