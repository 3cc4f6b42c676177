//! Splitting audio into non-silent clips

use crate::config::{KeepSilence, SplitConfig};
use crate::detector::detect_nonsilent;
use crate::error::Result;
use hush_core::{Interval, SampleBuffer};
use tracing::debug;

/// Millisecond ranges of the clips [`split_on_silence`] would produce
///
/// Each non-silent interval is padded according to `keep_silence` and clamped
/// to `[0, duration]`. Padded ranges of neighbouring clips may overlap.
pub fn clip_ranges(buffer: &SampleBuffer, config: &SplitConfig) -> Result<Vec<Interval>> {
    config.validate()?;
    let voiced = detect_nonsilent(buffer, &config.detection)?;
    let total_ms = buffer.duration_ms();

    let ranges = match config.keep_silence {
        KeepSilence::Discard => voiced,
        KeepSilence::Fixed(pad) => voiced
            .iter()
            .map(|iv| {
                Interval::new(
                    iv.start_ms.saturating_sub(pad),
                    iv.end_ms.saturating_add(pad).min(total_ms),
                )
            })
            .collect(),
        KeepSilence::All => (0..voiced.len())
            .map(|i| {
                let start = if i == 0 { 0 } else { voiced[i - 1].end_ms };
                let end = voiced.get(i + 1).map_or(total_ms, |next| next.start_ms);
                Interval::new(start, end)
            })
            .collect(),
    };

    Ok(ranges)
}

/// Split `buffer` into one clip per non-silent interval
///
/// Samples shared by overlapping padded ranges are copied into each clip. A
/// buffer with no non-silent interval yields no clips.
pub fn split_on_silence(buffer: &SampleBuffer, config: &SplitConfig) -> Result<Vec<SampleBuffer>> {
    let ranges = clip_ranges(buffer, config)?;

    let clips: Vec<SampleBuffer> = ranges
        .iter()
        .map(|range| buffer.slice_ms(range.start_ms, range.end_ms))
        .collect();

    debug!(
        clips = clips.len(),
        keep_silence = ?config.keep_silence,
        "Split on silence"
    );

    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectionConfig;
    use hush_core::SampleRate;

    /// 1 s of zeros, 2 s of DC, 1.5 s of zeros, 1 s of DC at 1 kHz
    fn two_bursts() -> SampleBuffer {
        let mut samples = vec![0.0f32; 1_000];
        samples.extend(std::iter::repeat(0.5).take(2_000));
        samples.extend(std::iter::repeat(0.0).take(1_500));
        samples.extend(std::iter::repeat(0.5).take(1_000));
        SampleBuffer::new(samples, SampleRate::new(1_000))
    }

    fn config(keep_silence: KeepSilence) -> SplitConfig {
        // 500 ms window: silent only when fully inside a zero run
        SplitConfig::new(DetectionConfig::new(500, -60.0, 1), keep_silence)
    }

    fn pairs(intervals: &[Interval]) -> Vec<[u64; 2]> {
        intervals.iter().map(Interval::as_pair).collect()
    }

    #[test]
    fn discard_returns_bare_intervals() {
        let ranges = clip_ranges(&two_bursts(), &config(KeepSilence::Discard)).unwrap();
        assert_eq!(pairs(&ranges), vec![[1_000, 3_000], [4_500, 5_500]]);
    }

    #[test]
    fn fixed_padding_is_clamped_to_buffer() {
        let ranges = clip_ranges(&two_bursts(), &config(KeepSilence::Fixed(800))).unwrap();
        assert_eq!(pairs(&ranges), vec![[200, 3_800], [3_700, 5_500]]);
    }

    #[test]
    fn keep_all_extends_to_neighbours() {
        let ranges = clip_ranges(&two_bursts(), &config(KeepSilence::All)).unwrap();
        assert_eq!(pairs(&ranges), vec![[0, 4_500], [3_000, 5_500]]);
    }

    #[test]
    fn overlapping_clips_duplicate_samples() {
        let clips = split_on_silence(&two_bursts(), &config(KeepSilence::Fixed(800))).unwrap();
        assert_eq!(clips.len(), 2);
        assert_eq!(clips[0].len(), 3_600);
        assert_eq!(clips[1].len(), 1_800);
    }

    #[test]
    fn silent_buffer_has_no_clips() {
        let buffer = SampleBuffer::new(vec![0.0; 3_000], SampleRate::new(1_000));
        assert!(split_on_silence(&buffer, &SplitConfig::default()).unwrap().is_empty());
    }
}
