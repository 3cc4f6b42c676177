//! Preprocessing pipeline: edge trimming plus an optional length policy

use crate::config::{ClipPolicy, DetectionConfig, PreprocessConfig};
use crate::detector::detect_nonsilent;
use crate::error::Result;
use crate::trimmer::remove_silence_edges;
use hush_core::{AudioDecoder, SampleBuffer};
use tracing::debug;

/// Detection passes used to find a cut point in over-long audio, coarse first
const CLIP_PASSES: [DetectionConfig; 2] = [
    DetectionConfig {
        min_silence_len_ms: 1000,
        silence_thresh_db: -50.0,
        seek_step_ms: 10,
    },
    DetectionConfig {
        min_silence_len_ms: 100,
        silence_thresh_db: -40.0,
        seek_step_ms: 10,
    },
];

/// Trim silent edges and, when `clip_short` is set, apply the [`ClipPolicy`]
///
/// The result is always a prefix of the edge-trimmed buffer, so it is never
/// longer than the input.
pub fn preprocess(buffer: &SampleBuffer, config: &PreprocessConfig) -> Result<SampleBuffer> {
    config.validate()?;
    let trimmed = remove_silence_edges(buffer, &config.edges)?;

    if !config.clip_short {
        return Ok(trimmed);
    }
    apply_clip_policy(trimmed, &config.clip, config.edges.chunk_size_ms)
}

/// Decode `bytes` with `decoder`, then [`preprocess`] the result
///
/// The configuration is checked before anything is decoded.
pub fn preprocess_bytes<D>(decoder: &D, bytes: &[u8], config: &PreprocessConfig) -> Result<SampleBuffer>
where
    D: AudioDecoder + ?Sized,
{
    config.validate()?;
    let buffer = decoder.decode(bytes)?;
    preprocess(&buffer, config)
}

fn apply_clip_policy(
    trimmed: SampleBuffer,
    policy: &ClipPolicy,
    chunk_size_ms: u64,
) -> Result<SampleBuffer> {
    let duration_ms = trimmed.duration_ms();
    let min_duration_ms = policy.min_duration_ms.unwrap_or(chunk_size_ms);

    if duration_ms < min_duration_ms {
        debug!(duration_ms, min_duration_ms, "Dropping residual audio");
        return Ok(SampleBuffer::empty(trimmed.sample_rate()));
    }
    if duration_ms <= policy.hard_limit_ms {
        return Ok(trimmed);
    }

    let cut_ms = find_cut(&trimmed, policy)?.unwrap_or(policy.hard_limit_ms);
    debug!(duration_ms, cut_ms, "Clipping over-long audio");
    Ok(trimmed.slice_frames(0..trimmed.frame_at_ms(cut_ms)))
}

/// Latest non-silent interval end inside `(soft_limit_ms, hard_limit_ms]`
fn find_cut(trimmed: &SampleBuffer, policy: &ClipPolicy) -> Result<Option<u64>> {
    for pass in &CLIP_PASSES {
        let cut = detect_nonsilent(trimmed, pass)?
            .iter()
            .map(|interval| interval.end_ms)
            .filter(|&end| end > policy.soft_limit_ms && end <= policy.hard_limit_ms)
            .max();
        if cut.is_some() {
            return Ok(cut);
        }
    }
    Ok(None)
}
