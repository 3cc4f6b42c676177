//! Sliding-window silence detection
//!
//! A window of `min_silence_len_ms` is slid across the buffer in steps of
//! `seek_step_ms`. Every window at or below the threshold marks its start
//! offset; marked offsets whose windows overlap or touch are merged into one
//! silent interval.

use crate::config::DetectionConfig;
use crate::error::{validate_buffer, Result};
use crate::level::Window;
use hush_core::{Interval, SampleBuffer};
use rayon::prelude::*;
use tracing::debug;

/// Find the silent intervals of `buffer`, in milliseconds
///
/// Intervals are ascending and non-overlapping. A buffer shorter than
/// `min_silence_len_ms` has no silent intervals.
pub fn detect_silence(buffer: &SampleBuffer, config: &DetectionConfig) -> Result<Vec<Interval>> {
    config.validate()?;
    validate_buffer(buffer)?;

    let rate = buffer.sample_rate();
    if buffer.is_empty() || buffer.duration_ms() < config.min_silence_len_ms {
        return Ok(Vec::new());
    }

    let window_len = rate.ms_to_frames(config.min_silence_len_ms).max(1);
    let step = rate.ms_to_frames(config.seek_step_ms).max(1);
    let Some(last) = buffer.len().checked_sub(window_len) else {
        return Ok(Vec::new());
    };

    let starts = candidate_starts(last, step);
    let samples = buffer.samples();
    let marked: Vec<bool> = starts
        .par_iter()
        .map(|&start| Window::new(start, window_len).dbfs(samples) <= config.silence_thresh_db)
        .collect();

    let intervals: Vec<Interval> = merge_runs(&starts, &marked, window_len)
        .into_iter()
        .map(|(start, end)| Interval::new(rate.frames_to_ms(start), rate.frames_to_ms(end)))
        .collect();

    debug!(
        candidates = starts.len(),
        window_len,
        step,
        silent = intervals.len(),
        "Silence scan complete"
    );

    Ok(intervals)
}

/// Find the non-silent intervals of `buffer`, in milliseconds
///
/// This is the complement of [`detect_silence`] over `[0, duration]`, with
/// zero-length gaps dropped.
pub fn detect_nonsilent(buffer: &SampleBuffer, config: &DetectionConfig) -> Result<Vec<Interval>> {
    let silent = detect_silence(buffer, config)?;
    Ok(complement(&silent, buffer.duration_ms()))
}

/// Window start offsets: every `step` frames up to `last`, plus `last` itself
fn candidate_starts(last: usize, step: usize) -> Vec<usize> {
    let mut starts: Vec<usize> = (0..=last).step_by(step).collect();
    if last % step != 0 {
        starts.push(last);
    }
    starts
}

/// Group marked starts into `(first_frame, end_frame)` runs
fn merge_runs(starts: &[usize], marked: &[bool], window_len: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    // (run start, last marked start)
    let mut current: Option<(usize, usize)> = None;

    for (&start, _) in starts.iter().zip(marked).filter(|&(_, &silent)| silent) {
        current = match current {
            Some((run_start, prev)) if start - prev <= window_len => Some((run_start, start)),
            Some((run_start, prev)) => {
                runs.push((run_start, prev + window_len));
                Some((start, start))
            }
            None => Some((start, start)),
        };
    }

    if let Some((run_start, prev)) = current {
        runs.push((run_start, prev + window_len));
    }
    runs
}

fn complement(silent: &[Interval], total_ms: u64) -> Vec<Interval> {
    let mut gaps = Vec::with_capacity(silent.len() + 1);
    let mut cursor = 0;

    for interval in silent {
        if interval.start_ms > cursor {
            gaps.push(Interval::new(cursor, interval.start_ms));
        }
        cursor = cursor.max(interval.end_ms);
    }
    if total_ms > cursor {
        gaps.push(Interval::new(cursor, total_ms));
    }
    gaps
}
