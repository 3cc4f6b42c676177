/// Subcommand execution
use crate::{Command, HushConfig};
use anyhow::Context;
use hush_audio::SymphoniaDecoder;
use hush_core::{frames_to_ms, Interval, SampleBuffer};
use hush_silence::{
    clip_ranges, detect_nonsilent, detect_silence, leading_silence_frames,
    leading_silence_length, preprocess, remove_silence_edges,
};
use serde::Serialize;
use std::path::Path;

/// Result of one subcommand, printed as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Decoded {
        sample_rate: u32,
        frames: usize,
        duration_ms: u64,
    },
    Intervals {
        intervals: Vec<[u64; 2]>,
    },
    Clips {
        clips: Vec<ClipReport>,
    },
    LeadingSilence {
        leading_silence_ms: u64,
    },
    Kept(KeptRange),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipReport {
    pub start_ms: u64,
    pub end_ms: u64,
    pub frames: usize,
}

/// Portion of the input that survives trimming
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeptRange {
    pub start_frame: usize,
    pub frames: usize,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl KeptRange {
    fn new(buffer: &SampleBuffer, start_frame: usize, frames: usize) -> Self {
        let rate = buffer.sample_rate().as_hz();
        Self {
            start_frame,
            frames,
            start_ms: frames_to_ms(start_frame, rate),
            end_ms: frames_to_ms(start_frame + frames, rate),
        }
    }
}

fn pairs(intervals: &[Interval]) -> Vec<[u64; 2]> {
    intervals.iter().map(Interval::as_pair).collect()
}

fn load(path: &Path) -> anyhow::Result<SampleBuffer> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let buffer = SymphoniaDecoder::new()
        .decode_bytes(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        sample_rate = %buffer.sample_rate(),
        frames = buffer.len(),
        "Decoded input"
    );
    Ok(buffer)
}

/// Run `command` against `config`, with the command's own flags applied on top
pub fn run(command: &Command, config: &HushConfig) -> anyhow::Result<Report> {
    let report = match command {
        Command::Decode { input } => {
            let buffer = load(input)?;
            Report::Decoded {
                sample_rate: buffer.sample_rate().as_hz(),
                frames: buffer.len(),
                duration_ms: buffer.duration_ms(),
            }
        }
        Command::DetectSilence { input, detection } => {
            let mut settings = config.detection;
            detection.apply(&mut settings);
            let silent = detect_silence(&load(input)?, &settings)?;
            Report::Intervals {
                intervals: pairs(&silent),
            }
        }
        Command::DetectNonsilent { input, detection } => {
            let mut settings = config.detection;
            detection.apply(&mut settings);
            let voiced = detect_nonsilent(&load(input)?, &settings)?;
            Report::Intervals {
                intervals: pairs(&voiced),
            }
        }
        Command::Split {
            input,
            detection,
            keep_silence,
        } => {
            let mut settings = config.split();
            detection.apply(&mut settings.detection);
            if let Some(keep) = keep_silence {
                settings.keep_silence = *keep;
            }
            let buffer = load(input)?;
            let clips = clip_ranges(&buffer, &settings)?
                .into_iter()
                .map(|range| ClipReport {
                    start_ms: range.start_ms,
                    end_ms: range.end_ms,
                    frames: buffer
                        .end_frame_at_ms(range.end_ms)
                        .saturating_sub(buffer.frame_at_ms(range.start_ms)),
                })
                .collect();
            Report::Clips { clips }
        }
        Command::LeadingSilence { input, edges } => {
            let mut settings = config.leading;
            edges.apply(&mut settings);
            Report::LeadingSilence {
                leading_silence_ms: leading_silence_length(&load(input)?, &settings)?,
            }
        }
        Command::Trim { input, edges } => {
            let mut settings = config.edges;
            edges.apply(&mut settings);
            let buffer = load(input)?;
            let trimmed = remove_silence_edges(&buffer, &settings)?;
            let start = leading_silence_frames(&buffer, &settings)?;
            Report::Kept(KeptRange::new(&buffer, start, trimmed.len()))
        }
        Command::Preprocess {
            input,
            edges,
            no_clip_short,
        } => {
            let mut settings = config.preprocess();
            edges.apply(&mut settings.edges);
            if *no_clip_short {
                settings.clip_short = false;
            }
            let buffer = load(input)?;
            let out = preprocess(&buffer, &settings)?;
            let start = leading_silence_frames(&buffer, &settings.edges)?;
            Report::Kept(KeptRange::new(&buffer, start, out.len()))
        }
    };

    Ok(report)
}
