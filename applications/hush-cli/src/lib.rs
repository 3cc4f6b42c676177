//! Hush command-line front end
//!
//! Reads one audio file, runs one analysis and reports the result as JSON.
//! Settings are layered: built-in defaults, an optional TOML file,
//! `HUSH_`-prefixed environment variables, then command-line flags.

pub mod commands;
pub mod config;

pub use commands::run;
pub use config::HushConfig;

use clap::{Args, Parser, Subcommand};
use hush_silence::{DetectionConfig, EdgeConfig, KeepSilence};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hush")]
#[command(about = "Silence detection, splitting and trimming for audio files", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "HUSH_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report sample rate, frame count and duration
    Decode {
        input: PathBuf,
    },
    /// List silent intervals as [start_ms, end_ms] pairs
    DetectSilence {
        input: PathBuf,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// List non-silent intervals as [start_ms, end_ms] pairs
    DetectNonsilent {
        input: PathBuf,
        #[command(flatten)]
        detection: DetectionArgs,
    },
    /// List the clips a split on silence would produce
    Split {
        input: PathBuf,
        #[command(flatten)]
        detection: DetectionArgs,
        /// Padding in ms, or `all` / `none`
        #[arg(long, value_parser = parse_keep_silence)]
        keep_silence: Option<KeepSilence>,
    },
    /// Measure leading silence in ms
    LeadingSilence {
        input: PathBuf,
        #[command(flatten)]
        edges: EdgeArgs,
    },
    /// Report the range left after removing silent edges
    Trim {
        input: PathBuf,
        #[command(flatten)]
        edges: EdgeArgs,
    },
    /// Report the range left after the preprocessing pipeline
    Preprocess {
        input: PathBuf,
        #[command(flatten)]
        edges: EdgeArgs,
        /// Skip the length policy and only trim edges
        #[arg(long)]
        no_clip_short: bool,
    },
}

/// Detection overrides
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct DetectionArgs {
    /// Minimum silence length (ms)
    #[arg(long)]
    pub min_silence_len: Option<u64>,
    /// Silence threshold (dBFS)
    #[arg(long, allow_hyphen_values = true)]
    pub silence_thresh: Option<f64>,
    /// Seek step (ms)
    #[arg(long)]
    pub seek_step: Option<u64>,
}

impl DetectionArgs {
    pub fn apply(&self, config: &mut DetectionConfig) {
        if let Some(ms) = self.min_silence_len {
            config.min_silence_len_ms = ms;
        }
        if let Some(db) = self.silence_thresh {
            config.silence_thresh_db = db;
        }
        if let Some(ms) = self.seek_step {
            config.seek_step_ms = ms;
        }
    }
}

/// Edge scan overrides
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct EdgeArgs {
    /// Silence threshold (dBFS)
    #[arg(long, allow_hyphen_values = true)]
    pub silence_thresh: Option<f64>,
    /// Chunk size (ms)
    #[arg(long)]
    pub chunk_size: Option<u64>,
}

impl EdgeArgs {
    pub fn apply(&self, config: &mut EdgeConfig) {
        if let Some(db) = self.silence_thresh {
            config.silence_thresh_db = db;
        }
        if let Some(ms) = self.chunk_size {
            config.chunk_size_ms = ms;
        }
    }
}

fn parse_keep_silence(value: &str) -> Result<KeepSilence, String> {
    match value.to_ascii_lowercase().as_str() {
        "all" | "true" => Ok(KeepSilence::All),
        "none" | "false" => Ok(KeepSilence::Discard),
        ms => ms
            .parse::<u64>()
            .map(KeepSilence::Fixed)
            .map_err(|_| format!("expected milliseconds, `all` or `none`, got `{}`", value)),
    }
}
