//! Per-operation configuration
//!
//! Each operation takes its parameters explicitly; `Default` supplies the
//! defaults of that call site. Every struct deserializes with missing fields
//! filled from its defaults, so partial TOML or JSON documents are accepted.

use crate::error::{Result, SilenceError};
use crate::{
    DEFAULT_CHUNK_SIZE_MS, DEFAULT_DETECTION_THRESH_DB, DEFAULT_EDGE_THRESH_DB,
    DEFAULT_LEADING_THRESH_DB, DEFAULT_MIN_SILENCE_LEN_MS,
};
use serde::{Deserialize, Serialize};

fn require_positive(value: u64, name: &str) -> Result<()> {
    if value == 0 {
        return Err(SilenceError::invalid(format!("{} must be positive", name)));
    }
    Ok(())
}

fn require_threshold(db: f64, name: &str) -> Result<()> {
    if db.is_nan() {
        return Err(SilenceError::invalid(format!("{} must not be NaN", name)));
    }
    Ok(())
}

/// Parameters for silence / non-silence detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Shortest run of silence worth reporting; also the analysis window length
    pub min_silence_len_ms: u64,
    /// Windows at or below this level (dBFS) are silent
    pub silence_thresh_db: f64,
    /// Stride between candidate windows
    pub seek_step_ms: u64,
}

impl DetectionConfig {
    pub fn new(min_silence_len_ms: u64, silence_thresh_db: f64, seek_step_ms: u64) -> Self {
        Self {
            min_silence_len_ms,
            silence_thresh_db,
            seek_step_ms,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive(self.min_silence_len_ms, "min_silence_len_ms")?;
        require_positive(self.seek_step_ms, "seek_step_ms")?;
        require_threshold(self.silence_thresh_db, "silence_thresh_db")
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SILENCE_LEN_MS, DEFAULT_DETECTION_THRESH_DB, 1)
    }
}

/// How much surrounding silence each split clip keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "KeepSilenceRepr", into = "KeepSilenceRepr")]
pub enum KeepSilence {
    /// Clips are exactly the non-silent intervals
    Discard,
    /// Pad both sides by this many milliseconds, clamped to the buffer
    Fixed(u64),
    /// Pad out to the neighbouring non-silent intervals or the buffer edges
    All,
}

impl Default for KeepSilence {
    fn default() -> Self {
        Self::Fixed(100)
    }
}

impl From<bool> for KeepSilence {
    fn from(keep_all: bool) -> Self {
        if keep_all {
            Self::All
        } else {
            Self::Discard
        }
    }
}

impl From<u64> for KeepSilence {
    fn from(ms: u64) -> Self {
        Self::Fixed(ms)
    }
}

/// Wire form: `true`/`false` or a millisecond count
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum KeepSilenceRepr {
    Flag(bool),
    Millis(u64),
}

impl From<KeepSilenceRepr> for KeepSilence {
    fn from(repr: KeepSilenceRepr) -> Self {
        match repr {
            KeepSilenceRepr::Flag(flag) => flag.into(),
            KeepSilenceRepr::Millis(ms) => ms.into(),
        }
    }
}

impl From<KeepSilence> for KeepSilenceRepr {
    fn from(keep: KeepSilence) -> Self {
        match keep {
            KeepSilence::Discard => Self::Flag(false),
            KeepSilence::All => Self::Flag(true),
            KeepSilence::Fixed(ms) => Self::Millis(ms),
        }
    }
}

/// Parameters for splitting audio on silence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    #[serde(flatten)]
    pub detection: DetectionConfig,
    pub keep_silence: KeepSilence,
}

impl SplitConfig {
    pub fn new(detection: DetectionConfig, keep_silence: KeepSilence) -> Self {
        Self {
            detection,
            keep_silence,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.detection.validate()
    }
}

/// Parameters for the chunk-wise edge scans
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Chunks below this level (dBFS) are silent
    pub silence_thresh_db: f64,
    pub chunk_size_ms: u64,
}

impl EdgeConfig {
    pub fn new(silence_thresh_db: f64, chunk_size_ms: u64) -> Self {
        Self {
            silence_thresh_db,
            chunk_size_ms,
        }
    }

    /// Defaults for measuring leading silence on its own (-50 dBFS)
    pub fn leading() -> Self {
        Self::new(DEFAULT_LEADING_THRESH_DB, DEFAULT_CHUNK_SIZE_MS)
    }

    pub fn validate(&self) -> Result<()> {
        require_positive(self.chunk_size_ms, "chunk_size_ms")?;
        require_threshold(self.silence_thresh_db, "silence_thresh_db")
    }
}

impl Default for EdgeConfig {
    /// Defaults for edge removal and preprocessing (-42 dBFS)
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_THRESH_DB, DEFAULT_CHUNK_SIZE_MS)
    }
}

/// Length policy applied by the preprocessing pipeline when `clip_short` is set
///
/// After edge trimming:
/// - audio shorter than `min_duration_ms` (default: one edge chunk) is dropped
///   entirely;
/// - audio longer than `hard_limit_ms` is cut after the latest non-silent
///   interval that ends in `(soft_limit_ms, hard_limit_ms]`, or at exactly
///   `hard_limit_ms` when no such interval exists;
/// - anything else is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPolicy {
    pub min_duration_ms: Option<u64>,
    pub soft_limit_ms: u64,
    pub hard_limit_ms: u64,
}

impl ClipPolicy {
    pub fn validate(&self) -> Result<()> {
        require_positive(self.hard_limit_ms, "hard_limit_ms")?;
        if self.soft_limit_ms > self.hard_limit_ms {
            return Err(SilenceError::invalid(format!(
                "soft_limit_ms ({}) exceeds hard_limit_ms ({})",
                self.soft_limit_ms, self.hard_limit_ms
            )));
        }
        Ok(())
    }
}

impl Default for ClipPolicy {
    fn default() -> Self {
        Self {
            min_duration_ms: None,
            soft_limit_ms: 6_000,
            hard_limit_ms: 12_000,
        }
    }
}

/// Parameters for the preprocessing pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    #[serde(flatten)]
    pub edges: EdgeConfig,
    pub clip_short: bool,
    pub clip: ClipPolicy,
}

impl PreprocessConfig {
    pub fn new(edges: EdgeConfig, clip_short: bool) -> Self {
        Self {
            edges,
            clip_short,
            clip: ClipPolicy::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.edges.validate()?;
        if self.clip_short {
            self.clip.validate()?;
        }
        Ok(())
    }
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self::new(EdgeConfig::default(), true)
    }
}
