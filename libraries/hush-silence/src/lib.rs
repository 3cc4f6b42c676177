//! Silence analysis for Hush
//!
//! This crate provides:
//! - Decibel/ratio conversions and windowed RMS (dBFS) measurement
//! - Sliding-window detection of silent and non-silent intervals
//! - Splitting audio into padded non-silent clips
//! - Leading/trailing silence measurement and edge trimming
//! - A preprocessing pipeline that trims edges and clips implausible lengths
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ SampleBuffer │ ──► │   Detector   │ ──► │  Interval[]   │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!        │                    │
//!        │                    ▼
//!        │             ┌──────────────┐     ┌───────────────┐
//!        │             │  Segmenter   │ ──► │ SampleBuffer[]│
//!        │             └──────────────┘     └───────────────┘
//!        ▼
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Edge Trimmer │ ──► │  Preprocess  │ ──► │ SampleBuffer  │
//! └──────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! Every operation reads its input buffer and returns freshly allocated
//! output, so independent buffers can be analyzed from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use hush_core::{SampleBuffer, SampleRate};
//! use hush_silence::{detect_silence, DetectionConfig};
//!
//! // Two seconds of digital silence
//! let buffer = SampleBuffer::new(vec![0.0; 32_000], SampleRate::new(16_000));
//!
//! let config = DetectionConfig::new(1000, -20.0, 1);
//! let silent = detect_silence(&buffer, &config)?;
//! assert_eq!(silent[0].as_pair(), [0, 2000]);
//! # Ok::<(), hush_silence::SilenceError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod detector;
mod error;
pub mod level;
mod preprocess;
mod segmenter;
mod trimmer;

pub use config::{
    ClipPolicy, DetectionConfig, EdgeConfig, KeepSilence, PreprocessConfig, SplitConfig,
};
pub use detector::{detect_nonsilent, detect_silence};
pub use error::{Result, SilenceError};
pub use preprocess::{preprocess, preprocess_bytes};
pub use segmenter::{clip_ranges, split_on_silence};
pub use trimmer::{
    leading_silence_frames, leading_silence_length, remove_silence_edges, trailing_silence_length,
};

/// Default minimum silence length for detection and splitting (ms)
pub const DEFAULT_MIN_SILENCE_LEN_MS: u64 = 1000;

/// Default threshold for silence/non-silence detection (dBFS)
pub const DEFAULT_DETECTION_THRESH_DB: f64 = -16.0;

/// Default threshold for leading-silence measurement (dBFS)
pub const DEFAULT_LEADING_THRESH_DB: f64 = -50.0;

/// Default threshold for edge removal and preprocessing (dBFS)
pub const DEFAULT_EDGE_THRESH_DB: f64 = -42.0;

/// Default edge-trimmer chunk size (ms)
pub const DEFAULT_CHUNK_SIZE_MS: u64 = 10;
