//! Hush Audio
//!
//! Decoding of encoded audio containers into mono [`SampleBuffer`]s.
//!
//! This crate provides:
//! - Container probing and decoding via Symphonia (WAV, FLAC, MP3, OGG/Vorbis, AAC)
//! - Normalization of 8/16/24/32-bit integer and 32/64-bit float PCM to `[-1.0, 1.0]`
//! - Downmixing of multi-channel sources to mono by per-frame averaging
//!
//! # Example: Decoding Audio
//!
//! ```rust,no_run
//! use hush_audio::SymphoniaDecoder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("/recordings/take.wav")?;
//! let buffer = SymphoniaDecoder::new().decode_bytes(&bytes)?;
//!
//! println!("Decoded {} frames at {}", buffer.len(), buffer.sample_rate());
//! # Ok(())
//! # }
//! ```
//!
//! [`SampleBuffer`]: hush_core::SampleBuffer

mod decoder;
mod error;
mod sample_format;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use decoder::SymphoniaDecoder;
pub use error::{AudioError, Result};
pub use sample_format::{PcmFormat, PcmSample};
