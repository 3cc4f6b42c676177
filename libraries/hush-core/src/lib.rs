//! Hush Core
//!
//! Platform-agnostic types, traits, and error handling shared by the Hush crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `SampleBuffer`, `SampleRate`, `Interval`
//! - **Time Conversions**: `ms_to_frames`, `frames_to_ms`
//! - **Core Traits**: `AudioDecoder`
//! - **Error Handling**: Unified `HushError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use hush_core::{Interval, SampleBuffer, SampleRate};
//!
//! // Half a second of silence at 16 kHz
//! let buffer = SampleBuffer::new(vec![0.0; 8_000], SampleRate::new(16_000));
//! assert_eq!(buffer.duration_ms(), 500);
//!
//! let whole = Interval::new(0, buffer.duration_ms());
//! assert_eq!(whole.as_pair(), [0, 500]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{HushError, Result};
pub use traits::AudioDecoder;
pub use types::{frames_to_ms, ms_to_frames, Interval, SampleBuffer, SampleRate};
