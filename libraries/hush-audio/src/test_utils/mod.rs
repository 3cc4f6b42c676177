//! Test utilities for audio testing
//!
//! Provides deterministic test signals and an in-memory WAV encoder for
//! exercising the decoder and the silence analysis without checked-in fixtures.

pub mod signals;
pub mod wav;

pub use signals::*;
pub use wav::*;
