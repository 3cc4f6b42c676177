//! Domain types

mod audio;
mod interval;

pub use audio::{frames_to_ms, ms_to_frames, SampleBuffer, SampleRate};
pub use interval::Interval;
