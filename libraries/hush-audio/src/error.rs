/// Audio-specific errors
use thiserror::Error;

/// Result type alias using `AudioError`
pub type Result<T> = std::result::Result<T, AudioError>;

/// Audio error types
///
/// Every variant is fatal: the decoder never hands back a partial buffer.
#[derive(Error, Debug)]
pub enum AudioError {
    /// Container not recognized, or a sample layout the decoder cannot normalize
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed packet
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Payload ended before the declared frame count
    #[error("Truncated audio: expected {expected} frames, decoded {decoded}")]
    Truncated { expected: u64, decoded: u64 },

    /// Container holds no decodable track
    #[error("No audio tracks found")]
    NoAudioTrack,

    /// Track does not declare a sample rate
    #[error("Sample rate not found")]
    MissingSampleRate,

    /// Symphonia error
    #[error("Symphonia error: {0}")]
    Symphonia(String),
}

impl From<AudioError> for hush_core::HushError {
    fn from(err: AudioError) -> Self {
        hush_core::HushError::audio(err.to_string())
    }
}
