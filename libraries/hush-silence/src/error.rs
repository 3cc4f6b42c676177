//! Error types for silence analysis

use hush_core::{HushError, SampleBuffer};
use thiserror::Error;
use tracing::warn;

/// Result type for silence analysis
pub type Result<T> = std::result::Result<T, SilenceError>;

/// Errors that can occur during silence analysis
///
/// Analysis is total over well-formed buffers: empty audio and extreme
/// thresholds produce empty or whole-buffer results, never errors.
#[derive(Error, Debug)]
pub enum SilenceError {
    /// A parameter is out of range; the analysis was not attempted
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The input bytes could not be decoded
    #[error("Decode failed: {0}")]
    Decode(#[from] HushError),
}

impl SilenceError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

impl From<SilenceError> for HushError {
    fn from(err: SilenceError) -> Self {
        match err {
            SilenceError::InvalidConfiguration(msg) => HushError::invalid_input(msg),
            SilenceError::Decode(inner) => inner,
        }
    }
}

/// Reject buffers whose millisecond arithmetic is undefined
pub(crate) fn validate_buffer(buffer: &SampleBuffer) -> Result<()> {
    if buffer.sample_rate().as_hz() == 0 {
        if !buffer.is_empty() {
            return Err(SilenceError::invalid(
                "sample rate must be positive for non-empty audio",
            ));
        }
        warn!("Empty buffer has a zero sample rate");
    }
    Ok(())
}
