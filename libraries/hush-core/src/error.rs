/// Core error types for Hush
use thiserror::Error;

/// Result type alias using `HushError`
pub type Result<T> = std::result::Result<T, HushError>;

/// Core error type for Hush
#[derive(Error, Debug)]
pub enum HushError {
    /// Audio decoding errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Invalid configuration or input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl HushError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
