/// Core traits for Hush
use crate::error::Result;
use crate::types::SampleBuffer;

/// Audio decoder trait
///
/// Implementers turn a self-describing encoded byte stream (container header
/// plus sample payload) into a mono [`SampleBuffer`]. Multi-channel sources are
/// downmixed; samples are normalized to `[-1.0, 1.0]`.
pub trait AudioDecoder: Send + Sync {
    /// Decode an in-memory audio container
    ///
    /// # Errors
    /// Returns an error if the container is unrecognized, truncated, or uses a
    /// sample format the decoder cannot handle. No partial buffer is returned.
    fn decode(&self, bytes: &[u8]) -> Result<SampleBuffer>;
}
