/// Millisecond intervals reported by silence analysis
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `[start_ms, end_ms]` span of audio
///
/// Invariant: `start_ms <= end_ms`. Lists produced by the detector are sorted
/// and non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl Interval {
    /// Create a new interval
    pub fn new(start_ms: u64, end_ms: u64) -> Self {
        debug_assert!(start_ms <= end_ms, "interval start after end");
        Self { start_ms, end_ms }
    }

    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    pub fn is_empty(&self) -> bool {
        self.start_ms == self.end_ms
    }

    /// The `[start, end]` pair form used on the wire
    pub fn as_pair(&self) -> [u64; 2] {
        [self.start_ms, self.end_ms]
    }
}

impl From<[u64; 2]> for Interval {
    fn from([start_ms, end_ms]: [u64; 2]) -> Self {
        Self::new(start_ms, end_ms)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start_ms, self.end_ms)
    }
}
