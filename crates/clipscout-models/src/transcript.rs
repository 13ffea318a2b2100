//! Timed transcript segment model.

use serde::{Deserialize, Serialize};

/// A single timed caption line from the transcript source.
///
/// Segments arrive ordered by offset ascending; they are consumed as-is and
/// never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSegment {
    /// Caption text for this segment
    pub text: String,

    /// Offset from the start of the video, in milliseconds
    #[serde(rename = "offsetMillis")]
    pub offset_ms: u64,

    /// Duration of the segment, in milliseconds
    #[serde(rename = "durationMillis")]
    pub duration_ms: u64,
}

impl TranscriptSegment {
    /// Create a new segment.
    pub fn new(text: impl Into<String>, offset_ms: u64, duration_ms: u64) -> Self {
        Self {
            text: text.into(),
            offset_ms,
            duration_ms,
        }
    }

    /// Segment start in seconds.
    pub fn start_seconds(&self) -> f64 {
        self.offset_ms as f64 / 1000.0
    }

    /// Segment end in seconds.
    pub fn end_seconds(&self) -> f64 {
        (self.offset_ms + self.duration_ms) as f64 / 1000.0
    }
}
