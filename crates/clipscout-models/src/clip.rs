//! Clip candidate and enhanced clip models.

use serde::{Deserialize, Serialize};

/// Maximum title length for a published clip.
pub const MAX_TITLE_CHARS: usize = 100;

/// Maximum description length for a published clip.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Maximum number of hashtags on a published clip.
pub const MAX_HASHTAGS: usize = 5;

/// A contiguous transcript window proposed as a short-form clip.
///
/// Candidates are ephemeral: created during one scan pass and discarded after
/// ranking, except for the retained top-K.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipCandidate {
    /// Clip start, seconds from the start of the video
    pub start_seconds: f64,

    /// Clip end, seconds from the start of the video
    pub end_seconds: f64,

    /// Space-joined text of the window's segments (original casing)
    pub transcript_text: String,

    /// Engaging-opening signal
    pub hook_score: u32,

    /// Emotional-language signal
    pub emotional_score: u32,

    /// Complete-thought signal
    pub clarity_score: u32,
}

impl ClipCandidate {
    /// Sum of all three signals, used for ranking and acceptance.
    pub fn total_score(&self) -> u32 {
        self.hook_score + self.emotional_score + self.clarity_score
    }

    /// Clip duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.end_seconds - self.start_seconds
    }
}

/// Generated title/description/hashtags for a candidate clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipCaptions {
    pub title: String,
    pub description: String,
    pub hashtags: Vec<String>,
}

impl ClipCaptions {
    /// Enforce the published-clip size limits.
    ///
    /// Remote providers are asked for bounded output but are not trusted to
    /// honor it; the local fallback is bounded by construction.
    pub fn clamped(mut self) -> Self {
        if self.title.chars().count() > MAX_TITLE_CHARS {
            self.title = self.title.chars().take(MAX_TITLE_CHARS).collect();
        }
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            self.description = self.description.chars().take(MAX_DESCRIPTION_CHARS).collect();
        }
        self.hashtags.truncate(MAX_HASHTAGS);
        self
    }
}

/// A ranked clip with generated metadata, ready for the downstream pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedClip {
    /// Generated title (at most 100 chars)
    pub title: String,

    /// Generated description (at most 500 chars)
    pub description: String,

    /// Generated hashtags (at most 5)
    pub hashtags: Vec<String>,

    /// Clip start, seconds
    pub start_seconds: f64,

    /// Clip end, seconds
    pub end_seconds: f64,

    /// Transcript text of the clip window
    pub transcript_text: String,

    /// Overall virality estimate in [0, 10]
    pub viral_score: u8,
}

impl EnhancedClip {
    /// Combine a scored candidate with its generated captions.
    pub fn from_candidate(candidate: ClipCandidate, captions: ClipCaptions) -> Self {
        let viral_score = viral_score(candidate.total_score());
        Self {
            title: captions.title,
            description: captions.description,
            hashtags: captions.hashtags,
            start_seconds: candidate.start_seconds,
            end_seconds: candidate.end_seconds,
            transcript_text: candidate.transcript_text,
            viral_score,
        }
    }
}

/// Saturating linear transform of the raw signal total: `min(10, round(total * 1.2))`.
pub fn viral_score(total: u32) -> u8 {
    let scaled = (total as f64 * 1.2).round() as u32;
    scaled.min(10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viral_score_monotonic_and_capped() {
        let mut prev = 0;
        for total in 0..30 {
            let score = viral_score(total);
            assert!(score >= prev, "viral_score must be non-decreasing");
            assert!(score <= 10, "viral_score must be capped at 10");
            prev = score;
        }
        assert_eq!(viral_score(0), 0);
        assert_eq!(viral_score(4), 5); // 4.8 rounds up
        assert_eq!(viral_score(5), 6);
        assert_eq!(viral_score(100), 10);
    }

    #[test]
    fn test_total_score() {
        let c = ClipCandidate {
            start_seconds: 0.0,
            end_seconds: 20.0,
            transcript_text: "text".to_string(),
            hook_score: 4,
            emotional_score: 2,
            clarity_score: 3,
        };
        assert_eq!(c.total_score(), 9);
        assert_eq!(c.duration_seconds(), 20.0);
    }

    #[test]
    fn test_captions_clamped() {
        let captions = ClipCaptions {
            title: "t".repeat(150),
            description: "d".repeat(600),
            hashtags: (0..8).map(|i| format!("#Tag{}", i)).collect(),
        }
        .clamped();

        assert_eq!(captions.title.chars().count(), MAX_TITLE_CHARS);
        assert_eq!(captions.description.chars().count(), MAX_DESCRIPTION_CHARS);
        assert_eq!(captions.hashtags.len(), MAX_HASHTAGS);
    }

    #[test]
    fn test_enhanced_clip_wire_format() {
        let clip = EnhancedClip {
            title: "Title".to_string(),
            description: "Desc".to_string(),
            hashtags: vec!["#Shorts".to_string()],
            start_seconds: 1.0,
            end_seconds: 21.0,
            transcript_text: "text".to_string(),
            viral_score: 7,
        };
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(json["startSeconds"], 1.0);
        assert_eq!(json["viralScore"], 7);
        assert_eq!(json["transcriptText"], "text");
    }
}
