//! Shared data models for the ClipScout backend.
//!
//! This crate provides Serde-serializable types for:
//! - Timed transcript segments
//! - Clip candidates and enhanced (captioned) clips
//! - Simulated export/publish plans
//! - YouTube video identifier parsing

pub mod clip;
pub mod export;
pub mod transcript;
pub mod utils;

// Re-export common types
pub use clip::{viral_score, ClipCandidate, ClipCaptions, EnhancedClip, MAX_DESCRIPTION_CHARS, MAX_HASHTAGS, MAX_TITLE_CHARS};
pub use export::{ExportCommands, ExportPlan, PublishMetadata};
pub use transcript::TranscriptSegment;
pub use utils::{extract_video_id, VideoIdError, VideoIdResult};
