//! Simulated export plan for the downstream clip pipeline.
//!
//! The actual download/encode/upload pipeline is an external collaborator and
//! is never executed here; the plan only carries the clip descriptor and the
//! suggested shell commands a pipeline worker would run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EnhancedClip;

/// YouTube category ID for "People & Blogs".
const DEFAULT_CATEGORY_ID: &str = "22";

/// Suggested commands for the (unimplemented) video pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCommands {
    /// yt-dlp invocation to fetch the clip's time range
    pub download: String,

    /// ffmpeg invocation to crop to 9:16 and burn in subtitles
    pub process: String,

    /// Human description of the burned subtitle style
    pub subtitle_style: String,
}

/// Metadata for publishing the rendered clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishMetadata {
    pub title: String,
    pub description: String,
    /// Hashtags with the `#` prefix stripped
    pub tags: Vec<String>,
    pub category_id: String,
    pub privacy_status: String,
}

/// Complete export plan handed to the downstream pipeline collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlan {
    pub video_id: String,
    pub clip: EnhancedClip,
    /// Ordered processing steps the pipeline is expected to perform
    pub steps: Vec<String>,
    pub commands: ExportCommands,
    pub publish_metadata: PublishMetadata,
    pub created_at: DateTime<Utc>,
}

impl ExportPlan {
    /// Build a plan for one clip of one source video.
    pub fn new(video_id: impl Into<String>, clip: EnhancedClip) -> Self {
        let video_id = video_id.into();
        let source_url = format!("https://www.youtube.com/watch?v={}", video_id);
        let created_at = Utc::now();

        let commands = ExportCommands {
            download: format!(
                "yt-dlp -f \"best[height<=1080]\" --download-sections \"*{}-{}\" -o \"clip_{}.mp4\" \"{}\"",
                clip.start_seconds,
                clip.end_seconds,
                created_at.timestamp_millis(),
                source_url
            ),
            process: "ffmpeg -i input.mp4 -vf \"crop=ih*9/16:ih,scale=1080:1920,subtitles=subtitles.srt:force_style='Alignment=2,FontSize=24,PrimaryColour=&H00FFFFFF,OutlineColour=&H00000000,Outline=2'\" -c:v libx264 -preset fast -crf 23 -c:a aac output.mp4".to_string(),
            subtitle_style: "Bold, white text with black outline, bottom-centered".to_string(),
        };

        let publish_metadata = PublishMetadata {
            title: clip.title.clone(),
            description: format!(
                "{}\n\n{}\n\nFull video: {}",
                clip.description,
                clip.hashtags.join(" "),
                source_url
            ),
            tags: clip
                .hashtags
                .iter()
                .map(|h| h.trim_start_matches('#').to_string())
                .collect(),
            category_id: DEFAULT_CATEGORY_ID.to_string(),
            privacy_status: "public".to_string(),
        };

        let steps = vec![
            "1. Download video segment using yt-dlp".to_string(),
            "2. Generate subtitle file (SRT) from transcript".to_string(),
            "3. Process video with FFmpeg to add subtitles and format for Shorts".to_string(),
            "4. Authenticate with YouTube OAuth2".to_string(),
            "5. Upload using YouTube Data API v3".to_string(),
        ];

        Self {
            video_id,
            clip,
            steps,
            commands,
            publish_metadata,
            created_at,
        }
    }
}
