//! Transcript fetching for ClipScout.
//!
//! The transcript source is an external collaborator: given a video
//! identifier it returns ordered timed segments, or fails with a distinct
//! "no captions" condition. This implementation shells out to yt-dlp for the
//! subtitle download and parses the resulting VTT locally.

pub mod vtt;

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use clipscout_models::TranscriptSegment;

/// Errors from the transcript source.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    /// The video has no captions, or the subtitle fetch failed. Surfaced to
    /// users distinctly from internal failures.
    #[error("could not fetch transcript: {0}")]
    Unavailable(String),

    /// The subtitle tool could not be run at all.
    #[error("transcript tool failed: {0}")]
    Tool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Fetches transcripts by downloading subtitles with yt-dlp.
pub struct YtDlpTranscriptSource {
    work_root: PathBuf,
}

impl Default for YtDlpTranscriptSource {
    fn default() -> Self {
        Self::new()
    }
}

impl YtDlpTranscriptSource {
    /// Create a source using a per-process directory under the system tmpdir.
    pub fn new() -> Self {
        Self {
            work_root: std::env::temp_dir().join("clipscout-transcripts"),
        }
    }

    /// Override the working directory root.
    pub fn with_work_root(mut self, work_root: impl Into<PathBuf>) -> Self {
        self.work_root = work_root.into();
        self
    }

    /// Fetch the timed transcript for a video identifier.
    pub async fn fetch(&self, video_id: &str) -> TranscriptResult<Vec<TranscriptSegment>> {
        let workdir = self.work_root.join(Uuid::new_v4().to_string());
        tokio::fs::create_dir_all(&workdir).await?;

        let result = self.fetch_into(video_id, &workdir).await;

        // Best-effort cleanup of the per-request directory
        if let Err(e) = tokio::fs::remove_dir_all(&workdir).await {
            warn!(path = ?workdir, error = %e, "failed to clean transcript workdir");
        }

        result
    }

    async fn fetch_into(
        &self,
        video_id: &str,
        workdir: &Path,
    ) -> TranscriptResult<Vec<TranscriptSegment>> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);
        info!(video_id, "fetching transcript via yt-dlp");

        let output_template = workdir.join("%(id)s");
        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--write-sub",
                "--write-auto-sub",
                "--sub-lang",
                "en,en-US,en-GB",
                "--sub-format",
                "vtt",
                "--skip-download",
                "--output",
            ])
            .arg(&output_template)
            .arg(&url)
            .output()
            .await
            .map_err(|e| TranscriptError::Tool(format!("failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptError::Unavailable(format!(
                "subtitle download failed: {}",
                stderr.trim()
            )));
        }

        let vtt_path = find_vtt_file(workdir)?;
        let content = tokio::fs::read_to_string(&vtt_path).await?;
        let segments = vtt::parse_vtt(&content);

        if segments.is_empty() {
            return Err(TranscriptError::Unavailable(
                "subtitle file contained no cues".to_string(),
            ));
        }

        info!(video_id, segments = segments.len(), "transcript fetched");
        Ok(segments)
    }
}

/// Find the downloaded VTT file, preferring English subtitles.
fn find_vtt_file(workdir: &Path) -> TranscriptResult<PathBuf> {
    let mut vtt_files: Vec<PathBuf> = std::fs::read_dir(workdir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("vtt"))
        .collect();

    if vtt_files.is_empty() {
        return Err(TranscriptError::Unavailable(
            "no subtitle file downloaded; the video may not have captions".to_string(),
        ));
    }

    vtt_files.sort_by_key(|path| {
        let name = path.file_name().map(|n| n.to_string_lossy().to_string());
        match name {
            Some(n) if n.contains(".en") => 0,
            _ => 1,
        }
    });

    Ok(vtt_files.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_vtt_prefers_english() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("abc.de.vtt"), "WEBVTT\n").unwrap();
        std::fs::write(dir.path().join("abc.en.vtt"), "WEBVTT\n").unwrap();

        let found = find_vtt_file(dir.path()).unwrap();
        assert!(found.to_string_lossy().contains(".en.vtt"));
    }

    #[test]
    fn test_find_vtt_missing_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_vtt_file(dir.path()).unwrap_err();
        assert!(matches!(err, TranscriptError::Unavailable(_)));
    }
}
