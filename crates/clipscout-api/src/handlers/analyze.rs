//! Analysis endpoint: video URL in, ranked captioned clips out.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use clipscout_models::{extract_video_id, EnhancedClip};
use clipscout_transcript::TranscriptError;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Request to analyze a video.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// YouTube URL or bare video identifier
    #[serde(alias = "videoUrl")]
    pub url: String,
}

/// Ranked clips for the analyzed video.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub clips: Vec<EnhancedClip>,
}

/// Fixed user-facing message for missing captions.
const TRANSCRIPT_UNAVAILABLE_MESSAGE: &str =
    "Could not fetch transcript. Make sure the video has captions enabled.";

/// Analyze a video's transcript for short-form clip candidates.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let video_id = extract_video_id(&request.url)
        .map_err(|e| {
            warn!(url = %request.url, error = %e, "rejected analyze request");
            ApiError::invalid_input("Invalid YouTube URL")
        })?;

    let segments = state
        .transcripts
        .fetch(&video_id)
        .await
        .map_err(|e| transcript_error_to_api(&video_id, e))?;

    let clips = state.analyzer.analyze(&segments).await;
    metrics::record_analysis(clips.len());

    info!(%video_id, clips = clips.len(), "analysis request complete");
    Ok(Json(AnalyzeResponse { clips }))
}

/// Map a transcript failure onto the API error taxonomy: missing captions is
/// a user error with a fixed message, everything else is internal.
fn transcript_error_to_api(video_id: &str, e: TranscriptError) -> ApiError {
    match e {
        TranscriptError::Unavailable(detail) => {
            warn!(%video_id, %detail, "transcript unavailable");
            metrics::record_transcript_failure();
            ApiError::TranscriptUnavailable(TRANSCRIPT_UNAVAILABLE_MESSAGE.to_string())
        }
        other => ApiError::internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_captions_maps_to_user_error() {
        let err = transcript_error_to_api(
            "dQw4w9WgXcQ",
            TranscriptError::Unavailable("no subtitle file downloaded".to_string()),
        );
        match err {
            ApiError::TranscriptUnavailable(message) => {
                assert_eq!(message, TRANSCRIPT_UNAVAILABLE_MESSAGE);
            }
            other => panic!("expected TranscriptUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_tool_failure_maps_to_internal() {
        let err = transcript_error_to_api(
            "dQw4w9WgXcQ",
            TranscriptError::Tool("failed to run yt-dlp".to_string()),
        );
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
