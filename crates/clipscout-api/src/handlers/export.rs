//! Export endpoint: builds the simulated downstream-pipeline plan.
//!
//! No video is downloaded, encoded, or uploaded here; the response carries
//! the clip descriptor plus the commands a pipeline worker would run.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use clipscout_models::{extract_video_id, EnhancedClip, ExportPlan};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Setup documentation returned when upload credentials are missing.
const SETUP_GUIDE_URL: &str = "https://developers.google.com/youtube/v3/getting-started";

/// Request to export a clip.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Source video URL or bare identifier
    #[serde(alias = "videoUrl")]
    pub url: String,
    /// The clip to export, as returned by the analyze endpoint
    pub clip: EnhancedClip,
}

/// Export plan plus credential status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub status: String,
    pub message: String,
    pub credentials_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_guide: Option<String>,
    #[serde(flatten)]
    pub plan: ExportPlan,
}

/// Build an export plan for one clip.
pub async fn export_clip(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<Json<ExportResponse>> {
    let video_id = extract_video_id(&request.url).map_err(|e| {
        warn!(url = %request.url, error = %e, "rejected export request");
        ApiError::invalid_input("Invalid YouTube URL")
    })?;

    let plan = ExportPlan::new(&video_id, request.clip);
    let credentials_configured = state.config.upload_credentials_configured();

    let (message, setup_guide) = if credentials_configured {
        (
            "Export plan ready. Hand it to the clip pipeline to render and publish.".to_string(),
            None,
        )
    } else {
        (
            "YouTube API credentials not configured. Set up OAuth2 credentials to enable automatic uploads.".to_string(),
            Some(SETUP_GUIDE_URL.to_string()),
        )
    };

    metrics::record_export_plan();
    info!(%video_id, "export plan built");

    Ok(Json(ExportResponse {
        status: "ready".to_string(),
        message,
        credentials_configured,
        setup_guide,
        plan,
    }))
}
