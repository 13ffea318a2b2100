//! Health check handlers.

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub ytdlp: String,
}

/// Readiness check endpoint. The transcript source needs yt-dlp on PATH.
pub async fn ready() -> (StatusCode, Json<ReadinessResponse>) {
    let ytdlp_ok = which::which("yt-dlp").is_ok();

    let status = if ytdlp_ok { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    let response = ReadinessResponse {
        status: if ytdlp_ok { "ready" } else { "not_ready" }.to_string(),
        checks: ReadinessChecks {
            ytdlp: if ytdlp_ok { "ok" } else { "missing" }.to_string(),
        },
    };

    (status, Json(response))
}
