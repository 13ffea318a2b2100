//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    pub const HTTP_REQUESTS_TOTAL: &str = "clipscout_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "clipscout_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "clipscout_http_requests_in_flight";

    pub const ANALYSES_TOTAL: &str = "clipscout_analyses_total";
    pub const CLIPS_FOUND_TOTAL: &str = "clipscout_clips_found_total";
    pub const TRANSCRIPT_FAILURES_TOTAL: &str = "clipscout_transcript_failures_total";
    pub const EXPORT_PLANS_TOTAL: &str = "clipscout_export_plans_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a completed analysis and how many clips it produced.
pub fn record_analysis(clip_count: usize) {
    counter!(names::ANALYSES_TOTAL).increment(1);
    counter!(names::CLIPS_FOUND_TOTAL).increment(clip_count as u64);
}

/// Record a transcript fetch failure.
pub fn record_transcript_failure() {
    counter!(names::TRANSCRIPT_FAILURES_TOTAL).increment(1);
}

/// Record an export plan being handed out.
pub fn record_export_plan() {
    counter!(names::EXPORT_PLANS_TOTAL).increment(1);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);
    let response = next.run(request).await;
    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    record_http_request(&method, &path, status, start.elapsed().as_secs_f64());

    response
}
