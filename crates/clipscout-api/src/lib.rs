//! Axum HTTP API server.
//!
//! Thin plumbing around the analysis engine:
//! - `POST /api/analyze`: URL to ranked, captioned clip candidates
//! - `POST /api/export`: clip descriptor to a simulated pipeline plan
//! - Health/readiness probes and Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
