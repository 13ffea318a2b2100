//! API configuration.

use std::time::Duration;

use clipscout_engine::SynthesizerConfig;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Request timeout
    pub request_timeout: Duration,
    /// Max request body size
    pub max_body_size: usize,
    /// Environment (development/production)
    pub environment: String,
    /// OpenAI credential for caption synthesis (provider A)
    pub openai_api_key: Option<String>,
    /// Gemini credential for caption synthesis (provider B)
    pub gemini_api_key: Option<String>,
    /// YouTube OAuth2 client ID for the (simulated) upload pipeline
    pub upload_client_id: Option<String>,
    /// YouTube OAuth2 client secret for the (simulated) upload pipeline
    pub upload_client_secret: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            max_body_size: 1024 * 1024, // 1MB, requests carry only URLs and clip metadata
            environment: "development".to_string(),
            openai_api_key: None,
            gemini_api_key: None,
            upload_client_id: None,
            upload_client_secret: None,
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_body_size: std::env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            upload_client_id: non_empty_env("GOOGLE_CLIENT_ID"),
            upload_client_secret: non_empty_env("GOOGLE_CLIENT_SECRET"),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }

    /// Caption synthesizer configuration derived from the credentials.
    pub fn synthesizer_config(&self) -> SynthesizerConfig {
        SynthesizerConfig {
            openai_api_key: self.openai_api_key.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
            request_timeout: None,
        }
    }

    /// Whether the OAuth2 pair for the upload pipeline is configured.
    pub fn upload_credentials_configured(&self) -> bool {
        self.upload_client_id.is_some() && self.upload_client_secret.is_some()
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
