//! Two-tier caption synthesis with a guaranteed local fallback.
//!
//! Providers are tried in a fixed priority order; the first one to return a
//! parseable result wins. Remote failures of any kind are logged and absorbed
//! here, never surfaced to the caller: synthesis always returns a value.

mod extract;
pub mod fallback;
mod gemini;
mod openai;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use clipscout_models::ClipCaptions;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// Errors a single remote provider attempt can produce. Internal only;
/// every variant falls through to the next tier.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no completion text")]
    EmptyCompletion,

    #[error("no JSON object found in completion")]
    MissingJson,

    #[error("failed to parse captions JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Credentials and timeouts for the synthesizer. Credentials are explicit
/// configuration rather than ambient environment reads so the component stays
/// testable.
#[derive(Debug, Clone, Default)]
pub struct SynthesizerConfig {
    /// OpenAI credential (provider A, preferred)
    pub openai_api_key: Option<String>,
    /// Gemini credential (provider B)
    pub gemini_api_key: Option<String>,
    /// Per-request timeout for remote calls; `None` uses the default (20 s)
    pub request_timeout: Option<Duration>,
}

/// Default bound on remote caption calls; nothing upstream specifies one and
/// an unbounded stall would hold the whole analysis.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// A configured remote provider, in priority order.
enum RemoteProvider {
    OpenAi(OpenAiClient),
    Gemini(GeminiClient),
}

impl RemoteProvider {
    fn name(&self) -> &'static str {
        match self {
            RemoteProvider::OpenAi(_) => "openai",
            RemoteProvider::Gemini(_) => "gemini",
        }
    }

    async fn attempt(&self, transcript: &str) -> Result<ClipCaptions, ProviderError> {
        match self {
            RemoteProvider::OpenAi(client) => client.generate_captions(transcript).await,
            RemoteProvider::Gemini(client) => client.generate_captions(transcript).await,
        }
    }
}

/// Generates title/description/hashtags for a clip transcript.
pub struct CaptionSynthesizer {
    providers: Vec<RemoteProvider>,
}

impl CaptionSynthesizer {
    /// Build the provider chain from configuration. Providers without a
    /// credential are simply absent from the chain.
    pub fn new(config: SynthesizerConfig) -> Self {
        let timeout = config.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        // Builder only fails if the TLS backend cannot initialize; there is
        // no runtime input to recover from
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        let mut providers = Vec::new();
        if let Some(key) = config.openai_api_key {
            providers.push(RemoteProvider::OpenAi(OpenAiClient::new(key, client.clone())));
        }
        if let Some(key) = config.gemini_api_key {
            providers.push(RemoteProvider::Gemini(GeminiClient::new(key, client.clone())));
        }

        Self { providers }
    }

    /// Number of configured remote providers.
    pub fn remote_provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Generate captions for a transcript. Infallible: remote tiers are tried
    /// in order, then the local fallback.
    pub async fn synthesize(&self, transcript: &str) -> ClipCaptions {
        for provider in &self.providers {
            match provider.attempt(transcript).await {
                Ok(captions) => {
                    debug!(provider = provider.name(), "remote caption synthesis succeeded");
                    return captions.clamped();
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "caption provider failed, falling through"
                    );
                }
            }
        }

        fallback::local_captions(transcript)
    }
}

/// The fixed instruction sent to every remote provider.
fn build_caption_prompt(transcript: &str) -> String {
    format!(
        r#"Create a viral YouTube Shorts title, description, and hashtags for this clip:

"{transcript}"

Return ONLY a JSON object with this format:
{{
  "title": "engaging title under 100 chars",
  "description": "compelling description under 500 chars",
  "hashtags": ["hashtag1", "hashtag2", "hashtag3", "hashtag4", "hashtag5"]
}}

Make it attention-grabbing and optimized for virality."#
    )
}
