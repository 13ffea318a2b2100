//! Gemini generateContent client for caption generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use clipscout_models::ClipCaptions;

use super::{build_caption_prompt, extract::parse_captions, ProviderError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-pro";

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    /// Create a new client with the given credential.
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Override the API base URL (used by tests against a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request captions for a transcript.
    pub async fn generate_captions(&self, transcript: &str) -> Result<ClipCaptions, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_caption_prompt(transcript),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let gemini_response: GeminiResponse = response.json().await?;
        let content = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim())
            .ok_or(ProviderError::EmptyCompletion)?;

        parse_captions(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gemini_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
    }

    #[tokio::test]
    async fn test_parses_fenced_json() {
        let server = MockServer::start().await;
        let text = "```json\n{\"title\": \"t\", \"description\": \"d\", \"hashtags\": [\"#A\"]}\n```";

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(text)))
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key", Client::new()).with_base_url(server.uri());
        let captions = client.generate_captions("some transcript").await.unwrap();
        assert_eq!(captions.title, "t");
    }

    #[tokio::test]
    async fn test_empty_candidates_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new("test-key", Client::new()).with_base_url(server.uri());
        let err = client.generate_captions("some transcript").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyCompletion));
    }
}
