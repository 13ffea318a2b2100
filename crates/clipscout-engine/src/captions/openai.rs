//! OpenAI chat-completion client for caption generation.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use clipscout_models::ClipCaptions;

use super::{build_caption_prompt, extract::parse_captions, ProviderError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const MODEL: &str = "gpt-3.5-turbo";

/// Client for the OpenAI chat completions endpoint.
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAiClient {
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
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_caption_prompt(transcript),
            }],
            temperature: 0.8,
            max_tokens: 300,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .ok_or(ProviderError::EmptyCompletion)?;

        parse_captions(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chat_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn test_parses_prose_wrapped_json() {
        let server = MockServer::start().await;
        let content = r##"Here it is:
{"title": "The big moment", "description": "Watch this", "hashtags": ["#A", "#B", "#C", "#D", "#E"]}"##;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(content)))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", Client::new()).with_base_url(server.uri());
        let captions = client.generate_captions("some transcript").await.unwrap();
        assert_eq!(captions.title, "The big moment");
        assert_eq!(captions.hashtags.len(), 5);
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", Client::new()).with_base_url(server.uri());
        let err = client.generate_captions("some transcript").await.unwrap_err();
        assert!(matches!(err, ProviderError::Status { .. }));
    }

    #[tokio::test]
    async fn test_completion_without_json_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("no json at all")))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("test-key", Client::new()).with_base_url(server.uri());
        let err = client.generate_captions("some transcript").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingJson));
    }
}
