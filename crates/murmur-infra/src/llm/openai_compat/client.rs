//! OpenAiCompatClient -- concrete [`CompletionClient`] implementation for
//! OpenAI-compatible `chat/completions` endpoints.
//!
//! Sends one POST per exchange with a bearer credential header. The API key
//! is wrapped in [`secrecy::SecretString`] and is never logged or included
//! in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use murmur_core::llm::client::CompletionClient;
use murmur_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{ChatCompletionsRequest, ChatCompletionsResponse, WireMessage};

/// OpenAI-compatible completion client.
///
/// # API Key Security
///
/// Does NOT derive Debug: the API key is stored as a [`SecretString`] and is
/// only exposed when constructing the Authorization header.
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiCompatClient {
    /// Create a new client for the given base URL.
    ///
    /// `base_url` is the API root (e.g., `https://api.groq.com/openai/v1`);
    /// the `/chat/completions` path is appended per request.
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Convert a generic [`CompletionRequest`] into the wire request.
    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionsRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| WireMessage {
                role: m.role.to_string(),
                content: m.content.clone(),
            })
            .collect();

        ChatCompletionsRequest {
            model: request.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

impl CompletionClient for OpenAiCompatClient {
    fn name(&self) -> &str {
        "openai-compat"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);
        let url = self.url("/chat/completions");

        debug!(model = %body.model, messages = body.messages.len(), "POST chat/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                code => LlmError::Status {
                    status: code,
                    body: error_body,
                },
            });
        }

        let wire_resp: ChatCompletionsResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(format!("failed to parse response: {e}")))?;

        extract_completion(wire_resp)
    }
}

/// Pull the first candidate's text out of a parsed response.
///
/// A body without `choices[0].message.content` is treated as malformed,
/// matching the contract that any deviation is a failure.
fn extract_completion(response: ChatCompletionsResponse) -> Result<CompletionResponse, LlmError> {
    let content = response
        .choices
        .first()
        .ok_or_else(|| LlmError::MalformedResponse("response has no choices".to_string()))?
        .message
        .as_ref()
        .ok_or_else(|| LlmError::MalformedResponse("first choice has no message".to_string()))?
        .content
        .clone()
        .ok_or_else(|| LlmError::MalformedResponse("message has no content".to_string()))?;

    Ok(CompletionResponse {
        id: response.id,
        model: response.model,
        content,
    })
}
