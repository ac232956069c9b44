//! `chat/completions` wire types.
//!
//! These are the HTTP request/response structures for OpenAI-compatible
//! endpoints. They are NOT the generic completion types from murmur-types --
//! those are provider-agnostic; these match the wire byte-for-byte.

use serde::{Deserialize, Serialize};

/// Request body for a `chat/completions` call.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionsRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// A single message on the wire: role and content only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Response body for a `chat/completions` call.
///
/// Fields the client does not consume (usage, fingerprints, logprobs) are
/// intentionally absent; serde ignores unknown fields by default.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionsResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

/// The message inside a candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}
