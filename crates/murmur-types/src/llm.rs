//! Completion request/response types for Murmur.
//!
//! These types model the one exchange the client performs: a turn history
//! reduced to `{role, content}` pairs sent to an OpenAI-compatible
//! `chat/completions` endpoint, and the single candidate text that comes back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::turn::{Turn, TurnRole};

/// A message as sent to the completion service.
///
/// This is the reduced wire shape of a [`Turn`]: role and content only.
/// The turn id is display-only and never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: TurnRole,
    pub content: String,
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// Request to the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Response from the completion service for one exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Provider-assigned response id.
    pub id: String,
    /// Model that produced the completion.
    pub model: String,
    /// Text of the first candidate completion.
    pub content: String,
}

/// Errors from the completion service.
///
/// The session collapses all of these into one fallback turn; the taxonomy
/// exists for logging and for the CLI to explain credential problems.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
