//! CompletionClient trait definition.
//!
//! This is the port the session talks to. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition); implementations live in `murmur-infra`
//! (e.g., `OpenAiCompatClient`), and tests substitute in-memory mocks.

use murmur_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion service backends.
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name (e.g., "openai-compat").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// One call per exchange; the caller suspends until the response or a
    /// failure arrives. Cancellation and retry are out of scope here.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
