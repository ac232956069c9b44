//! Completion client implementations.
//!
//! Contains the concrete implementation of the
//! [`CompletionClient`](murmur_core::llm::client::CompletionClient) trait
//! for OpenAI-compatible `chat/completions` endpoints.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatClient;
