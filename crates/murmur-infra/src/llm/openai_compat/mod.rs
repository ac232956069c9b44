//! OpenAI-compatible completion client implementation.
//!
//! This module provides the [`OpenAiCompatClient`] which implements the
//! [`CompletionClient`](murmur_core::llm::client::CompletionClient) trait
//! for any endpoint speaking the `chat/completions` wire format (Groq,
//! OpenAI, Mistral, and friends -- one codebase via a configurable base URL).

pub mod client;
pub mod types;

pub use client::OpenAiCompatClient;
