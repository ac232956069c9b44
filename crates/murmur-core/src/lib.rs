//! Conversation logic for Murmur.
//!
//! This crate defines the `CompletionClient` port that the infrastructure
//! layer implements, and the `ConversationSession` that drives one
//! user/assistant exchange at a time. It depends only on `murmur-types` --
//! never on `murmur-infra` or any HTTP crate.

pub mod chat;
pub mod llm;
