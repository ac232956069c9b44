//! Conversation session management.
//!
//! Entry point: `session::ConversationSession`.

pub mod session;
