//! Completion service abstraction.
//!
//! - `client`: the `CompletionClient` trait implemented in `murmur-infra`

pub mod client;
