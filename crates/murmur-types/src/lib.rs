//! Shared domain types for Murmur.
//!
//! This crate contains the domain types used across the Murmur chat client:
//! conversation turns, completion request/response shapes, and configuration.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod llm;
pub mod turn;
