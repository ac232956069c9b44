//! Infrastructure layer for Murmur.
//!
//! Contains implementations of the ports defined in `murmur-core`: the
//! HTTP completion client for OpenAI-compatible endpoints, and environment
//! variable credential resolution.

pub mod llm;
pub mod secret;
