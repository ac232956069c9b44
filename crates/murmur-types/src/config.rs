//! Completion configuration for Murmur.
//!
//! Model name, sampling temperature, and token budget are configuration with
//! documented defaults, passed into the session at construction. The API
//! credential is resolved separately (see `murmur-infra`) and never lives in
//! this struct.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default OpenAI-compatible base URL (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default max-token budget per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Tunables for the completion exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API (`{base_url}/chat/completions`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens the service may generate per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Errors raised while assembling configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credential: set the {0} environment variable")]
    MissingCredential(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CompletionConfig::default();
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "mixtral-8x7b-32768");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 1000);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: CompletionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn test_deserialize_overrides() {
        let config: CompletionConfig = serde_json::from_str(
            r#"{"model": "llama-3.3-70b-versatile", "max_tokens": 2048}"#,
        )
        .unwrap();
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingCredential("MURMUR_API_KEY".to_string());
        assert!(err.to_string().contains("MURMUR_API_KEY"));
    }
}
