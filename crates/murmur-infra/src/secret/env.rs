//! Environment variable credential resolution.
//!
//! Read-only: users set the variable via shell config; the client only
//! reads it. The value is wrapped in [`SecretString`] immediately so it
//! never appears in Debug output or tracing logs.

use secrecy::SecretString;

use murmur_types::config::ConfigError;

/// Default environment variable holding the API credential.
pub const API_KEY_VAR: &str = "MURMUR_API_KEY";

/// Resolve the API credential from the named environment variable.
///
/// An unset variable, an empty value, or a non-Unicode value all count as
/// missing: there is no fallback source.
pub fn api_key_from_env(var: &str) -> Result<SecretString, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(SecretString::from(value)),
        _ => Err(ConfigError::MissingCredential(var.to_string())),
    }
}
