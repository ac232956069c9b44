//! Credential resolution.
//!
//! The API credential is never a source literal; it is resolved at startup
//! from the environment (see `env`).

pub mod env;
