//! Murmur terminal chat entry point.
//!
//! Binary name: `murmur`
//!
//! Parses CLI arguments, initializes tracing, resolves the API credential
//! from the environment, then hands off to the interactive chat loop.

mod chat;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use murmur_infra::llm::OpenAiCompatClient;
use murmur_infra::secret::env::{API_KEY_VAR, api_key_from_env};
use murmur_types::config::{
    CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Minimal terminal chat client for OpenAI-compatible completion endpoints.
#[derive(Debug, Parser)]
#[command(name = "murmur", version, about)]
struct Cli {
    /// Model identifier sent with every request.
    #[arg(long, env = "MURMUR_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature.
    #[arg(long, env = "MURMUR_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Maximum tokens the service may generate per completion.
    #[arg(long, env = "MURMUR_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "MURMUR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Environment variable holding the API credential.
    #[arg(long, default_value = API_KEY_VAR)]
    api_key_var: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,murmur=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let api_key = api_key_from_env(&cli.api_key_var)?;

    let config = CompletionConfig {
        base_url: cli.base_url,
        model: cli.model,
        temperature: cli.temperature,
        max_tokens: cli.max_tokens,
    };

    let client = OpenAiCompatClient::new(api_key, config.base_url.clone());

    chat::loop_runner::run_chat_loop(&client, config).await
}
