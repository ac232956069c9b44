//! Main chat loop orchestration.
//!
//! Reads lines, runs slash commands, and drives the conversation session:
//! one `send_turn` per submitted line, with a thinking spinner while the
//! exchange is in flight. Further input is not read until the exchange
//! concludes, so submissions cannot overlap.

use console::style;
use tracing::info;

use murmur_core::chat::session::{ConversationSession, TurnOutcome};
use murmur_core::llm::client::CompletionClient;
use murmur_types::config::CompletionConfig;
use murmur_types::turn::TurnRole;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop until EOF or `/exit`.
pub async fn run_chat_loop<C: CompletionClient>(
    client: &C,
    config: CompletionConfig,
) -> anyhow::Result<()> {
    let mut session = ConversationSession::new(config.clone());
    let renderer = ChatRenderer::new();

    print_welcome_banner(
        &config.model,
        &config.base_url,
        &session.id().to_string(),
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::New => {
                            session = ConversationSession::new(config.clone());
                            info!(session_id = %session.id(), "Started new session");
                            println!(
                                "\n  {}\n",
                                style("Started a new session. History cleared.").dim()
                            );
                        }
                        ChatCommand::History => print_history(&session),
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                // Thinking spinner for the in-flight window
                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message("thinking...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let outcome = session.send_turn(client, &text).await;
                spinner.finish_and_clear();

                match outcome {
                    TurnOutcome::Ignored => continue,
                    // Fallback turns print exactly like real answers; the
                    // session already logged what went wrong.
                    TurnOutcome::Answered | TurnOutcome::Fallback => {
                        if let Some(turn) = session.last_turn() {
                            println!(
                                "\n  {} {}",
                                style("Murmur >").cyan().bold(),
                                renderer.render_final(&turn.content).trim()
                            );
                            println!();
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print the session's turn history, oldest first.
fn print_history(session: &ConversationSession) {
    println!();
    if session.turns().is_empty() {
        println!("  {}", style("No turns yet.").dim());
    }
    for turn in session.turns() {
        let role_label = match turn.role {
            TurnRole::User => style("You").green().bold(),
            TurnRole::Assistant => style("Murmur").cyan().bold(),
        };
        println!("  {} {}", role_label, preview(&turn.content, 100));
    }
    println!();
}

/// Truncate long content to a one-line preview (char-safe).
fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let cut: String = content.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_content_unchanged() {
        assert_eq!(preview("hello", 100), "hello");
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "x".repeat(150);
        let p = preview(&long, 100);
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), 100);
    }

    #[test]
    fn test_preview_is_char_safe() {
        let long = "é".repeat(150);
        let p = preview(&long, 100);
        assert!(p.ends_with("..."));
    }
}
