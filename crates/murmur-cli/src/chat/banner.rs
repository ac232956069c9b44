//! Welcome banner display.
//!
//! Prints a styled banner when the chat starts, showing the model, endpoint,
//! and session identifier.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(model: &str, base_url: &str, session_id: &str) {
    println!();
    println!("  {}", style("Murmur").cyan().bold());
    println!("  {}", style("A quiet little chat client").dim());
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!("  {}  {}", style("API:").bold(), style(base_url).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
