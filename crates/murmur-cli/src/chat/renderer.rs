//! Terminal markdown rendering for assistant turns.
//!
//! Assistant replies are markdown-ish text; `termimad` turns them into
//! styled terminal output. Fallback turns render exactly like real answers.

use termimad::MadSkin;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Render a complete assistant reply as formatted markdown.
    pub fn render_final(&self, markdown: &str) -> String {
        format!("{}", self.skin.term_text(markdown))
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}
