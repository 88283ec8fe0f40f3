//! Terminal rendering module
//!
//! Table rows are printed verbatim so their column alignment survives; other
//! lines go through a termimad skin when color is enabled, which highlights
//! `inline code` such as card ids in status messages.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Render text to the terminal
    pub fn render(&self, text: &str) -> Result<()> {
        if self.rich_enabled {
            for line in text.lines() {
                if line.starts_with('|') {
                    println!("{line}");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{text}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
