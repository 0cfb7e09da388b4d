//! Terminal renderer using crossterm
//!
//! Owns the terminal for the lifetime of the form and redraws the view.

use std::io::{self, Write};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    style::{Attribute, ResetColor, SetAttribute},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use tracing::debug;
use unicode_width::UnicodeWidthChar;

/// Terminal renderer
pub struct Renderer {
    /// Whether the terminal has been initialized
    initialized: bool,
    /// Current terminal size
    size: (u16, u16),
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            initialized: false,
            size: (0, 0),
        }
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        // Raw mode is on; from here cleanup must undo it
        self.initialized = true;

        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableBracketedPaste,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        stdout.flush()?;

        self.size = Self::size()?;
        debug!("Renderer initialized at {}x{}", self.size.0, self.size.1);
        Ok(())
    }

    /// Cleanup the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        let mut stdout = io::stdout();

        let _ = execute!(stdout, ResetColor, SetAttribute(Attribute::Reset));
        let _ = execute!(stdout, Show);
        let _ = execute!(stdout, EnableLineWrap);
        let _ = execute!(stdout, DisableBracketedPaste);
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();

        // Disable raw mode - this is the most important part
        terminal::disable_raw_mode()?;

        // Print a newline to ensure we're on a fresh line
        println!();

        Ok(())
    }

    /// Record a new terminal size; the next render uses it
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    /// Draw the view from the top-left corner
    pub fn render(&mut self, view: &str) -> io::Result<()> {
        let (cols, rows) = self.size;

        let stdout = io::stdout();
        let mut stdout = io::BufWriter::with_capacity(4096, stdout.lock());

        // Begin synchronized update (reduces flicker)
        write!(stdout, "\x1b[?2026h")?;

        for (row_idx, line) in view.lines().enumerate() {
            if rows != 0 && row_idx >= rows as usize {
                break;
            }
            execute!(stdout, MoveTo(0, row_idx as u16), Clear(ClearType::CurrentLine))?;
            write!(stdout, "{}", clip_to_width(line, cols as usize))?;
        }
        execute!(stdout, Clear(ClearType::FromCursorDown))?;

        // End synchronized update
        write!(stdout, "\x1b[?2026l")?;

        stdout.flush()
    }

    /// Get terminal size
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Longest prefix of `line` that fits in `max_cols` display columns.
/// A width of 0 means unknown and leaves the line untouched.
pub fn clip_to_width(line: &str, max_cols: usize) -> &str {
    if max_cols == 0 {
        return line;
    }

    let mut used = 0;
    for (idx, ch) in line.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_cols {
            return &line[..idx];
        }
        used += w;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_line() {
        assert_eq!(clip_to_width("Email: a@b.c_", 80), "Email: a@b.c_");
    }

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip_to_width("First Name: Ali_", 10), "First Name");
    }

    #[test]
    fn test_clip_wide_chars() {
        // Each CJK char takes two columns
        assert_eq!(clip_to_width("日本語", 4), "日本");
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("a日本", 2), "a");
    }

    #[test]
    fn test_clip_unknown_width() {
        assert_eq!(clip_to_width("anything", 0), "anything");
    }

    #[test]
    fn test_new_renderer_cleanup_is_noop() {
        let mut renderer = Renderer::new();
        assert!(renderer.cleanup().is_ok());
    }
}
