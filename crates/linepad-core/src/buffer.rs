/// Text buffer wrapping `ropey::Rope`, addressed by char offsets.
use std::fmt;

use anyhow::Result;
use ropey::Rope;

/// A text buffer backed by a rope.
///
/// Only `\n` breaks lines; a lone `\r` or a Unicode separator is ordinary
/// content. A line owns its trailing `\n`, text ending in `\n` has a final
/// empty line, and an empty buffer has one empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    rope: Rope,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

impl TextBuffer {
    /// Creates an empty text buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Returns the total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer. Never zero.
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the text of a line (0-indexed), including any trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line(&self, line_idx: usize) -> Result<ropey::RopeSlice<'_>> {
        self.check_line(line_idx)?;
        Ok(self.rope.line(line_idx))
    }

    /// Returns the char offset of the start of a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line index is out of bounds.
    pub fn line_to_char(&self, line_idx: usize) -> Result<usize> {
        self.check_line(line_idx)?;
        Ok(self.rope.line_to_char(line_idx))
    }

    /// Returns the line containing a char offset. `len_chars()` itself is
    /// accepted and maps to the last line.
    ///
    /// # Errors
    ///
    /// Returns an error if the char index is past the end of the buffer.
    pub fn char_to_line(&self, char_idx: usize) -> Result<usize> {
        if char_idx > self.rope.len_chars() {
            anyhow::bail!(
                "char index {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        Ok(self.rope.char_to_line(char_idx))
    }

    /// Inserts text at the given char index.
    ///
    /// # Errors
    ///
    /// Returns an error if the char index is out of bounds.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> Result<()> {
        if char_idx > self.rope.len_chars() {
            anyhow::bail!(
                "insert position {} out of bounds (buffer has {} chars)",
                char_idx,
                self.rope.len_chars()
            );
        }
        self.rope.insert(char_idx, text);
        Ok(())
    }

    /// Removes the character range [start..end) from the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds.
    pub fn remove(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        self.rope.remove(start..end);
        Ok(())
    }

    /// Returns a slice of text in the given char range.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Result<ropey::RopeSlice<'_>> {
        self.check_range(start, end)?;
        Ok(self.rope.slice(start..end))
    }

    fn check_line(&self, line_idx: usize) -> Result<()> {
        if line_idx >= self.rope.len_lines() {
            anyhow::bail!(
                "line index {} out of bounds (buffer has {} lines)",
                line_idx,
                self.rope.len_lines()
            );
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            anyhow::bail!("invalid range: start ({}) > end ({})", start, end);
        }
        if end > self.rope.len_chars() {
            anyhow::bail!(
                "range end {} out of bounds (buffer has {} chars)",
                end,
                self.rope.len_chars()
            );
        }
        Ok(())
    }
}
