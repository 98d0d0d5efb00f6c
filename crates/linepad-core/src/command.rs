/// Indent and unindent commands over a set of regions.
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use linepad_config::Settings;

use crate::buffer::TextBuffer;
use crate::line_set::collect_lines;
use crate::mutator::{apply_edits, ApplyOrder};
use crate::region::Region;
use crate::whitespace::ShiftMode;

/// Text commands this crate knows how to run, by dispatch name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    Indent,
    Unindent,
}

impl TextCommand {
    pub const ALL: [TextCommand; 2] = [TextCommand::Indent, TextCommand::Unindent];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Indent => "indent",
            Self::Unindent => "unindent",
        }
    }

    fn mode(&self) -> ShiftMode {
        match self {
            Self::Indent => ShiftMode::Indent,
            Self::Unindent => ShiftMode::Unindent,
        }
    }
}

impl fmt::Display for TextCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown text command {s:?} (expected indent or unindent)"))
    }
}

/// Runs `command` over every line touched by `regions` and returns the
/// number of lines changed.
///
/// Settings are resolved once here; nothing below sees unset values.
///
/// # Errors
///
/// Returns an error if a region reaches past the end of the buffer. The
/// buffer is left untouched in that case.
pub fn run_text_command(
    buffer: &mut TextBuffer,
    command: TextCommand,
    regions: &[Region],
    settings: &Settings,
) -> Result<usize> {
    run_text_command_with_order(buffer, command, regions, settings, ApplyOrder::default())
}

/// Like [`run_text_command`] with an explicit edit ordering.
///
/// # Errors
///
/// Returns an error if a region reaches past the end of the buffer.
pub fn run_text_command_with_order(
    buffer: &mut TextBuffer,
    command: TextCommand,
    regions: &[Region],
    settings: &Settings,
    order: ApplyOrder,
) -> Result<usize> {
    let resolved = settings.resolve();
    let lines = collect_lines(buffer, regions)?;
    tracing::debug!(
        %command,
        regions = regions.len(),
        lines = lines.len(),
        tab_size = resolved.tab_size,
        translate_tabs_to_spaces = resolved.translate_tabs_to_spaces,
        "running text command"
    );
    apply_edits(buffer, &lines, command.mode(), &resolved, order)
}

/// Inserts one indent unit at the start of every touched line.
///
/// # Errors
///
/// Returns an error if a region reaches past the end of the buffer.
pub fn indent(buffer: &mut TextBuffer, regions: &[Region], settings: &Settings) -> Result<usize> {
    run_text_command(buffer, TextCommand::Indent, regions, settings)
}

/// Removes one indent unit from the start of every touched line.
///
/// # Errors
///
/// Returns an error if a region reaches past the end of the buffer.
pub fn unindent(
    buffer: &mut TextBuffer,
    regions: &[Region],
    settings: &Settings,
) -> Result<usize> {
    run_text_command(buffer, TextCommand::Unindent, regions, settings)
}
