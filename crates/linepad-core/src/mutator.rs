/// Applies per-line whitespace edits to a buffer.
use anyhow::Result;
use linepad_config::ResolvedSettings;

use crate::buffer::TextBuffer;
use crate::whitespace::{line_edit, LineEdit, ShiftMode};

/// How edits are sequenced so line starts stay valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplyOrder {
    /// Plan every edit against the untouched buffer, then apply from the
    /// last line up so earlier offsets never move.
    #[default]
    BottomUp,
    /// Walk lines top-down, re-reading the line start and its leading run
    /// from the live buffer before each edit.
    Recompute,
}

/// Applies `mode` to each of `lines` (ascending, deduplicated) and returns
/// how many lines changed.
///
/// # Errors
///
/// Returns an error if a line index is out of bounds.
pub fn apply_edits(
    buffer: &mut TextBuffer,
    lines: &[usize],
    mode: ShiftMode,
    settings: &ResolvedSettings,
    order: ApplyOrder,
) -> Result<usize> {
    match order {
        ApplyOrder::BottomUp => {
            let plan = plan_edits(buffer, lines, mode, settings)?;
            // Process from last to first to maintain char positions
            for (line_start, edit) in plan.iter().rev() {
                apply_one(buffer, *line_start, edit)?;
            }
            Ok(plan.len())
        }
        ApplyOrder::Recompute => {
            let mut changed = 0;
            for &line_idx in lines {
                let line_start = buffer.line_to_char(line_idx)?;
                let edit = line_edit(mode, settings, buffer.line(line_idx)?);
                if let Some(edit) = edit {
                    apply_one(buffer, line_start, &edit)?;
                    changed += 1;
                }
            }
            Ok(changed)
        }
    }
}

/// Pairs each line's start offset with its edit, skipping lines left alone.
fn plan_edits(
    buffer: &TextBuffer,
    lines: &[usize],
    mode: ShiftMode,
    settings: &ResolvedSettings,
) -> Result<Vec<(usize, LineEdit)>> {
    let mut plan = Vec::with_capacity(lines.len());
    for &line_idx in lines {
        if let Some(edit) = line_edit(mode, settings, buffer.line(line_idx)?) {
            plan.push((buffer.line_to_char(line_idx)?, edit));
        }
    }
    Ok(plan)
}

fn apply_one(buffer: &mut TextBuffer, line_start: usize, edit: &LineEdit) -> Result<()> {
    match edit {
        LineEdit::Insert(text) => buffer.insert(line_start, text),
        LineEdit::Delete(count) => buffer.remove(line_start, line_start + count),
    }
}
