//! A document with selections, view settings, and snapshot undo.
//!
//! Every command runs inside a scoped edit: the buffer is snapshotted first,
//! restored if the command fails, and recorded as one undo step if it
//! succeeded and changed anything.

use anyhow::Result;
use linepad_config::Settings;

use crate::buffer::TextBuffer;
use crate::command::{run_text_command, TextCommand};
use crate::region::Region;

/// Buffer content captured before an edit.
#[derive(Debug, Clone)]
struct UndoSnapshot {
    buffer: TextBuffer,
}

/// A buffer plus the state a host keeps alongside it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: TextBuffer,
    selections: Vec<Region>,
    settings: Settings,
    undo_stack: Vec<UndoSnapshot>,
    redo_stack: Vec<UndoSnapshot>,
}

impl Document {
    /// Creates a document holding `text` with a cursor at offset 0.
    pub fn new(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from(text),
            selections: vec![Region::cursor(0)],
            ..Default::default()
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn selections(&self) -> &[Region] {
        &self.selections
    }

    /// Selections are not remapped after edits; the host owns that.
    pub fn selections_mut(&mut self) -> &mut Vec<Region> {
        &mut self.selections
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Runs a command over the current selections as one undoable step.
    ///
    /// # Errors
    ///
    /// Returns the command's error after restoring the buffer.
    pub fn run_text_command(&mut self, command: TextCommand) -> Result<usize> {
        self.edit(|buffer, selections, settings| {
            run_text_command(buffer, command, selections, settings)
        })
    }

    /// Runs a command given by dispatch name, e.g. `"indent"`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown name or a failing command.
    pub fn run_named_command(&mut self, name: &str) -> Result<usize> {
        self.run_text_command(name.parse()?)
    }

    /// Runs `f` against the buffer inside a scoped edit.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns; the buffer is rolled back first.
    pub fn edit<T>(
        &mut self,
        f: impl FnOnce(&mut TextBuffer, &[Region], &Settings) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.snapshot_for_undo();
        match f(&mut self.buffer, &self.selections, &self.settings) {
            Ok(value) => {
                self.record_undo_from_snapshot(snapshot);
                Ok(value)
            }
            Err(e) => {
                tracing::debug!("edit failed, rolling back: {e:#}");
                self.buffer = snapshot.buffer;
                Err(e)
            }
        }
    }

    /// Restores the content before the last recorded edit. Returns false if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.buffer, snapshot.buffer);
        self.redo_stack.push(UndoSnapshot { buffer: current });
        true
    }

    /// Reapplies the last undone edit. Returns false if there was nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.buffer, snapshot.buffer);
        self.undo_stack.push(UndoSnapshot { buffer: current });
        true
    }

    fn snapshot_for_undo(&self) -> UndoSnapshot {
        UndoSnapshot {
            buffer: self.buffer.clone(),
        }
    }

    /// Does nothing if the buffer is unchanged.
    fn record_undo_from_snapshot(&mut self, snapshot: UndoSnapshot) {
        if snapshot.buffer == self.buffer {
            return;
        }
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();
    }
}
