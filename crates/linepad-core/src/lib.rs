//! Selection-driven indent and unindent for rope-backed text buffers.
//!
//! Regions are resolved to the lines they touch, merged, and each line's
//! leading whitespace is shifted by one indent unit.

pub mod buffer;
pub mod command;
pub mod line_set;
pub mod mutator;
pub mod region;
pub mod session;
pub mod whitespace;

pub use buffer::TextBuffer;
pub use command::{indent, run_text_command, run_text_command_with_order, unindent, TextCommand};
pub use line_set::collect_lines;
pub use linepad_config::{ResolvedSettings, Settings};
pub use mutator::{apply_edits, ApplyOrder};
pub use region::Region;
pub use session::Document;
pub use whitespace::{leading_whitespace, line_edit, IndentStyle, LineEdit, ShiftMode};
