/// Indent units and the per-line whitespace edit.
use linepad_config::ResolvedSettings;
use ropey::RopeSlice;
use serde::{Deserialize, Serialize};

/// What one indent level inserts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    /// Use N spaces for indentation.
    Spaces(usize),
    /// Use a tab character for indentation.
    #[default]
    Tabs,
}

impl std::fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spaces(n) => write!(f, "Spaces: {n}"),
            Self::Tabs => write!(f, "Tabs"),
        }
    }
}

impl From<ResolvedSettings> for IndentStyle {
    fn from(settings: ResolvedSettings) -> Self {
        if settings.translate_tabs_to_spaces {
            Self::Spaces(settings.tab_size)
        } else {
            Self::Tabs
        }
    }
}

impl IndentStyle {
    /// Returns the string to insert for one level of indentation.
    pub fn indent_text(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(*n),
            Self::Tabs => "\t".to_string(),
        }
    }
}

/// Direction of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftMode {
    Indent,
    Unindent,
}

/// An edit anchored at a line's first char.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Insert this text before the line's first char.
    Insert(String),
    /// Remove this many chars from the line start. Never zero.
    Delete(usize),
}

/// Length in chars of the line's leading run of tabs and spaces.
pub fn leading_whitespace(line: RopeSlice<'_>) -> usize {
    line.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
}

/// Computes the edit `mode` makes to `line`, or `None` when it leaves the
/// line alone.
///
/// Indent always inserts one unit. Unindent removes a single leading tab,
/// otherwise up to `tab_size` leading spaces; it ignores
/// `translate_tabs_to_spaces`.
pub fn line_edit(
    mode: ShiftMode,
    settings: &ResolvedSettings,
    line: RopeSlice<'_>,
) -> Option<LineEdit> {
    match mode {
        ShiftMode::Indent => Some(LineEdit::Insert(IndentStyle::from(*settings).indent_text())),
        ShiftMode::Unindent => {
            if leading_whitespace(line) == 0 {
                return None;
            }
            let to_remove = if line.char(0) == '\t' {
                1
            } else {
                line.chars()
                    .take_while(|c| *c == ' ')
                    .take(settings.tab_size)
                    .count()
            };
            (to_remove > 0).then_some(LineEdit::Delete(to_remove))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    fn settings(translate: bool, tab_size: usize) -> ResolvedSettings {
        ResolvedSettings {
            translate_tabs_to_spaces: translate,
            tab_size,
        }
    }

    fn edit(mode: ShiftMode, s: ResolvedSettings, line: &str) -> Option<LineEdit> {
        let rope = Rope::from_str(line);
        line_edit(mode, &s, rope.slice(..))
    }

    // ── IndentStyle ──────────────────────────────────────────────────

    #[test]
    fn test_style_from_settings() {
        assert_eq!(IndentStyle::from(settings(false, 2)), IndentStyle::Tabs);
        assert_eq!(IndentStyle::from(settings(true, 2)), IndentStyle::Spaces(2));
    }

    #[test]
    fn test_style_from_default_settings_is_tabs() {
        assert_eq!(
            IndentStyle::from(ResolvedSettings::default()),
            IndentStyle::default()
        );
    }

    #[test]
    fn test_indent_text() {
        assert_eq!(IndentStyle::Tabs.indent_text(), "\t");
        assert_eq!(IndentStyle::Spaces(2).indent_text(), "  ");
        assert_eq!(IndentStyle::Spaces(4).indent_text(), "    ");
    }

    #[test]
    fn test_display() {
        assert_eq!(IndentStyle::Spaces(4).to_string(), "Spaces: 4");
        assert_eq!(IndentStyle::Tabs.to_string(), "Tabs");
    }

    // ── leading_whitespace ───────────────────────────────────────────

    #[test]
    fn test_leading_whitespace() {
        let rope = Rope::from_str(" \t x\t\n");
        assert_eq!(leading_whitespace(rope.slice(..)), 3);
        let rope = Rope::from_str("x  \n");
        assert_eq!(leading_whitespace(rope.slice(..)), 0);
        let rope = Rope::from_str("");
        assert_eq!(leading_whitespace(rope.slice(..)), 0);
    }

    // ── Indent ───────────────────────────────────────────────────────

    #[test]
    fn test_indent_tabs_ignores_existing_whitespace() {
        for line in ["a\n", "   d\n", "\tx\n", ""] {
            assert_eq!(
                edit(ShiftMode::Indent, settings(false, 4), line),
                Some(LineEdit::Insert("\t".to_string()))
            );
        }
    }

    #[test]
    fn test_indent_spaces_uses_tab_size() {
        assert_eq!(
            edit(ShiftMode::Indent, settings(true, 2), "a\n"),
            Some(LineEdit::Insert("  ".to_string()))
        );
        assert_eq!(
            edit(ShiftMode::Indent, settings(true, 4), ""),
            Some(LineEdit::Insert("    ".to_string()))
        );
    }

    // ── Unindent ─────────────────────────────────────────────────────

    #[test]
    fn test_unindent_no_leading_whitespace() {
        assert_eq!(edit(ShiftMode::Unindent, settings(false, 4), "a\n"), None);
        assert_eq!(edit(ShiftMode::Unindent, settings(false, 4), ""), None);
        assert_eq!(edit(ShiftMode::Unindent, settings(false, 4), "\n"), None);
    }

    #[test]
    fn test_unindent_tab_removes_one_char() {
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "\t  d\n"),
            Some(LineEdit::Delete(1))
        );
        assert_eq!(
            edit(ShiftMode::Unindent, settings(true, 8), "\t\tx"),
            Some(LineEdit::Delete(1))
        );
    }

    #[test]
    fn test_unindent_spaces_bounded_by_tab_size() {
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "      c\n"),
            Some(LineEdit::Delete(4))
        );
        assert_eq!(
            edit(ShiftMode::Unindent, settings(true, 2), "  a\n"),
            Some(LineEdit::Delete(2))
        );
    }

    #[test]
    fn test_unindent_spaces_bounded_by_run() {
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "  b\n"),
            Some(LineEdit::Delete(2))
        );
    }

    #[test]
    fn test_unindent_spaces_stop_at_tab() {
        // Only the leading spaces count; the tab after them survives
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 1), " \t   d\n"),
            Some(LineEdit::Delete(1))
        );
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "  \td\n"),
            Some(LineEdit::Delete(2))
        );
    }

    #[test]
    fn test_unindent_whitespace_only_line() {
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "      \n"),
            Some(LineEdit::Delete(4))
        );
        assert_eq!(
            edit(ShiftMode::Unindent, settings(false, 4), "  "),
            Some(LineEdit::Delete(2))
        );
    }

    #[test]
    fn test_unindent_ignores_mid_line_tabs() {
        assert_eq!(edit(ShiftMode::Unindent, settings(false, 4), "a\tb\n"), None);
    }
}
