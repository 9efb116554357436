// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Logical editing operations that keys are bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum EditorOp {
    CursorLeft,
    CursorRight,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
    EraseBefore,
    EraseAfter,
    EraseWordBefore,
    KillToLineStart,
    KillToLineEnd,
    Submit,
    HistoryUp,
    HistoryDown,
    EnterSearch,
    AbortSearch,
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D. Ends input on an empty buffer, deletes under the cursor otherwise.
    EndOfInput,
}

impl EditorOp {
    /// Cursor and history motion. In search mode these commit the match and are then
    /// consumed.
    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            EditorOp::CursorLeft
                | EditorOp::CursorRight
                | EditorOp::WordLeft
                | EditorOp::WordRight
                | EditorOp::LineStart
                | EditorOp::LineEnd
                | EditorOp::HistoryUp
                | EditorOp::HistoryDown
        )
    }
}

/// Which binding table a session uses. Chosen once, from configuration.
///
/// ```
/// use std::str::FromStr;
/// use r3bl_line_editor::KeyBindMode;
///
/// assert_eq!(KeyBindMode::from_str("emacs").unwrap(), KeyBindMode::Emacs);
/// assert_eq!(KeyBindMode::Default.to_string(), "default");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KeyBindMode {
    Default,
    Emacs,
}

/// The `emacs` cargo feature (on by default) picks [`KeyBindMode::Emacs`].
impl Default for KeyBindMode {
    fn default() -> Self {
        if cfg!(feature = "emacs") {
            KeyBindMode::Emacs
        } else {
            KeyBindMode::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_editor_op_names() {
        assert_eq!(EditorOp::EnterSearch.to_string(), "enter-search");
        assert_eq!(EditorOp::KillToLineEnd.as_ref(), "kill-to-line-end");
    }

    #[test]
    fn test_navigation_ops() {
        let navigation: Vec<EditorOp> =
            EditorOp::iter().filter(|op| op.is_navigation()).collect();
        assert_eq!(navigation.len(), 8);
        assert!(!EditorOp::Submit.is_navigation());
        assert!(!EditorOp::EraseBefore.is_navigation());
    }

    #[test]
    fn test_key_bind_mode_parse() {
        assert_eq!(KeyBindMode::from_str("Emacs").unwrap(), KeyBindMode::Emacs);
        assert_eq!(KeyBindMode::from_str("default").unwrap(), KeyBindMode::Default);
        assert!(KeyBindMode::from_str("vi").is_err());
        assert_eq!(KeyBindMode::iter().count(), 2);
    }

    #[cfg(feature = "emacs")]
    #[test]
    fn test_default_mode_follows_feature() {
        assert_eq!(KeyBindMode::default(), KeyBindMode::Emacs);
    }

    #[cfg(not(feature = "emacs"))]
    #[test]
    fn test_default_mode_follows_feature() {
        assert_eq!(KeyBindMode::default(), KeyBindMode::Default);
    }
}
