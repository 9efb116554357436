// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TerminalSize;

/// Examples.
///
/// ```rust
/// use r3bl_line_editor::*;
///
/// let a = keypress!(@char 'a');
/// assert_eq!(a, KeyPress::Plain { key: Key::Character('a') });
///
/// let ctrl_r = keypress!(@ctrl 'r');
/// assert_eq!(ctrl_r, KeyPress::Ctrl { key: Key::Character('r') });
///
/// let alt_b = keypress!(@alt 'b');
/// assert_eq!(alt_b, KeyPress::Alt { key: Key::Character('b') });
///
/// let enter = keypress!(@special SpecialKey::Enter);
/// assert_eq!(enter, KeyPress::Plain { key: Key::SpecialKey(SpecialKey::Enter) });
///
/// let ctrl_left = keypress!(@ctrl_special SpecialKey::Left);
/// assert_eq!(ctrl_left, KeyPress::Ctrl { key: Key::SpecialKey(SpecialKey::Left) });
/// ```
#[macro_export]
macro_rules! keypress {
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };
    (@ctrl $arg_char : expr) => {
        $crate::KeyPress::Ctrl {
            key: $crate::Key::Character($arg_char),
        }
    };
    (@alt $arg_char : expr) => {
        $crate::KeyPress::Alt {
            key: $crate::Key::Character($arg_char),
        }
    };
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
    (@ctrl_special $arg_special : expr) => {
        $crate::KeyPress::Ctrl {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
    (@alt_special $arg_special : expr) => {
        $crate::KeyPress::Alt {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

/// A physical key press, w/ impossible states removed. Shift is folded into the
/// character (Shift+x is `Plain 'X'`). Only the modifier combinations the binding tables
/// use are representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyPress {
    Plain { key: Key },
    Ctrl { key: Key },
    Alt { key: Key },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab, /* Shift + Tab */
    Delete,
    Insert,
    Esc,
}

impl From<char> for Key {
    fn from(ch: char) -> Self { Key::Character(ch) }
}

impl From<SpecialKey> for Key {
    fn from(special_key: SpecialKey) -> Self { Key::SpecialKey(special_key) }
}

impl KeyPress {
    #[must_use]
    pub fn plain(key: impl Into<Key>) -> Self { KeyPress::Plain { key: key.into() } }

    #[must_use]
    pub fn ctrl(key: impl Into<Key>) -> Self { KeyPress::Ctrl { key: key.into() } }

    #[must_use]
    pub fn alt(key: impl Into<Key>) -> Self { KeyPress::Alt { key: key.into() } }

    /// The code point an unbound key inserts, if it inserts one. Tab inserts a literal
    /// `'\t'`.
    #[must_use]
    pub fn printable_char(&self) -> Option<char> {
        match self {
            KeyPress::Plain {
                key: Key::Character(ch),
            } if !ch.is_control() => Some(*ch),
            KeyPress::Plain {
                key: Key::SpecialKey(SpecialKey::Tab),
            } => Some('\t'),
            _ => None,
        }
    }
}

/// Everything the editor reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    /// Literal text (bracketed paste). May contain line breaks, which are inserted, not
    /// submitted.
    Paste(String),
    Resize(TerminalSize),
}

impl From<KeyPress> for InputEvent {
    fn from(key_press: KeyPress) -> Self { InputEvent::Keyboard(key_press) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(keypress!(@char 'a'), Some('a'))]
    #[test_case(keypress!(@char 'Ж'), Some('Ж'))]
    #[test_case(keypress!(@char ' '), Some(' '))]
    #[test_case(keypress!(@special SpecialKey::Tab), Some('\t'))]
    #[test_case(keypress!(@char '\u{7}'), None)]
    #[test_case(keypress!(@ctrl 'a'), None)]
    #[test_case(keypress!(@alt 'b'), None)]
    #[test_case(keypress!(@special SpecialKey::Insert), None)]
    fn test_printable_char(key_press: KeyPress, expected: Option<char>) {
        assert_eq!(key_press.printable_char(), expected);
    }

    #[test]
    fn test_constructors_match_macro() {
        assert_eq!(KeyPress::plain('x'), keypress!(@char 'x'));
        assert_eq!(KeyPress::ctrl('r'), keypress!(@ctrl 'r'));
        assert_eq!(KeyPress::alt('f'), keypress!(@alt 'f'));
        assert_eq!(KeyPress::ctrl(SpecialKey::Right), keypress!(@ctrl_special SpecialKey::Right));
        assert_eq!(KeyPress::alt(SpecialKey::Left), keypress!(@alt_special SpecialKey::Left));
        assert_eq!(
            InputEvent::from(KeyPress::plain(SpecialKey::Enter)),
            InputEvent::Keyboard(keypress!(@special SpecialKey::Enter))
        );
    }
}
