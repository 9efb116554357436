// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use super::{find_line_end, find_line_start, find_next_word_start, find_prev_word_start};

/// Text of the command line being edited and the cursor inside of it.
///
/// Invariant: `0 <= cursor <= chars.len()`. Every operation keeps it, so none of them
/// can fail. Operations that can't do anything (erase at offset 0, move left at offset
/// 0, etc) are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Buffer holding `text` w/ the cursor at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    #[must_use]
    pub fn text(&self) -> String { self.chars.iter().collect() }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Length in code points.
    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    /// Replace the whole text, cursor at the end.
    pub fn set_text(&mut self, text: &str) { *self = Self::with_text(text); }

    /// Empty the buffer and return what it held.
    pub fn take(&mut self) -> String {
        let text = self.text();
        *self = Self::default();
        text
    }
}

impl LineBuffer {
    /// Insert `text` at the cursor and advance the cursor past it.
    pub fn insert(&mut self, text: &str) {
        let before = self.chars.len();
        self.chars
            .splice(self.cursor..self.cursor, text.chars());
        self.cursor += self.chars.len() - before;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Backspace. Erasing a line break joins two lines.
    pub fn erase_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    /// Delete the code point under the cursor.
    pub fn erase_after(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn erase_word_before(&mut self) {
        let start = find_prev_word_start(&self.chars, self.cursor);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn kill_to_line_start(&mut self) {
        let start = find_line_start(&self.chars, self.cursor);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn kill_to_line_end(&mut self) {
        let end = find_line_end(&self.chars, self.cursor);
        self.chars.drain(self.cursor..end);
    }
}

impl LineBuffer {
    pub fn move_left(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor = find_line_start(&self.chars, self.cursor);
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor = find_line_end(&self.chars, self.cursor);
    }

    pub fn move_word_left(&mut self) {
        self.cursor = find_prev_word_start(&self.chars, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = find_next_word_start(&self.chars, self.cursor);
    }
}

impl Display for LineBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
