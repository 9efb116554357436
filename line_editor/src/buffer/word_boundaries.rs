// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word and logical line boundary detection over a slice of code points.
//!
//! ## Word Boundary Rules
//!
//! A word is a maximal run of non whitespace code points. Space, tab and line break are
//! the only separators. Punctuation is part of a word.
//!
//! ```text
//! "hello world"  → words: ["hello", "world"]
//! "hello-world"  → words: ["hello-world"]
//! "a\n\nb"       → words: ["a", "b"]
//! ```
//!
//! All functions take a cursor in `0..=chars.len()` (larger values are clamped) and
//! return a cursor in the same range.

/// Returns true if `ch` separates words.
#[must_use]
pub fn is_word_separator(ch: char) -> bool { matches!(ch, ' ' | '\t' | '\n') }

/// Skip separators to the left of `cursor`, then skip to the start of the word found
/// there.
#[must_use]
pub fn find_prev_word_start(chars: &[char], cursor: usize) -> usize {
    let mut pos = cursor.min(chars.len());
    while pos > 0 && is_word_separator(chars[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && !is_word_separator(chars[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Skip the rest of the word under `cursor`, then the separators after it. Lands on the
/// start of the next word, or the end of the text.
#[must_use]
pub fn find_next_word_start(chars: &[char], cursor: usize) -> usize {
    let len = chars.len();
    let mut pos = cursor.min(len);
    while pos < len && !is_word_separator(chars[pos]) {
        pos += 1;
    }
    while pos < len && is_word_separator(chars[pos]) {
        pos += 1;
    }
    pos
}

/// Offset just after the line break that precedes `cursor`, or 0.
#[must_use]
pub fn find_line_start(chars: &[char], cursor: usize) -> usize {
    let cursor = cursor.min(chars.len());
    chars[..cursor]
        .iter()
        .rposition(|&ch| ch == '\n')
        .map_or(0, |index| index + 1)
}

/// Offset of the line break that follows `cursor`, or the end of the text.
#[must_use]
pub fn find_line_end(chars: &[char], cursor: usize) -> usize {
    let cursor = cursor.min(chars.len());
    chars[cursor..]
        .iter()
        .position(|&ch| ch == '\n')
        .map_or(chars.len(), |index| cursor + index)
}
