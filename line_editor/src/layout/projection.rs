// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stateless projection of the editor contents onto terminal rows.
//!
//! [`project()`] is recomputed from scratch for every frame. Given the same inputs it
//! always produces the same [`Projection`].
//!
//! # Rules
//!
//! 1. The text is split on `'\n'` into logical lines.
//! 2. Each tab expands to exactly [`DEFAULT_TAB_WIDTH`] spaces. Expansion is not tab
//!    stop aligned.
//! 3. The first logical line is prefixed w/ the prompt.
//! 4. Each display line wraps into rows of `terminal_width` columns. An empty logical
//!    line still occupies one row.
//! 5. Every code point is one column wide.
//!
//! # Cursor on a wrap boundary
//!
//! ```text
//! width = 10, prompt = "> "
//!
//! text "12345678ab", cursor 8     text "12345678", cursor 8 (last line)
//! ┌──────────┐                    ┌──────────┐
//! │> 12345678│                    │> 12345678│
//! │▒b        │  (0, 1)            │▒         │  (0, 1), no extra row
//! └──────────┘                    └──────────┘
//! ```
//!
//! When the line holding the cursor is not the last logical line and its width is an
//! exact multiple of the terminal width, the cursor stays at column `terminal_width` of
//! that line's last row instead, so it never lands on the next logical line's row.

use super::ScreenPos;
use crate::DEFAULT_TAB_WIDTH;

/// Rendered rows plus the cursor cell. `cursor.row` can be equal to `rows.len()` when the
/// cursor sits after a last line that exactly fills its final row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Projection {
    pub rows: Vec<String>,
    pub cursor: ScreenPos,
}

impl Projection {
    /// Number of terminal rows this projection needs, including the cursor row.
    #[must_use]
    pub fn height(&self) -> usize { self.rows.len().max(self.cursor.row + 1) }
}

/// Display width of `text`: one column per code point, [`DEFAULT_TAB_WIDTH`] per tab.
/// Line breaks count as one column, so only use this on a single logical line.
#[must_use]
pub fn display_width(text: &str) -> usize { text.chars().map(char_width).sum() }

fn char_width(ch: char) -> usize {
    if ch == '\t' { DEFAULT_TAB_WIDTH } else { 1 }
}

fn expand_tabs_into(acc: &mut Vec<char>, chars: impl Iterator<Item = char>) {
    for ch in chars {
        if ch == '\t' {
            acc.extend(std::iter::repeat_n(' ', DEFAULT_TAB_WIDTH));
        } else {
            acc.push(ch);
        }
    }
}

/// Map `(prompt, terminal_width, text, cursor)` to rows and a `(col, row)` cursor.
/// `cursor` is a code point offset into `text` and is clamped to its length.
#[must_use]
pub fn project(
    prompt: &str,
    terminal_width: usize,
    text: &str,
    cursor: usize,
) -> Projection {
    let width = terminal_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let lines: Vec<&[char]> = chars.split(|&ch| ch == '\n').collect();
    let last_line_index = lines.len().saturating_sub(1);

    let mut rows: Vec<String> = vec![];
    let mut cursor_pos = ScreenPos::default();
    let mut line_start_offset = 0;

    for (line_index, line) in lines.iter().enumerate() {
        let mut display: Vec<char> = vec![];
        if line_index == 0 {
            expand_tabs_into(&mut display, prompt.chars());
        }

        let line_end_offset = line_start_offset + line.len();
        let maybe_cursor_col = (line_start_offset..=line_end_offset)
            .contains(&cursor)
            .then(|| {
                display.len()
                    + line[..cursor - line_start_offset]
                        .iter()
                        .map(|&ch| char_width(ch))
                        .sum::<usize>()
            });

        expand_tabs_into(&mut display, line.iter().copied());
        let line_width = display.len();
        let first_row = rows.len();

        if display.is_empty() {
            rows.push(String::new());
        } else {
            rows.extend(display.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }

        if let Some(col) = maybe_cursor_col {
            let at_wrap_edge =
                col == line_width && line_width > 0 && line_width.is_multiple_of(width);
            cursor_pos = if at_wrap_edge && line_index != last_line_index {
                ScreenPos::new(width, first_row + line_width / width - 1)
            } else {
                ScreenPos::new(col % width, first_row + col / width)
            };
        }

        line_start_offset = line_end_offset + 1;
    }

    Projection {
        rows,
        cursor: cursor_pos,
    }
}
