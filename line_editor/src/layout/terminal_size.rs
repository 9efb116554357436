// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Terminal dimensions in cells. A dimension of 0 is treated as 1 wherever it is used
/// for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub width: usize,
    pub height: usize,
}

impl TerminalSize {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self { Self { width, height } }
}

impl Default for TerminalSize {
    fn default() -> Self { Self::new(80, 24) }
}

/// `crossterm::terminal::size()` returns `(columns, rows)`.
impl From<(u16, u16)> for TerminalSize {
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(usize::from(width), usize::from(height))
    }
}

/// (column, row) of a cell, both 0 based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPos {
    pub col: usize,
    pub row: usize,
}

impl ScreenPos {
    #[must_use]
    pub fn new(col: usize, row: usize) -> Self { Self { col, row } }
}

impl From<(usize, usize)> for ScreenPos {
    fn from((col, row): (usize, usize)) -> Self { Self::new(col, row) }
}
