// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Projection, ScreenPos, project};

/// Rows that have scrolled past the live editor: submitted prompts + text, and the
/// executor's output. Rows are already wrapped to the terminal width at the time they
/// were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    rows: Vec<String>,
}

impl Transcript {
    #[must_use]
    pub fn rows(&self) -> &[String] { &self.rows }

    #[must_use]
    pub fn len(&self) -> usize { self.rows.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn push_rows(&mut self, rows: impl IntoIterator<Item = String>) {
        self.rows.extend(rows);
    }

    /// Add executor output. One trailing line break is ignored, and empty output adds
    /// nothing.
    pub fn push_output(&mut self, output: &str, terminal_width: usize) {
        let output = output.strip_suffix('\n').unwrap_or(output);
        if output.is_empty() {
            return;
        }
        for line in output.split('\n') {
            self.push_rows(project("", terminal_width, line, 0).rows);
        }
    }
}

/// What an observer of the terminal sees: the transcript followed by the live
/// projection, scrolled so that at most `height` rows remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub rows: Vec<String>,
    pub cursor: ScreenPos,
}

impl Screen {
    #[must_use]
    pub fn compose(transcript: &Transcript, projection: &Projection, height: usize) -> Self {
        let mut rows: Vec<String> = transcript
            .rows()
            .iter()
            .chain(projection.rows.iter())
            .cloned()
            .collect();
        let mut cursor = ScreenPos::new(
            projection.cursor.col,
            transcript.len() + projection.cursor.row,
        );

        // Cursor after a last row that exactly fills the width.
        while rows.len() <= cursor.row {
            rows.push(String::new());
        }

        let height = height.max(1);
        if rows.len() > height {
            let scrolled = rows.len() - height;
            rows.drain(..scrolled);
            cursor.row = cursor.row.saturating_sub(scrolled);
        }

        Self { rows, cursor }
    }

    /// Terminal text: trailing blanks of every row and trailing empty rows are trimmed.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut lines: Vec<&str> = self.rows.iter().map(|row| row.trim_end()).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}
