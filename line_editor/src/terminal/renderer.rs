// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crossterm::{cursor::{MoveDown, MoveToColumn, MoveUp},
                style::Print,
                terminal::{Clear, ClearType}};

use crate::{Session, queue_commands};

/// Paints a [`Session`] inline, below whatever the terminal already shows. Every frame
/// clears the live area and repaints it from the session's projection. Transcript rows
/// are printed once, above the live area, and then left alone.
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    /// Row of the terminal cursor, relative to the first row of the live area.
    cursor_row: usize,
    /// Rows of the projection painted by the last frame.
    painted_rows: usize,
    transcript_rows_printed: usize,
}

fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

impl TerminalRenderer {
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn render(&mut self, session: &Session, term: &mut dyn Write) -> io::Result<()> {
        let projection = session.projection();
        let transcript = session.transcript().rows();

        // Back to the top of the live area.
        if self.cursor_row > 0 {
            queue_commands!(term, MoveUp(to_u16(self.cursor_row)));
        }
        queue_commands!(term, MoveToColumn(0), Clear(ClearType::FromCursorDown));

        let start = self.transcript_rows_printed.min(transcript.len());
        for row in &transcript[start..] {
            queue_commands!(term, Print(row), Print("\r\n"));
        }
        self.transcript_rows_printed = transcript.len();

        for (index, row) in projection.rows.iter().enumerate() {
            if index > 0 {
                queue_commands!(term, Print("\r\n"));
            }
            queue_commands!(term, Print(row));
        }

        // Cursor after a last row that exactly fills the width.
        let mut last_row = projection.rows.len().saturating_sub(1);
        while last_row < projection.cursor.row {
            queue_commands!(term, Print("\r\n"));
            last_row += 1;
        }

        let rows_up = last_row - projection.cursor.row;
        if rows_up > 0 {
            queue_commands!(term, MoveUp(to_u16(rows_up)));
        }
        queue_commands!(term, MoveToColumn(to_u16(projection.cursor.col)));
        term.flush()?;

        self.cursor_row = projection.cursor.row;
        self.painted_rows = last_row + 1;

        Ok(())
    }

    /// Move the terminal cursor below the live area, eg before the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn finish(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let rows_down = self.painted_rows.saturating_sub(self.cursor_row + 1);
        if rows_down > 0 {
            queue_commands!(term, MoveDown(to_u16(rows_down)));
        }
        queue_commands!(term, Print("\r\n"));
        term.flush()?;

        *self = Self::default();
        Ok(())
    }
}
