// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use miette::{Diagnostic, Report};
use thiserror::Error;

/// Error returned from the terminal adapter ([`crate::Readline::readline()`] and
/// friends). The editing core itself never fails: motion clamps, and erase or navigation
/// past the ends are steady states.
#[derive(Debug, Error, Diagnostic)]
pub enum LineEditorError {
    /// An internal I/O error occurred.
    #[error(transparent)]
    #[diagnostic(code(r3bl_line_editor::io))]
    IO(#[from] io::Error),

    /// The input event channel was closed, ie the input task has exited and every event
    /// it produced was already processed.
    #[error("input event channel closed")]
    #[diagnostic(
        code(r3bl_line_editor::closed),
        help("the input task exits when the terminal event stream ends or errors")
    )]
    Closed,
}

/// For convenience, convert [`Report`] to [`LineEditorError`], so that
/// `into_diagnostic()` works.
impl From<Report> for LineEditorError {
    fn from(report: Report) -> Self { LineEditorError::IO(io::Error::other(format!("{report}"))) }
}
