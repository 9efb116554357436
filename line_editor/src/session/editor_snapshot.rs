// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Projection, project};

/// Immutable copy of what the editor displays: the prompt (or the search prefix), the
/// text after it, and the cursor offset into that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub prompt: String,
    pub text: String,
    pub cursor: usize,
}

impl EditorSnapshot {
    #[must_use]
    pub fn project(&self, terminal_width: usize) -> Projection {
        project(&self.prompt, terminal_width, &self.text, self.cursor)
    }
}
