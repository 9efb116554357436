// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reverse incremental search over [`History`].
//!
//! ```text
//!            enter search                 typed char / backspace / search again
//!  Inactive ──────────────▶ Searching ◀──────────────────────────────────────┐
//!     ▲                        │  └──────────────────────────────────────────┘
//!     │   commit / abort       │
//!     └────────────────────────┘
//! ```
//!
//! The `Inactive` state is [`crate::EditorMode::Edit`]; `Searching` is
//! [`crate::EditorMode::Search`] holding a [`SearchState`].
//!
//! While failing, the text on display is the last entry that matched during this
//! search (or nothing if none ever did) and `pattern` keeps every typed character.

use crate::{History, LineBuffer};

pub const SEARCH_PREFIX: &str = "(reverse-i-search)`";
pub const FAILED_SEARCH_PREFIX: &str = "(failed reverse-i-search)`";
pub const SEARCH_PREFIX_END: &str = "':";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pattern: String,
    /// Exclusive upper bound of the history indices that are scanned, newest first.
    scan_limit: usize,
    matched_index: Option<usize>,
    failed: bool,
    /// Buffer that was live when the search began. Restored on abort.
    draft: LineBuffer,
}

impl SearchState {
    #[must_use]
    pub fn begin(history: &History, draft: LineBuffer) -> Self {
        Self {
            pattern: String::new(),
            scan_limit: history.len(),
            matched_index: None,
            failed: false,
            draft,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str { &self.pattern }

    #[must_use]
    pub fn scan_limit(&self) -> usize { self.scan_limit }

    #[must_use]
    pub fn matched_index(&self) -> Option<usize> { self.matched_index }

    #[must_use]
    pub fn is_failed(&self) -> bool { self.failed }

    #[must_use]
    pub fn draft(&self) -> &LineBuffer { &self.draft }

    #[must_use]
    pub fn into_draft(self) -> LineBuffer { self.draft }

    /// Whitespace only patterns match nothing and never fail.
    #[must_use]
    pub fn is_pattern_blank(&self) -> bool { self.pattern.trim().is_empty() }
}

impl SearchState {
    pub fn push_char(&mut self, ch: char, history: &History) {
        self.pattern.push(ch);
        self.rescan(history);
    }

    pub fn push_str(&mut self, text: &str, history: &History) {
        if text.is_empty() {
            return;
        }
        self.pattern.push_str(text);
        self.rescan(history);
    }

    /// Drop the last pattern character and rescan below the current scan limit.
    pub fn pop_char(&mut self, history: &History) {
        if self.pattern.pop().is_some() {
            self.rescan(history);
        }
    }

    /// Look for an older entry w/ the same pattern. When there is none the search fails
    /// and the current match stays on display.
    pub fn search_again(&mut self, history: &History) {
        if let Some(matched_index) = self.matched_index {
            self.scan_limit = matched_index;
        }
        self.rescan(history);
    }

    fn rescan(&mut self, history: &History) {
        let pattern = self.pattern.trim();

        if pattern.is_empty() {
            self.matched_index = None;
            self.failed = false;
            return;
        }

        match history.find_newest_match(pattern, self.scan_limit) {
            Some(index) => {
                self.matched_index = Some(index);
                self.failed = false;
            }
            None => self.failed = true,
        }
    }
}

impl SearchState {
    /// Eg: "(reverse-i-search)`print(':".
    #[must_use]
    pub fn prefix(&self) -> String {
        let start = if self.failed { FAILED_SEARCH_PREFIX } else { SEARCH_PREFIX };
        format!("{start}{}{SEARCH_PREFIX_END}", self.pattern)
    }

    /// Text shown after the prefix, and loaded into the buffer on commit:
    /// - the matched entry,
    /// - else the pre-search draft while the pattern is blank,
    /// - else nothing.
    #[must_use]
    pub fn display_text(&self, history: &History) -> String {
        match self.matched_index.and_then(|index| history.get(index)) {
            Some(entry) => entry.to_string(),
            None if self.is_pattern_blank() => self.draft.text(),
            None => String::new(),
        }
    }
}
