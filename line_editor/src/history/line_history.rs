// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

use crate::HISTORY_SIZE_MAX;

/// Where the user is while browsing history w/ Up / Down, and the live draft that was in
/// the buffer when browsing started. Absent while the buffer is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseCheckpoint {
    pub nav_index: usize,
    pub pending_draft: String,
}

/// Ordered log of submitted lines, oldest first. Navigation never mutates `entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
    pub max_size: usize,
    checkpoint: Option<BrowseCheckpoint>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::default(),
            max_size: HISTORY_SIZE_MAX,
            checkpoint: None,
        }
    }
}

impl History {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    /// Seed w/ `entries` (oldest first), eg from configuration at session start. The
    /// entries are kept verbatim, including empty ones. `max_size` only applies to lines
    /// appended later.
    #[must_use]
    pub fn with_entries(max_size: usize, entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            ..Self::new(max_size)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> { self.entries.iter().map(String::as_str) }

    #[must_use]
    pub fn checkpoint(&self) -> Option<&BrowseCheckpoint> { self.checkpoint.as_ref() }

    #[must_use]
    pub fn is_browsing(&self) -> bool { self.checkpoint.is_some() }

    /// Change the capacity, evicting the oldest entries if needed.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        self.exit_browsing();
    }
}

impl History {
    /// Record a submitted line. Empty lines are not recorded. Always ends browsing.
    pub fn append(&mut self, line: String) {
        self.checkpoint = None;

        if line.is_empty() || self.max_size == 0 {
            return;
        }

        self.entries.push_back(line);

        // Remove oldest entries. A seed may have been larger than `max_size`.
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    /// Start browsing (stashing `current_text` as the pending draft) at the newest
    /// entry, or move one entry older. Clamped at the oldest entry. Returns the entry to
    /// load into the buffer, or `None` when the history is empty.
    pub fn navigate_up(&mut self, current_text: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let nav_index = match &mut self.checkpoint {
            Some(checkpoint) => {
                checkpoint.nav_index = checkpoint.nav_index.saturating_sub(1);
                checkpoint.nav_index
            }
            None => {
                let nav_index = self.entries.len() - 1;
                self.checkpoint = Some(BrowseCheckpoint {
                    nav_index,
                    pending_draft: current_text.to_string(),
                });
                nav_index
            }
        };

        self.get(nav_index)
    }

    /// Move one entry newer. Moving past the newest entry exits browsing and returns the
    /// pending draft. `None` when not browsing.
    pub fn navigate_down(&mut self) -> Option<String> {
        let checkpoint = self.checkpoint.as_mut()?;

        if checkpoint.nav_index + 1 < self.entries.len() {
            checkpoint.nav_index += 1;
            let nav_index = checkpoint.nav_index;
            return self.get(nav_index).map(ToString::to_string);
        }

        self.checkpoint.take().map(|it| it.pending_draft)
    }

    /// Enter browsing positioned at `index` (clamped), as if the user had navigated
    /// there from `pending_draft`.
    pub fn browse_from(&mut self, index: usize, pending_draft: String) {
        if self.entries.is_empty() {
            self.checkpoint = None;
            return;
        }
        self.checkpoint = Some(BrowseCheckpoint {
            nav_index: index.min(self.entries.len() - 1),
            pending_draft,
        });
    }

    pub fn exit_browsing(&mut self) { self.checkpoint = None; }

    /// Newest index `< scan_limit` whose entry contains `pattern`.
    #[must_use]
    pub fn find_newest_match(&self, pattern: &str, scan_limit: usize) -> Option<usize> {
        (0..scan_limit.min(self.entries.len()))
            .rev()
            .find(|&index| self.entries[index].contains(pattern))
    }
}
