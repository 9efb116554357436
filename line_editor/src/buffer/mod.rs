// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editable, in-memory text of the not yet submitted command line.
//!
//! The buffer is a sequence of Unicode code points (it may contain embedded `'\n'`
//! line breaks) plus a cursor offset measured in code points. Code point granularity is
//! authoritative: there is no grapheme clustering, so a combining mark is its own cursor
//! stop. Tabs are stored literally; tab expansion is the [`crate::layout`] module's job.

// Attach.
pub mod line_buffer;
pub mod word_boundaries;

// Re-export.
pub use line_buffer::*;
pub use word_boundaries::*;
