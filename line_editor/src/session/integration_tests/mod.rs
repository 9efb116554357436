// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end scenarios: a whole [`Session`] is driven w/ key presses and pastes, and
//! the assertions are made against what an observer of the terminal would see, via
//! [`Screen::dump()`] and the cursor cell.
//!
//! Every scenario uses the prompt `"prompt_app> "`, an executor that answers
//! `"cmd: <line>"`, and an 80 x 24 terminal unless stated otherwise.
//!
//! | Test Module                 | What it validates                                    |
//! |:----------------------------|:-----------------------------------------------------|
//! | [`input_text_test`]         | Typing, submitting, erasing, console state           |
//! | [`move_over_input_test`]    | Cursor, line start / end, and word motion            |
//! | [`multiline_test`]          | Pasted line breaks, tabs, wrap, multi line submit    |
//! | [`history_test`]            | Up / Down browsing and the pending draft             |
//! | [`reverse_search_test`]     | Reverse incremental search and its exits             |
//! | [`key_bind_mode_test`]      | Default vs emacs binding tables, Ctrl+C and Ctrl+D   |
//!
//! [`Session`]: super::Session
//! [`Screen::dump()`]: super::Screen::dump

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

#[cfg(any(test, doc))]
pub mod test_helpers;
#[cfg(any(test, doc))]
pub mod input_text_test;
#[cfg(any(test, doc))]
pub mod reverse_search_test;
