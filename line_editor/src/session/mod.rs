// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Session`] composes the [`crate::LineBuffer`], [`crate::History`] and
//! [`crate::SearchState`] w/ the selected [`crate::KeyBindingTable`], an [`Executor`], and
//! the transcript of everything submitted so far.
//!
//! # Testing strategy
//!
//! Each component has unit tests next to its code. The [`integration_tests`] module
//! drives a whole [`Session`] through key sequences and asserts on the [`Screen`] (what
//! an observer of the terminal would see) and the cursor cell.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod editor_snapshot;
pub mod executor;
pub mod screen;
pub mod session_config;
pub mod session_impl;
#[cfg(any(test, doc))]
pub mod integration_tests;

// Re-export.
pub use editor_snapshot::*;
pub use executor::*;
pub use screen::*;
pub use session_config::*;
pub use session_impl::*;
