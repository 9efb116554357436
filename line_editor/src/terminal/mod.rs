// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `crossterm` adapter for a [`crate::Session`].
//!
//! ```text
//! EventStream ─▶ input task ─(mpsc)─▶ Readline::readline() ─▶ Session::apply()
//!                                                │
//!                                                ▼
//!                                 TerminalRenderer::render() ─▶ SafeRawTerminal
//! ```
//!
//! Both devices are injected so that tests can use `StdoutMock` and a generated input
//! stream instead of a real terminal.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod convert;
pub mod raw_mode;
pub mod readline;
pub mod renderer;

// Re-export.
pub use convert::*;
pub use raw_mode::*;
pub use readline::*;
pub use renderer::*;
