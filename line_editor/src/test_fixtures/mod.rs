// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fakes for the two devices a [`crate::Readline`] talks to: [`StdoutMock`] stands in
//! for the raw terminal and [`gen_input_stream()`] for `crossterm`'s `EventStream`.

// Attach.
pub mod gen_input_stream;
pub mod stdout_mock;

// Re-export.
pub use gen_input_stream::*;
pub use stdout_mock::*;
