// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `tracing` setup. The editing core only emits events (`debug!` on mode changes,
//! `info!` on submit, interrupt and end of input, `trace!` per input event). Whether and
//! where they are written is decided here, by the host application.
//!
//! Logging to the display and rendering a prompt on the same terminal don't mix well, so
//! interactive applications usually log to a file:
//!
//! ```no_run
//! use r3bl_line_editor::{TracingConfig, try_initialize_logging_global};
//!
//! try_initialize_logging_global(TracingConfig::new_file(None)).unwrap();
//! ```

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
