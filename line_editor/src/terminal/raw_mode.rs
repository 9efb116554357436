// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{QueueableCommand,
                event::{DisableBracketedPaste, EnableBracketedPaste},
                terminal::{disable_raw_mode, enable_raw_mode}};
use tracing::debug;

use crate::{LineEditorError, SafeRawTerminal, execute_commands, lock_output_device_as_mut};

/// Puts the terminal in raw mode w/ bracketed paste enabled, for as long as it lives.
/// Drop restores the terminal.
#[allow(missing_debug_implementations)]
pub struct RawModeGuard {
    output_device: SafeRawTerminal,
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put in raw mode.
    pub fn try_new(output_device: SafeRawTerminal) -> Result<Self, LineEditorError> {
        enable_raw_mode()?;
        {
            let term = lock_output_device_as_mut!(output_device);
            execute_commands!(term, EnableBracketedPaste);
        } // Drop the term lock.
        debug!(message = "raw mode enabled");
        Ok(Self { output_device })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Ok(mut term) = self.output_device.lock() {
            // We don't care about the result of these operations.
            term.queue(DisableBracketedPaste).ok();
            term.flush().ok();
        }
        // We don't care about the result of this operation.
        disable_raw_mode().ok();
        debug!(message = "raw mode disabled");
    }
}
