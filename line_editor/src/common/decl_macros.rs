// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given expression in `Ok()`, or return `Ok(())` when called with no
/// arguments.
///
/// ```
/// use r3bl_line_editor::ok;
///
/// fn unit() -> std::io::Result<()> { ok!() }
/// fn value() -> std::io::Result<usize> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// Lock the [`crate::SafeRawTerminal`] held by a `Readline` and return a `&mut` to the
/// [`crate::SendRawTerminal`] inside of it. The lock is held until the end of the
/// enclosing scope.
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock().map_err(|_| {
            $crate::LineEditorError::IO(std::io::Error::other("output device lock poisoned"))
        })?
    };
}

/// Queue each `crossterm` command on `$writer` (a `&mut dyn Write`) w/o flushing. Uses
/// `?` on the [`std::io::Result`] of each command.
#[macro_export]
macro_rules! queue_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $(
            ::crossterm::QueueableCommand::queue(&mut *$writer, $command)?;
        )*
    }};
}

/// Same as [`queue_commands!`], then flush `$writer`.
#[macro_export]
macro_rules! execute_commands {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        $crate::queue_commands!($writer $(, $command)*);
        ::std::io::Write::flush(&mut *$writer)?;
    }};
}
