// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Called w/ every submitted line (which may contain line breaks). The returned text is
/// appended to the transcript below the submitted line. Synchronous and infallible:
/// failures are the executor's business.
pub trait Executor {
    fn execute(&mut self, line: &str) -> String;
}

impl<F> Executor for F
where
    F: FnMut(&str) -> String,
{
    fn execute(&mut self, line: &str) -> String { self(line) }
}
