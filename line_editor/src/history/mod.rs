// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod line_history;

// Re-export.
pub use line_history::*;
