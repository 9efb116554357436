// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod projection;
pub mod terminal_size;

// Re-export.
pub use projection::*;
pub use terminal_size::*;
