// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Physical keys, logical editor operations, and the two immutable binding tables that
//! map one onto the other.
//!
//! | Table                  | Contents                                                |
//! |------------------------|---------------------------------------------------------|
//! | [`KeyBindMode::Default`] | arrows, Home / End, Backspace / Delete, Enter, Ctrl+R, Ctrl+Left / Right, Ctrl+W / U, Ctrl+C / D / G, Esc |
//! | [`KeyBindMode::Emacs`]   | the default table + Ctrl+A / E / B / F / P / N / H / K and Alt+B / F |

// Attach.
pub mod editor_op;
pub mod key_binding_table;
pub mod keypress;

// Re-export.
pub use editor_op::*;
pub use key_binding_table::*;
pub use keypress::*;
