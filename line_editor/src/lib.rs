// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_editor
//!
//! A readline style line editing engine for building interactive terminal prompt
//! applications. It is not a shell. It owns the user visible input buffer, the cursor,
//! the command history, incremental reverse search, and the translation of physical key
//! events into buffer edits and screen coordinates.
//!
//! # Architecture
//!
//! The modules are layered leaf first:
//!
//! | Module      | Responsibility                                                        |
//! |-------------|-----------------------------------------------------------------------|
//! | [`buffer`]  | Code point text buffer w/ cursor arithmetic and word motion           |
//! | [`layout`]  | Pure projection of (prompt, width, text, cursor) onto screen rows     |
//! | [`history`] | Ordered log of submitted lines and the optional browsing checkpoint   |
//! | [`search`]  | Reverse incremental search state machine over [`History`]             |
//! | [`keys`]    | Physical keys, logical [`EditorOp`]s, default and emacs binding tables |
//! | [`session`] | Composes all of the above, owns the transcript and the submit flow    |
//! | [`terminal`]| `crossterm` adapter: key conversion, renderer, async event loop       |
//! | [`log`]     | `tracing` subscriber setup (display and / or file)                    |
//!
//! Control flow for a single key press:
//!
//! ```text
//! crossterm Event ──▶ InputEvent ──▶ Session::apply() ──▶ Buffer / History / Search
//!                                          │
//!                                          ▼
//!                     EditorSnapshot ──▶ layout::project() ──▶ Projection ──▶ renderer
//! ```
//!
//! Every frame is recomputed from an immutable [`EditorSnapshot`]. There is no
//! incremental re-render tracking.
//!
//! # Example
//!
//! ```
//! use r3bl_line_editor::*;
//!
//! let config = SessionConfig::default()
//!     .with_prompt("prompt_app> ")
//!     .with_terminal_size(TerminalSize::new(80, 24));
//! let mut session = Session::new(config, |line: &str| format!("cmd: {line}"));
//!
//! session.apply(InputEvent::Paste("cmd".into()));
//! assert_eq!(session.projection().cursor, ScreenPos::new(15, 0));
//!
//! let event = session.apply(InputEvent::Keyboard(KeyPress::plain(SpecialKey::Enter)));
//! assert_eq!(event, Some(SessionEvent::Line("cmd".into())));
//! assert_eq!(session.screen().dump(), "prompt_app> cmd\ncmd: cmd\nprompt_app>");
//! ```
//!
//! # Cargo features
//!
//! - `emacs` (on by default): the emacs binding table is the default
//!   [`KeyBindMode`] for new sessions.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod buffer;
pub mod common;
pub mod history;
pub mod keys;
pub mod layout;
pub mod log;
pub mod search;
pub mod session;
pub mod terminal;
#[cfg(test)]
pub mod test_fixtures;

// Re-export the public API.
pub use buffer::*;
pub use common::*;
pub use history::*;
pub use keys::*;
pub use layout::*;
pub use log::*;
pub use search::*;
pub use session::*;
pub use terminal::*;

// Type aliases.
use crossterm::event::Event;
use futures_core::Stream;
use std::{io::Error, pin::Pin, sync::Arc};

pub type StdMutex<T> = std::sync::Mutex<T>;

pub type SendRawTerminal = dyn std::io::Write + Send;
pub type SafeRawTerminal = Arc<StdMutex<SendRawTerminal>>;

pub type PinnedInputStream = Pin<Box<dyn Stream<Item = Result<Event, Error>> + Send>>;

// Constants.
pub const CHANNEL_CAPACITY: usize = 1_000;
pub const HISTORY_SIZE_MAX: usize = 1_000;
pub const DEFAULT_TAB_WIDTH: usize = 4;
