// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputEvent, KeyBindMode, KeyPress, Session, SessionConfig, SessionEvent,
            SpecialKey, TerminalSize};

pub const PROMPT: &str = "prompt_app> ";

/// Multi line and tabbed entries. None of them is a prefix of another.
pub const HISTORY: [&str; 8] = [
    "print(C)",
    "print(D)",
    "yuk#",
    "command",
    "команда1\nкоманда2\nкоманда3",
    "a\n\nb",
    "if a then\n print(x)\nelse\nprint(y)",
    "interpeter\nдстрокаслово\nfdlqfdsl_fsldgg\nrpewr",
];

/// A [`Session`] w/ the `"cmd: <line>"` executor, plus shorthands to drive it.
#[allow(missing_debug_implementations)]
pub struct PromptApp {
    pub session: Session,
}

impl PromptApp {
    pub fn new(key_bind_mode: KeyBindMode) -> Self {
        Self::with_history(key_bind_mode, &[])
    }

    pub fn with_history(key_bind_mode: KeyBindMode, history: &[&str]) -> Self {
        Self::with_config(
            SessionConfig::default()
                .with_key_bind_mode(key_bind_mode)
                .with_initial_history(history.iter().copied()),
        )
    }

    pub fn with_width(key_bind_mode: KeyBindMode, width: usize) -> Self {
        Self::with_config(
            SessionConfig::default()
                .with_key_bind_mode(key_bind_mode)
                .with_terminal_size(TerminalSize::new(width, 24)),
        )
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let session = Session::new(config.with_prompt(PROMPT), |line: &str| {
            format!("cmd: {line}")
        });
        Self { session }
    }

    /// Type `text` one key at a time. A `'\t'` is sent as the Tab key. Use
    /// [`Self::paste()`] for text w/ line breaks.
    pub fn type_text(&mut self, text: &str) -> Option<SessionEvent> {
        let mut last = None;
        for ch in text.chars() {
            let key_press = if ch == '\t' {
                KeyPress::plain(SpecialKey::Tab)
            } else {
                KeyPress::plain(ch)
            };
            last = self.session.apply(InputEvent::Keyboard(key_press));
        }
        last
    }

    pub fn paste(&mut self, text: &str) -> Option<SessionEvent> {
        self.session.apply(InputEvent::Paste(text.to_string()))
    }

    pub fn press(&mut self, key_press: KeyPress) -> Option<SessionEvent> {
        self.session.apply(InputEvent::Keyboard(key_press))
    }

    pub fn press_n(&mut self, key_press: KeyPress, times: usize) {
        for _ in 0..times {
            self.press(key_press);
        }
    }

    /// Cursor cell on the screen, as `(col, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        let it = self.session.screen().cursor;
        (it.col, it.row)
    }

    pub fn dump(&self) -> String { self.session.screen().dump() }
}
