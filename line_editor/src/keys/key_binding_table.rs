// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashMap, sync::LazyLock};

use super::{EditorOp, KeyBindMode, KeyPress, SpecialKey};
use crate::keypress;

/// Bindings shared by both tables.
const COMMON_BINDINGS: &[(KeyPress, EditorOp)] = &[
    (keypress!(@special SpecialKey::Left), EditorOp::CursorLeft),
    (keypress!(@special SpecialKey::Right), EditorOp::CursorRight),
    (keypress!(@special SpecialKey::Home), EditorOp::LineStart),
    (keypress!(@special SpecialKey::End), EditorOp::LineEnd),
    (keypress!(@ctrl_special SpecialKey::Left), EditorOp::WordLeft),
    (keypress!(@ctrl_special SpecialKey::Right), EditorOp::WordRight),
    (keypress!(@special SpecialKey::Backspace), EditorOp::EraseBefore),
    (keypress!(@special SpecialKey::Delete), EditorOp::EraseAfter),
    (keypress!(@ctrl 'w'), EditorOp::EraseWordBefore),
    (keypress!(@ctrl 'u'), EditorOp::KillToLineStart),
    (keypress!(@special SpecialKey::Enter), EditorOp::Submit),
    (keypress!(@ctrl 'j'), EditorOp::Submit),
    (keypress!(@ctrl 'm'), EditorOp::Submit),
    (keypress!(@special SpecialKey::Up), EditorOp::HistoryUp),
    (keypress!(@special SpecialKey::Down), EditorOp::HistoryDown),
    (keypress!(@ctrl 'r'), EditorOp::EnterSearch),
    (keypress!(@ctrl 'g'), EditorOp::AbortSearch),
    (keypress!(@special SpecialKey::Esc), EditorOp::AbortSearch),
    (keypress!(@ctrl 'c'), EditorOp::Interrupt),
    (keypress!(@ctrl 'd'), EditorOp::EndOfInput),
];

/// Added on top of [`COMMON_BINDINGS`] in [`KeyBindMode::Emacs`].
const EMACS_BINDINGS: &[(KeyPress, EditorOp)] = &[
    (keypress!(@ctrl 'a'), EditorOp::LineStart),
    (keypress!(@ctrl 'e'), EditorOp::LineEnd),
    (keypress!(@ctrl 'b'), EditorOp::CursorLeft),
    (keypress!(@ctrl 'f'), EditorOp::CursorRight),
    (keypress!(@ctrl 'p'), EditorOp::HistoryUp),
    (keypress!(@ctrl 'n'), EditorOp::HistoryDown),
    (keypress!(@ctrl 'h'), EditorOp::EraseBefore),
    (keypress!(@ctrl 'k'), EditorOp::KillToLineEnd),
    (keypress!(@alt 'b'), EditorOp::WordLeft),
    (keypress!(@alt 'f'), EditorOp::WordRight),
];

static DEFAULT_TABLE: LazyLock<KeyBindingTable> = LazyLock::new(|| {
    KeyBindingTable::new(KeyBindMode::Default, COMMON_BINDINGS.iter().copied())
});

static EMACS_TABLE: LazyLock<KeyBindingTable> = LazyLock::new(|| {
    KeyBindingTable::new(
        KeyBindMode::Emacs,
        COMMON_BINDINGS.iter().chain(EMACS_BINDINGS).copied(),
    )
});

/// Immutable physical key → [`EditorOp`] map. Dispatch is a single lookup.
#[derive(Debug)]
pub struct KeyBindingTable {
    mode: KeyBindMode,
    bindings: HashMap<KeyPress, EditorOp>,
}

impl KeyBindingTable {
    fn new(mode: KeyBindMode, bindings: impl Iterator<Item = (KeyPress, EditorOp)>) -> Self {
        Self {
            mode,
            bindings: bindings.collect(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> KeyBindMode { self.mode }

    #[must_use]
    pub fn lookup(&self, key_press: &KeyPress) -> Option<EditorOp> {
        self.bindings.get(key_press).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.bindings.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }
}

impl KeyBindMode {
    /// The table for this mode, built once per process.
    #[must_use]
    pub fn binding_table(self) -> &'static KeyBindingTable {
        match self {
            KeyBindMode::Default => &DEFAULT_TABLE,
            KeyBindMode::Emacs => &EMACS_TABLE,
        }
    }
}
