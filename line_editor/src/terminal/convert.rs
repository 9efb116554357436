// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{InputEvent, Key, KeyPress, SpecialKey, TerminalSize};

/// Convert `crossterm::event::Event` to [`InputEvent`]. Returns `None` for events the
/// editor ignores: key releases, mouse and focus events, keys w/ both Ctrl and Alt held,
/// and keys that have no [`Key`] counterpart.
#[must_use]
pub fn convert_crossterm_event_to_input_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            convert_crossterm_key_event(key_event).map(InputEvent::Keyboard)
        }
        Event::Paste(text) => Some(InputEvent::Paste(normalize_line_breaks(&text))),
        Event::Resize(width, height) => Some(InputEvent::Resize(TerminalSize::new(
            usize::from(width),
            usize::from(height),
        ))),
        _ => None,
    }
}

#[must_use]
pub fn convert_crossterm_key_event(
    KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }: KeyEvent,
) -> Option<KeyPress> {
    if kind == KeyEventKind::Release {
        return None;
    }

    let key = match code {
        KeyCode::Char(ch) => Key::Character(ch),
        KeyCode::Up => Key::SpecialKey(SpecialKey::Up),
        KeyCode::Down => Key::SpecialKey(SpecialKey::Down),
        KeyCode::Left => Key::SpecialKey(SpecialKey::Left),
        KeyCode::Right => Key::SpecialKey(SpecialKey::Right),
        KeyCode::Home => Key::SpecialKey(SpecialKey::Home),
        KeyCode::End => Key::SpecialKey(SpecialKey::End),
        KeyCode::PageUp => Key::SpecialKey(SpecialKey::PageUp),
        KeyCode::PageDown => Key::SpecialKey(SpecialKey::PageDown),
        KeyCode::Tab => Key::SpecialKey(SpecialKey::Tab),
        KeyCode::BackTab => Key::SpecialKey(SpecialKey::BackTab),
        KeyCode::Delete => Key::SpecialKey(SpecialKey::Delete),
        KeyCode::Insert => Key::SpecialKey(SpecialKey::Insert),
        KeyCode::Enter => Key::SpecialKey(SpecialKey::Enter),
        KeyCode::Backspace => Key::SpecialKey(SpecialKey::Backspace),
        KeyCode::Esc => Key::SpecialKey(SpecialKey::Esc),
        _ => return None,
    };

    // Shift is already folded into the character (or BackTab), so it is ignored here.
    let is_ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let is_alt = modifiers.contains(KeyModifiers::ALT);

    match (is_ctrl, is_alt, key) {
        (false, false, key) => Some(KeyPress::Plain { key }),
        (true, false, Key::Character(ch)) => Some(KeyPress::Ctrl {
            key: Key::Character(ch.to_ascii_lowercase()),
        }),
        (true, false, key) => Some(KeyPress::Ctrl { key }),
        (false, true, key) => Some(KeyPress::Alt { key }),
        (true, true, _) => None,
    }
}

/// Pasted text from terminals on some platforms uses `"\r\n"` or a bare `'\r'`.
fn normalize_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
