// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::{debug, info, trace};

use super::{EditorSnapshot, Executor, Screen, SessionConfig, Transcript};
use crate::{EditorOp, History, InputEvent, KeyBindMode, KeyBindingTable, KeyPress,
            LineBuffer, Projection, SearchState, TerminalSize, project};

/// Edit vs search. The dispatcher matches on this to decide what a key means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Edit,
    Search(SearchState),
}

/// Events returned by [`Session::apply()`] for the host to act upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The user submitted a line of text. It is already in the history and transcript.
    Line(String),

    /// The user pressed `Ctrl+D` on an empty buffer.
    Eof,

    /// The user pressed `Ctrl+C`.
    Interrupted,

    /// The terminal was resized.
    Resized(TerminalSize),
}

/// One interactive prompt. Events are processed strictly in order; each call to
/// [`Self::apply()`] runs to completion before the next one.
#[allow(missing_debug_implementations)]
pub struct Session {
    prompt: String,
    terminal_size: TerminalSize,
    bindings: &'static KeyBindingTable,
    buffer: LineBuffer,
    history: History,
    mode: EditorMode,
    transcript: Transcript,
    executor: Box<dyn Executor + Send>,
}

impl Session {
    pub fn new(config: SessionConfig, executor: impl Executor + Send + 'static) -> Self {
        let SessionConfig {
            prompt,
            terminal_size,
            key_bind_mode,
            initial_history,
            history_size_max,
        } = config;

        debug!(
            message = "Session::new",
            ?key_bind_mode,
            history_len = initial_history.len(),
            ?terminal_size
        );

        Self {
            prompt,
            terminal_size,
            bindings: key_bind_mode.binding_table(),
            buffer: LineBuffer::default(),
            history: History::with_entries(history_size_max, initial_history),
            mode: EditorMode::Edit,
            transcript: Transcript::default(),
            executor: Box::new(executor),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn terminal_size(&self) -> TerminalSize { self.terminal_size }

    #[must_use]
    pub fn key_bind_mode(&self) -> KeyBindMode { self.bindings.mode() }

    #[must_use]
    pub fn buffer(&self) -> &LineBuffer { &self.buffer }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    #[must_use]
    pub fn mode(&self) -> &EditorMode { &self.mode }

    #[must_use]
    pub fn is_searching(&self) -> bool { matches!(self.mode, EditorMode::Search(_)) }

    #[must_use]
    pub fn transcript(&self) -> &Transcript { &self.transcript }
}

/// Rendering.
impl Session {
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        match &self.mode {
            EditorMode::Edit => EditorSnapshot {
                prompt: self.prompt.clone(),
                text: self.buffer.text(),
                cursor: self.buffer.cursor(),
            },
            EditorMode::Search(state) => {
                let text = state.display_text(&self.history);
                EditorSnapshot {
                    prompt: state.prefix(),
                    cursor: text.chars().count(),
                    text,
                }
            }
        }
    }

    #[must_use]
    pub fn projection(&self) -> Projection { self.snapshot().project(self.terminal_size.width) }

    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::compose(&self.transcript, &self.projection(), self.terminal_size.height)
    }
}

/// Dispatch.
impl Session {
    /// Process one input event.
    pub fn apply(&mut self, event: InputEvent) -> Option<SessionEvent> {
        trace!(message = "Session::apply", ?event);

        match event {
            InputEvent::Resize(terminal_size) => {
                self.terminal_size = terminal_size;
                Some(SessionEvent::Resized(terminal_size))
            }
            InputEvent::Paste(text) => {
                match &mut self.mode {
                    EditorMode::Edit => self.buffer.insert(&text),
                    EditorMode::Search(state) => state.push_str(&text, &self.history),
                }
                None
            }
            InputEvent::Keyboard(key_press) => {
                if self.is_searching() {
                    self.apply_search_key(key_press)
                } else {
                    self.apply_edit_key(key_press)
                }
            }
        }
    }

    fn apply_edit_key(&mut self, key_press: KeyPress) -> Option<SessionEvent> {
        match self.bindings.lookup(&key_press) {
            Some(op) => self.perform(op),
            None => {
                if let Some(ch) = key_press.printable_char() {
                    self.buffer.insert_char(ch);
                }
                None
            }
        }
    }

    fn apply_search_key(&mut self, key_press: KeyPress) -> Option<SessionEvent> {
        let maybe_op = self.bindings.lookup(&key_press);

        let EditorMode::Search(state) = &mut self.mode else {
            return None;
        };

        match maybe_op {
            Some(EditorOp::EnterSearch) => {
                state.search_again(&self.history);
                None
            }
            Some(EditorOp::EraseBefore) => {
                state.pop_char(&self.history);
                None
            }
            Some(EditorOp::AbortSearch) => {
                self.abort_search();
                None
            }
            Some(EditorOp::Interrupt) => self.interrupt(),
            Some(op) if op.is_navigation() => {
                self.commit_search();
                None
            }
            Some(op) => {
                self.commit_search();
                self.perform(op)
            }
            None => {
                if let Some(ch) = key_press.printable_char() {
                    state.push_char(ch, &self.history);
                }
                None
            }
        }
    }

    /// Run `op` in edit mode.
    fn perform(&mut self, op: EditorOp) -> Option<SessionEvent> {
        match op {
            EditorOp::CursorLeft => self.buffer.move_left(),
            EditorOp::CursorRight => self.buffer.move_right(),
            EditorOp::WordLeft => self.buffer.move_word_left(),
            EditorOp::WordRight => self.buffer.move_word_right(),
            EditorOp::LineStart => self.buffer.move_to_line_start(),
            EditorOp::LineEnd => self.buffer.move_to_line_end(),
            EditorOp::EraseBefore => self.buffer.erase_before(),
            EditorOp::EraseAfter => self.buffer.erase_after(),
            EditorOp::EraseWordBefore => self.buffer.erase_word_before(),
            EditorOp::KillToLineStart => self.buffer.kill_to_line_start(),
            EditorOp::KillToLineEnd => self.buffer.kill_to_line_end(),
            EditorOp::HistoryUp => {
                let current_text = self.buffer.text();
                if let Some(entry) = self.history.navigate_up(&current_text) {
                    self.buffer.set_text(entry);
                }
                trace!(message = "history up", checkpoint = ?self.history.checkpoint());
            }
            EditorOp::HistoryDown => {
                if let Some(text) = self.history.navigate_down() {
                    self.buffer.set_text(&text);
                }
                trace!(message = "history down", checkpoint = ?self.history.checkpoint());
            }
            EditorOp::EnterSearch => {
                self.mode = EditorMode::Search(SearchState::begin(
                    &self.history,
                    self.buffer.clone(),
                ));
                debug!(message = "search entered", history_len = self.history.len());
            }
            EditorOp::AbortSearch => {}
            EditorOp::Submit => return self.submit(),
            EditorOp::Interrupt => return self.interrupt(),
            EditorOp::EndOfInput => {
                if self.buffer.is_empty() {
                    info!(message = "end of input");
                    return Some(SessionEvent::Eof);
                }
                self.buffer.erase_after();
            }
        }
        None
    }
}

/// Transitions.
impl Session {
    /// Take the buffer text, add prompt + text and the executor's output to the
    /// transcript, record the text in history, and start over w/ an empty buffer.
    pub fn submit(&mut self) -> Option<SessionEvent> {
        if self.is_searching() {
            self.commit_search();
        }

        let width = self.terminal_size.width;
        let text = self.buffer.take();

        self.transcript
            .push_rows(project(&self.prompt, width, &text, 0).rows);
        let output = self.executor.execute(&text);
        self.transcript.push_output(&output, width);

        self.history.append(text.clone());
        self.mode = EditorMode::Edit;

        info!(
            message = "line submitted",
            line = %text,
            history_len = self.history.len()
        );

        Some(SessionEvent::Line(text))
    }

    /// Leave search and abandon the buffer. What was on display stays in the transcript.
    fn interrupt(&mut self) -> Option<SessionEvent> {
        let rows = self.projection().rows;
        self.transcript.push_rows(rows);

        self.mode = EditorMode::Edit;
        self.buffer = LineBuffer::default();
        self.history.exit_browsing();

        info!(message = "interrupted");
        Some(SessionEvent::Interrupted)
    }

    /// Load what the search displays into the buffer. With a match, history browsing
    /// continues from the matched entry.
    fn commit_search(&mut self) {
        let EditorMode::Search(state) = std::mem::take(&mut self.mode) else {
            return;
        };

        match state.matched_index() {
            Some(matched_index) => {
                let pending_draft = self
                    .history
                    .checkpoint()
                    .map_or_else(|| state.draft().text(), |it| it.pending_draft.clone());
                self.buffer.set_text(&state.display_text(&self.history));
                self.history.browse_from(matched_index, pending_draft);
            }
            None if state.is_pattern_blank() => self.buffer = state.into_draft(),
            None => {
                self.buffer = LineBuffer::default();
                self.history.exit_browsing();
            }
        }

        debug!(
            message = "search committed",
            checkpoint = ?self.history.checkpoint()
        );
    }

    /// Leave search, restoring the buffer that was live when it began.
    fn abort_search(&mut self) {
        if let EditorMode::Search(state) = std::mem::take(&mut self.mode) {
            self.buffer = state.into_draft();
            debug!(message = "search aborted");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ScreenPos, SpecialKey, keypress};

    fn new_session(mode: KeyBindMode, history: &[&str]) -> Session {
        let config = SessionConfig::default()
            .with_prompt("prompt_app> ")
            .with_key_bind_mode(mode)
            .with_initial_history(history.iter().copied());
        Session::new(config, |line: &str| format!("cmd: {line}"))
    }

    fn press(session: &mut Session, key_press: KeyPress) -> Option<SessionEvent> {
        session.apply(InputEvent::Keyboard(key_press))
    }

    #[test]
    fn test_empty_session() {
        let session = new_session(KeyBindMode::Default, &[]);
        assert_eq!(session.projection().cursor, ScreenPos::new(12, 0));
        assert_eq!(session.screen().dump(), "prompt_app>");
        assert_eq!(session.key_bind_mode(), KeyBindMode::Default);
    }

    #[test]
    fn test_unbound_keys_are_noops() {
        let mut session = new_session(KeyBindMode::Default, &[]);
        session.apply(InputEvent::Paste("abc".into()));
        let before = session.buffer().clone();
        for key_press in [
            keypress!(@ctrl 'z'),
            keypress!(@alt 'x'),
            keypress!(@special SpecialKey::Insert),
            keypress!(@special SpecialKey::PageUp),
            keypress!(@char '\u{1b}'),
            // Emacs only binding, not active in the default table.
            keypress!(@ctrl 'a'),
        ] {
            assert_eq!(press(&mut session, key_press), None);
        }
        assert_eq!(session.buffer(), &before);
    }

    #[test]
    fn test_tab_key_inserts_tab() {
        let mut session = new_session(KeyBindMode::Default, &[]);
        press(&mut session, keypress!(@char 'a'));
        press(&mut session, keypress!(@special SpecialKey::Tab));
        press(&mut session, keypress!(@char 'b'));
        assert_eq!(session.buffer().text(), "a\tb");
        assert_eq!(session.screen().dump(), "prompt_app> a    b");
    }

    #[test]
    fn test_ctrl_d() {
        let mut session = new_session(KeyBindMode::Default, &[]);
        session.apply(InputEvent::Paste("ab".into()));
        press(&mut session, keypress!(@special SpecialKey::Left));
        assert_eq!(press(&mut session, keypress!(@ctrl 'd')), None);
        assert_eq!(session.buffer().text(), "a");

        press(&mut session, keypress!(@special SpecialKey::Backspace));
        assert_eq!(press(&mut session, keypress!(@ctrl 'd')), Some(SessionEvent::Eof));
    }

    #[test]
    fn test_ctrl_c_clears_buffer_and_keeps_line_on_screen() {
        let mut session = new_session(KeyBindMode::Default, &["old"]);
        session.apply(InputEvent::Paste("typo".into()));
        press(&mut session, keypress!(@special SpecialKey::Up));
        assert!(session.history().is_browsing());

        assert_eq!(
            press(&mut session, keypress!(@ctrl 'c')),
            Some(SessionEvent::Interrupted)
        );
        assert!(session.buffer().is_empty());
        assert!(!session.history().is_browsing());
        assert_eq!(session.screen().dump(), "prompt_app> old\nprompt_app>");
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_resize() {
        let mut session = new_session(KeyBindMode::Default, &[]);
        session.apply(InputEvent::Paste("0123456789".into()));
        let size = TerminalSize::new(10, 5);
        assert_eq!(
            session.apply(InputEvent::Resize(size)),
            Some(SessionEvent::Resized(size))
        );
        assert_eq!(session.projection().rows, ["prompt_app", "> 01234567", "89"]);
        assert_eq!(session.projection().cursor, ScreenPos::new(2, 2));
    }

    #[test]
    fn test_abort_search_restores_draft() {
        let mut session = new_session(KeyBindMode::Default, &["print(C)"]);
        session.apply(InputEvent::Paste("draft".into()));
        press(&mut session, keypress!(@special SpecialKey::Left));
        press(&mut session, keypress!(@ctrl 'r'));
        session.apply(InputEvent::Paste("print".into()));
        assert_eq!(session.snapshot().text, "print(C)");

        press(&mut session, keypress!(@ctrl 'g'));
        assert!(!session.is_searching());
        assert_eq!(session.buffer().text(), "draft");
        assert_eq!(session.buffer().cursor(), 4);
    }

    #[test]
    fn test_search_backspace_edits_pattern() {
        let mut session = new_session(KeyBindMode::Default, &["yuk#"]);
        press(&mut session, keypress!(@ctrl 'r'));
        for ch in "yukx".chars() {
            press(&mut session, keypress!(@char ch));
        }
        assert_eq!(session.snapshot().prompt, "(failed reverse-i-search)`yukx':");
        press(&mut session, keypress!(@special SpecialKey::Backspace));
        assert_eq!(session.snapshot().prompt, "(reverse-i-search)`yuk':");
        assert_eq!(session.snapshot().text, "yuk#");
    }

    #[test]
    fn test_other_bound_op_in_search_commits_then_runs() {
        let mut session = new_session(KeyBindMode::Default, &["hello world"]);
        press(&mut session, keypress!(@ctrl 'r'));
        session.apply(InputEvent::Paste("hello".into()));
        press(&mut session, keypress!(@ctrl 'w'));
        assert!(!session.is_searching());
        assert_eq!(session.buffer().text(), "hello ");
    }

    #[test]
    fn test_search_commit_with_blank_pattern_restores_draft() {
        let mut session = new_session(KeyBindMode::Default, &["a"]);
        session.apply(InputEvent::Paste("Some-текст".into()));
        press(&mut session, keypress!(@ctrl 'r'));
        press(&mut session, keypress!(@special SpecialKey::Right));
        assert_eq!(session.buffer().text(), "Some-текст");
        assert!(!session.history().is_browsing());
    }
}
