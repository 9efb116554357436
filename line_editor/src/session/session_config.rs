// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HISTORY_SIZE_MAX, KeyBindMode, TerminalSize};

pub const DEFAULT_PROMPT: &str = "> ";

/// Everything a [`crate::Session`] is configured with. Nothing here can change after the
/// session is created, except the terminal size (on resize).
///
/// ```
/// use r3bl_line_editor::*;
///
/// let config = SessionConfig::default()
///     .with_prompt("prompt_app> ")
///     .with_key_bind_mode(KeyBindMode::Emacs)
///     .with_initial_history(["print(C)", "print(D)"]);
/// assert_eq!(config.initial_history.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub prompt: String,
    pub terminal_size: TerminalSize,
    pub key_bind_mode: KeyBindMode,
    /// Oldest first. Loaded verbatim.
    pub initial_history: Vec<String>,
    pub history_size_max: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            terminal_size: TerminalSize::default(),
            key_bind_mode: KeyBindMode::default(),
            initial_history: vec![],
            history_size_max: HISTORY_SIZE_MAX,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_terminal_size(mut self, terminal_size: TerminalSize) -> Self {
        self.terminal_size = terminal_size;
        self
    }

    #[must_use]
    pub fn with_key_bind_mode(mut self, key_bind_mode: KeyBindMode) -> Self {
        self.key_bind_mode = key_bind_mode;
        self
    }

    #[must_use]
    pub fn with_initial_history(
        mut self,
        entries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.initial_history = entries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_history_size_max(mut self, history_size_max: usize) -> Self {
        self.history_size_max = history_size_max;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default() {
        let config = SessionConfig::default();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.terminal_size, TerminalSize::new(80, 24));
        assert_eq!(config.key_bind_mode, KeyBindMode::default());
        assert!(config.initial_history.is_empty());
        assert_eq!(config.history_size_max, HISTORY_SIZE_MAX);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default()
            .with_prompt(String::from("$ "))
            .with_terminal_size(TerminalSize::new(100, 30))
            .with_key_bind_mode(KeyBindMode::Default)
            .with_initial_history(vec!["a".to_string()])
            .with_history_size_max(5);
        assert_eq!(
            config,
            SessionConfig {
                prompt: "$ ".into(),
                terminal_size: TerminalSize::new(100, 30),
                key_bind_mode: KeyBindMode::Default,
                initial_history: vec!["a".into()],
                history_size_max: 5,
            }
        );
    }
}
