// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::super::test_helpers::PromptApp;
    use crate::{KeyBindMode, KeyPress, SessionEvent, SpecialKey, keypress};

    #[test]
    fn test_launch() {
        let app = PromptApp::new(KeyBindMode::Default);
        assert_eq!(app.cursor(), (12, 0));
        assert_eq!(app.dump(), "prompt_app>");
    }

    #[test]
    fn test_input_text() {
        let mut app = PromptApp::new(KeyBindMode::Default);

        app.type_text("cmd");
        assert_eq!(app.cursor(), (15, 0));

        let event = app.press(keypress!(@special SpecialKey::Enter));
        assert_eq!(event, Some(SessionEvent::Line("cmd".into())));
        assert_eq!(app.cursor(), (12, 2));

        app.type_text("русский язык");
        assert_eq!(app.cursor(), (24, 2));

        assert_eq!(
            app.dump(),
            "prompt_app> cmd\n\
             cmd: cmd\n\
             prompt_app> русский язык"
        );
    }

    #[test_case(KeyBindMode::Default, keypress!(@special SpecialKey::Backspace) ; "backspace default")]
    #[test_case(KeyBindMode::Emacs, keypress!(@special SpecialKey::Backspace) ; "backspace emacs")]
    #[test_case(KeyBindMode::Emacs, keypress!(@ctrl 'h') ; "ctrl h emacs")]
    fn test_remove_text(key_bind_mode: KeyBindMode, erase_key: KeyPress) {
        let mut app = PromptApp::new(key_bind_mode);
        app.type_text("##### e хай hello");
        app.press_n(keypress!(@special SpecialKey::Left), 9);
        app.press_n(erase_key, 7);
        assert_eq!(app.cursor(), (13, 0));
        assert_eq!(app.dump(), "prompt_app> #хай hello");

        app.press_n(erase_key, 2);
        assert_eq!(app.cursor(), (12, 0));
        assert_eq!(app.dump(), "prompt_app> хай hello");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut app = PromptApp::new(KeyBindMode::Default);
        app.type_text("hello");
        app.press_n(keypress!(@special SpecialKey::Left), 5);
        app.press_n(keypress!(@special SpecialKey::Delete), 2);
        assert_eq!(app.dump(), "prompt_app> llo");
        assert_eq!(app.cursor(), (12, 0));

        // At the end of the buffer it does nothing.
        app.press(keypress!(@special SpecialKey::End));
        app.press(keypress!(@special SpecialKey::Delete));
        assert_eq!(app.dump(), "prompt_app> llo");
    }

    #[test]
    fn test_erase_word_before() {
        let mut app = PromptApp::new(KeyBindMode::Default);
        app.type_text("git commit  -m");
        app.press(keypress!(@ctrl 'w'));
        assert_eq!(app.dump(), "prompt_app> git commit");
        app.press(keypress!(@ctrl 'w'));
        assert_eq!(app.dump(), "prompt_app> git");
        assert_eq!(app.cursor(), (16, 0));
    }

    #[test]
    fn test_empty_submit() {
        let mut app = PromptApp::new(KeyBindMode::Default);
        let event = app.press(keypress!(@special SpecialKey::Enter));
        assert_eq!(event, Some(SessionEvent::Line(String::new())));
        assert_eq!(app.dump(), "prompt_app>\ncmd:\nprompt_app>");
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_console_not_broken() {
        let mut app = PromptApp::new(KeyBindMode::Default);
        app.type_text("exit");
        app.type_text("text");
        assert_eq!(app.dump(), "prompt_app> exittext");
    }
}
