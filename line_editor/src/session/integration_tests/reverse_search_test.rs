// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::test_helpers::{HISTORY, PromptApp};
    use crate::{KeyBindMode, SessionEvent, SpecialKey, keypress};

    fn start_search_from_oldest_print() -> PromptApp {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.type_text("Some-текст");
        app.press(keypress!(@ctrl 'r'));
        assert_eq!(app.dump(), "(reverse-i-search)`':Some-текст");

        app.type_text("print(");
        assert_eq!(
            app.dump(),
            "(reverse-i-search)`print(':if a then\n \
             print(x)\n\
             else\n\
             print(y)"
        );

        app.press(keypress!(@ctrl 'r'));
        assert_eq!(app.dump(), "(reverse-i-search)`print(':print(D)");

        app.press(keypress!(@ctrl 'r'));
        assert_eq!(app.dump(), "(reverse-i-search)`print(':print(C)");

        // Navigation keys end the search w/o moving.
        app.press(keypress!(@special SpecialKey::Left));
        assert_eq!(app.dump(), "prompt_app> print(C)");
        assert_eq!(app.cursor(), (20, 0));

        // Browsing continues from the match.
        for entry in &HISTORY[1..] {
            app.press(keypress!(@special SpecialKey::Down));
            assert_eq!(app.dump(), format!("prompt_app> {entry}"));
        }

        app
    }

    #[test]
    fn test_reverse_search_never_matched() {
        let mut app = start_search_from_oldest_print();

        app.press(keypress!(@ctrl 'r'));
        app.type_text("zzz not matched");
        app.press_n(keypress!(@ctrl 'r'), 3);
        assert_eq!(app.dump(), "(failed reverse-i-search)`zzz not matched':");

        app.press(keypress!(@special SpecialKey::Up));
        assert_eq!(app.dump(), "prompt_app>");
        assert!(!app.session.history().is_browsing());
    }

    #[test]
    fn test_reverse_search_failure_keeps_last_match() {
        let mut app = start_search_from_oldest_print();

        // "n" matches the newest entry, "no" matches nothing.
        app.press(keypress!(@ctrl 'r'));
        app.type_text("not matched with any");
        app.press_n(keypress!(@ctrl 'r'), 3);
        assert_eq!(
            app.dump(),
            format!("(failed reverse-i-search)`not matched with any':{}", HISTORY[7])
        );

        app.press(keypress!(@special SpecialKey::Up));
        assert_eq!(app.dump(), format!("prompt_app> {}", HISTORY[7]));

        // The draft from before the first search is still pending.
        app.press(keypress!(@special SpecialKey::Down));
        assert_eq!(app.dump(), "prompt_app> Some-текст");
    }

    #[test]
    fn test_enter_reverse_search() {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.press(keypress!(@ctrl 'r'));
        app.type_text("print(");
        let event = app.press(keypress!(@special SpecialKey::Enter));
        assert_eq!(event, Some(SessionEvent::Line(HISTORY[6].into())));

        assert_eq!(
            app.dump(),
            "prompt_app> if a then\n \
             print(x)\n\
             else\n\
             print(y)\n\
             cmd: if a then\n \
             print(x)\n\
             else\n\
             print(y)\n\
             prompt_app>"
        );
        assert!(!app.session.is_searching());
    }

    #[test]
    fn test_paste_extends_pattern() {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.press(keypress!(@ctrl 'r'));
        app.paste("yuk");
        assert_eq!(app.dump(), "(reverse-i-search)`yuk':yuk#");
        assert_eq!(app.cursor(), (28, 0));
    }

    #[test]
    fn test_blank_pattern_commit_restores_draft() {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.type_text("draft");
        app.press(keypress!(@ctrl 'r'));
        app.type_text("  ");
        assert_eq!(app.dump(), "(reverse-i-search)`  ':draft");

        app.press(keypress!(@special SpecialKey::Home));
        assert_eq!(app.dump(), "prompt_app> draft");
        assert_eq!(app.cursor(), (17, 0));
    }

    #[test]
    fn test_abort_search() {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.type_text("draft");
        app.press(keypress!(@ctrl 'r'));
        app.type_text("yuk");
        app.press(keypress!(@special SpecialKey::Esc));
        assert_eq!(app.dump(), "prompt_app> draft");
        assert!(!app.session.history().is_browsing());
    }

    #[test]
    fn test_ctrl_c_in_search() {
        let mut app = PromptApp::with_history(KeyBindMode::Default, &HISTORY);
        app.press(keypress!(@ctrl 'r'));
        app.type_text("yuk");
        let event = app.press(keypress!(@ctrl 'c'));
        assert_eq!(event, Some(SessionEvent::Interrupted));
        assert_eq!(app.dump(), "(reverse-i-search)`yuk':yuk#\nprompt_app>");
    }
}
