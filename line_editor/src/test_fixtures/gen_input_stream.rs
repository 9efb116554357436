// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::PinnedInputStream;

/// Yield every item of `generator_vec`, then end. Stands in for
/// `crossterm::event::EventStream`.
pub fn gen_input_stream(generator_vec: Vec<io::Result<Event>>) -> PinnedInputStream {
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

/// One key press event per code point of `text`, as a terminal in raw mode sends them.
pub fn gen_typed_text(text: &str) -> Vec<io::Result<Event>> {
    text.chars()
        .map(|ch| Ok(gen_key_event(KeyCode::Char(ch), KeyModifiers::NONE)))
        .collect()
}

pub fn gen_key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;

    use super::*;

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(gen_typed_text("abc"));
        for _ in 1..=3 {
            assert!(matches!(input_stream.next().await, Some(Ok(Event::Key(_)))));
        }
        assert!(input_stream.next().await.is_none());
    }
}
