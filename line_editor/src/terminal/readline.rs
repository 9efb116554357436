// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures_util::StreamExt;
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use super::{TerminalRenderer, convert_crossterm_event_to_input_event};
use crate::{CHANNEL_CAPACITY, InputEvent, LineEditorError, PinnedInputStream,
            SafeRawTerminal, Session, SessionEvent, lock_output_device_as_mut};

/// # Mental model and overview
///
/// This is a replacement for a [`std::io::BufRead::read_line`] function that drives a
/// [`Session`]. It is async. Call [`Self::readline()`] in a loop; each call processes
/// input events until the session produces a [`SessionEvent`].
///
/// # Inputs and dependency injection
///
/// There are 2 resources that must be passed into [`Self::try_new()`]:
/// 1. A [`PinnedInputStream`], typically `crossterm::event::EventStream`. A task is
///    spawned that converts its events and sends them over a channel to this struct.
/// 2. A [`SafeRawTerminal`], typically [`std::io::Stdout`], that frames are painted on.
///
/// Raw mode is not managed here, see [`crate::RawModeGuard`].
#[allow(missing_debug_implementations)]
pub struct Readline {
    session: Session,
    renderer: TerminalRenderer,
    output_device: SafeRawTerminal,
    input_event_receiver: mpsc::Receiver<InputEvent>,
    input_task: JoinHandle<()>,
}

impl Readline {
    /// Spawn the input task and paint the initial prompt. Must be called from within a
    /// tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if painting the prompt fails.
    pub fn try_new(
        session: Session,
        input_stream: PinnedInputStream,
        output_device: SafeRawTerminal,
    ) -> Result<Self, LineEditorError> {
        let (input_event_sender, input_event_receiver) =
            mpsc::channel::<InputEvent>(CHANNEL_CAPACITY);
        let input_task = spawn_input_task(input_stream, input_event_sender);

        let mut renderer = TerminalRenderer::default();
        {
            let term = lock_output_device_as_mut!(output_device);
            renderer.render(&session, term)?;
        } // Drop the term lock.

        Ok(Self {
            session,
            renderer,
            output_device,
            input_event_receiver,
            input_task,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session { &self.session }

    /// Apply input events to the session, repainting after each one, until it produces a
    /// [`SessionEvent`].
    ///
    /// # Errors
    ///
    /// - [`LineEditorError::Closed`] once the input stream has ended and every event it
    ///   produced has been processed.
    /// - [`LineEditorError::IO`] if painting fails.
    pub async fn readline(&mut self) -> Result<SessionEvent, LineEditorError> {
        loop {
            let Some(input_event) = self.input_event_receiver.recv().await else {
                debug!(message = "input event channel closed");
                return Err(LineEditorError::Closed);
            };

            let maybe_session_event = self.session.apply(input_event);

            {
                let term = lock_output_device_as_mut!(self.output_device);
                self.renderer.render(&self.session, term)?;
            } // Drop the term lock.

            if let Some(session_event) = maybe_session_event {
                return Ok(session_event);
            }
        }
    }
}

impl Drop for Readline {
    fn drop(&mut self) {
        self.input_task.abort();
        if let Ok(mut term) = self.output_device.lock() {
            // We don't care about the result of this operation.
            self.renderer.finish(&mut *term).ok();
        }
    }
}

/// Forward converted events from `input_stream` to `sender` until the stream ends,
/// yields an error, or the receiver is dropped.
pub fn spawn_input_task(
    mut input_stream: PinnedInputStream,
    sender: mpsc::Sender<InputEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(result_event) = input_stream.next().await {
            let event = match result_event {
                Ok(event) => event,
                Err(error) => {
                    warn!(message = "input stream error", ?error);
                    break;
                }
            };
            let Some(input_event) = convert_crossterm_event_to_input_event(event) else {
                continue;
            };
            if sender.send(input_event).await.is_err() {
                break;
            }
        }
    })
}
