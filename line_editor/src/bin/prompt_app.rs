// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo: every submitted line is echoed back as `cmd: <line>`. Exit w/
//! `Ctrl+D` on an empty line.
//!
//! ```text
//! prompt_app 'print(C);print(D)' --key-bind-mode emacs --enable-logging
//! ```

use std::sync::Arc;

use clap::{Args, Parser};
use crossterm::event::EventStream;
use r3bl_line_editor::{KeyBindMode, LineEditorError, PinnedInputStream, RawModeGuard,
                       Readline, SafeRawTerminal, Session, SessionConfig, SessionEvent,
                       StdMutex, TerminalSize, TracingConfig, ok,
                       try_initialize_logging_global};
use tracing::info;

#[derive(Debug, Parser)]
#[command(bin_name = "prompt_app")]
#[command(about = "Readline style prompt that echoes each submitted line")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
pub struct CLIArg {
    /// History entries to start with, oldest first, separated by `;`.
    #[arg(name = "history")]
    pub history: Option<String>,

    #[arg(long, default_value = "prompt_app> ", help = "Prompt shown before the input")]
    pub prompt: String,

    #[arg(
        long,
        short = 'k',
        help = "Key binding table: `default` or `emacs`. Defaults to `emacs` when the `emacs` feature is on"
    )]
    pub key_bind_mode: Option<KeyBindMode>,

    #[arg(long, help = "Override the terminal width (columns)")]
    pub width: Option<u16>,

    #[arg(long, help = "Override the terminal height (rows)")]
    pub height: Option<u16>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, help = "Log file path, used w/ --enable-logging")]
    pub log_file: Option<String>,
}

impl CLIArg {
    fn history_entries(&self) -> Vec<String> {
        self.history
            .as_deref()
            .map(|it| it.split(';').map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn terminal_size(&self) -> TerminalSize {
        let (detected_width, detected_height) =
            crossterm::terminal::size().unwrap_or((80, 24));
        TerminalSize::new(
            usize::from(self.width.unwrap_or(detected_width)),
            usize::from(self.height.unwrap_or(detected_height)),
        )
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(
            cli_arg.global_options.log_file.clone(),
        ))?;
    }

    let mut config = SessionConfig::default()
        .with_prompt(cli_arg.prompt.clone())
        .with_terminal_size(cli_arg.terminal_size())
        .with_initial_history(cli_arg.history_entries());
    if let Some(key_bind_mode) = cli_arg.key_bind_mode {
        config = config.with_key_bind_mode(key_bind_mode);
    }
    info!(message = "prompt_app start", ?config);

    let session = Session::new(config, |line: &str| format!("cmd: {line}"));

    let output_device: SafeRawTerminal = Arc::new(StdMutex::new(std::io::stdout()));
    let input_stream: PinnedInputStream = Box::pin(EventStream::new());

    // Dropped last, after the readline has moved the cursor below the prompt.
    let _raw_mode_guard = RawModeGuard::try_new(output_device.clone())?;
    let mut readline = Readline::try_new(session, input_stream, output_device)?;

    loop {
        match readline.readline().await {
            Ok(SessionEvent::Eof) | Err(LineEditorError::Closed) => break,
            Ok(SessionEvent::Line(_) | SessionEvent::Interrupted | SessionEvent::Resized(_)) => {}
            Err(error) => return Err(error.into()),
        }
    }

    info!(message = "prompt_app exit");
    ok!()
}
