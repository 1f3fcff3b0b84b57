use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_types::{AppEvent, ReadingStyle};
use tokio_util::sync::CancellationToken;

/// Map one line of user input to an event.
///
/// Lines starting with `:` are commands; anything else is text to analyze.
/// Blank lines produce nothing.
pub fn parse_line(line: &str) -> Result<Option<AppEvent>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(command) = line.strip_prefix(':') else {
        return Ok(Some(AppEvent::TextInput(line.to_string())));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "q" | "quit" => Ok(Some(AppEvent::Quit)),
        "l" | "lookup" => arg
            .parse::<usize>()
            .map(|index| Some(AppEvent::Lookup(index)))
            .map_err(|_| format!("Usage: :lookup <token index>, got '{arg}'")),
        "s" | "style" => arg
            .parse::<ReadingStyle>()
            .map(|style| Some(AppEvent::SetReadingStyle(style)))
            .map_err(|e| e.to_string()),
        other => Err(format!("Unknown command ':{other}'")),
    }
}

/// Forward input lines to the app until the source closes or cancellation.
///
/// A closed source is reported as `Quit`; malformed commands go to the UI
/// as a status.
pub async fn watch_lines(
    lines: AsyncReceiver<String>,
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let line = tokio::select! {
            line = lines.recv() => line.ok(),
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::info!("Input closed");
            ui_to_app_tx.send(AppEvent::Quit).await?;
            return Ok(());
        };

        match parse_line(&line) {
            Ok(Some(event)) => ui_to_app_tx.send(event).await?,
            Ok(None) => {}
            Err(message) => app_to_ui_tx.send(AppEvent::StatusUpdate(message)).await?,
        }
    }
}

/// Blocking stdin reads live on their own thread; a pending read would
/// otherwise hold up runtime shutdown.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (tx, rx) = kanal::bounded(16);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx.to_async()
}

pub async fn watcher_io(
    cancel: CancellationToken,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Reading text from stdin");
    watch_lines(spawn_stdin_reader(), cancel, ui_to_app_tx, app_to_ui_tx).await
}
