use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use kotoba_types::{AppEvent, Token};

use crate::state::AppState;

pub mod lookup;
pub mod text_input;

use lookup::handle_lookup;
use text_input::handle_text_input;

/// App's main loop. Returns when a `Quit` event arrives.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match state.session.init().await {
        Ok(()) => app_to_ui_tx.send(AppEvent::BackendReady).await?,
        Err(e) => {
            tracing::error!("Session initialization failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Engines unavailable: {e}")))
                .await?;
        }
    }

    // tokens of the last analysis, addressed by `Lookup(index)`
    let mut tokens: Vec<Token> = Vec::new();

    tracing::info!("Event loop started");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));

        match event {
            AppEvent::TextInput(text) => {
                tokens = handle_text_input(&state, &text, &app_to_ui_tx).await?;
            }
            AppEvent::Lookup(index) => match tokens.get(index) {
                Some(token) => {
                    // lookups run detached so a newer one can supersede them
                    let session = state.session.clone();
                    let token = token.clone();
                    let tx = app_to_ui_tx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = handle_lookup(session, token, &tx).await {
                            tracing::error!("Lookup handler failed: {}", e);
                        }
                    });
                }
                None => {
                    app_to_ui_tx
                        .send(AppEvent::StatusUpdate(format!("No token #{index}")))
                        .await?;
                }
            },
            AppEvent::SetReadingStyle(style) => {
                state.session.set_reading_style(style).await;
                app_to_ui_tx
                    .send(AppEvent::StatusUpdate(format!("Reading style: {style}")))
                    .await?;
            }
            AppEvent::Quit => {
                tracing::info!("Quit requested");
                return Ok(());
            }
            AppEvent::ShowTokens(_)
            | AppEvent::ShowResult(_)
            | AppEvent::StatusUpdate(_)
            | AppEvent::BackendReady => {
                // UI-only events, ignore in backend
            }
        }
    }
}
