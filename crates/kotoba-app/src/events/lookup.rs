use std::sync::Arc;

use kanal::AsyncSender;
use kotoba_core::{LookupOutcome, Session};
use kotoba_dictionary::DictionaryEntry;
use kotoba_types::{AppEvent, DisplayResult, Token};

pub async fn handle_lookup(
    session: Arc<Session>,
    token: Token,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.lookup(&token).await {
        Ok(LookupOutcome::Applied(Some(entry))) => {
            app_to_ui_tx
                .send(AppEvent::ShowResult(display_result(entry)))
                .await?;
        }
        Ok(LookupOutcome::Applied(None)) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!(
                    "No dictionary entry for {}",
                    token.base_form
                )))
                .await?;
        }
        Ok(LookupOutcome::Stale) => {
            tracing::debug!("Lookup for '{}' superseded", token.base_form);
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Lookup failed: {e}")))
                .await?;
        }
    }
    Ok(())
}

pub fn display_result(entry: DictionaryEntry) -> DisplayResult {
    DisplayResult {
        term: entry.word,
        reading: entry.reading,
        definitions: entry.meanings,
        part_of_speech: entry.part_of_speech.join(", "),
        jlpt_level: entry.jlpt,
    }
}
