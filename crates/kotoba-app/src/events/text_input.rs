use kanal::AsyncSender;
use kotoba_core::Annotation;
use kotoba_types::{AppEvent, DisplayToken, Token};

use crate::state::AppState;

/// Analyze and annotate `text`, then send the token row to the UI.
///
/// Returns the tokens shown, so later lookups can address them by index.
pub async fn handle_text_input(
    state: &AppState,
    text: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Vec<Token>> {
    let (show_furigana, max_tokens) = {
        let config = state.config.read().await;
        (config.ui.show_furigana, config.ui.max_tokens)
    };

    let mut tokens = match state.session.analyze(text).await {
        Ok(tokens) => tokens,
        Err(e) => {
            tracing::warn!("Analysis failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::StatusUpdate(format!("Analysis failed: {e}")))
                .await?;
            return Ok(Vec::new());
        }
    };
    tracing::debug!("Tokenized into {} tokens", tokens.len());

    if tokens.len() > max_tokens {
        tracing::debug!("Showing first {} of {} tokens", max_tokens, tokens.len());
        tokens.truncate(max_tokens);
    }

    let annotations = if show_furigana {
        match state.session.annotate_tokens(&tokens).await {
            Ok(annotations) => annotations,
            Err(e) => {
                tracing::warn!("Annotation unavailable: {}", e);
                plain(&tokens)
            }
        }
    } else {
        plain(&tokens)
    };

    app_to_ui_tx
        .send(AppEvent::ShowTokens(display_tokens(&tokens, annotations)))
        .await?;
    Ok(tokens)
}

fn plain(tokens: &[Token]) -> Vec<Annotation> {
    tokens
        .iter()
        .map(|token| Annotation::plain(&token.surface_form, false))
        .collect()
}

pub fn display_tokens(tokens: &[Token], annotations: Vec<Annotation>) -> Vec<DisplayToken> {
    tokens
        .iter()
        .zip(annotations)
        .enumerate()
        .map(|(index, (token, annotation))| DisplayToken {
            index,
            surface: token.surface_form.clone(),
            markup: annotation.markup,
            pos: token.pos.clone(),
            base_form: token.is_inflected().then(|| token.base_form.clone()),
            degraded: annotation.degraded,
        })
        .collect()
}
