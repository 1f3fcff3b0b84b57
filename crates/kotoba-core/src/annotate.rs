use futures_util::future::join_all;
use kotoba_types::{ReadingStyle, Token, contains_kanji};

use crate::engine::{ConvertOptions, Converter};

/// Furigana markup for one piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub text: String,
    pub markup: String,
    /// The conversion engine failed and `markup` is the plain text
    pub degraded: bool,
}

impl Annotation {
    pub fn plain(text: &str, degraded: bool) -> Self {
        Self {
            text: text.to_string(),
            markup: text.to_string(),
            degraded,
        }
    }
}

/// Annotate `text` in `style`, skipping the engine when there is no kanji
pub async fn annotate(converter: &dyn Converter, text: &str, style: ReadingStyle) -> Annotation {
    if !contains_kanji(text) {
        return Annotation::plain(text, false);
    }

    match converter.convert(text, &ConvertOptions::furigana(style)).await {
        Ok(markup) => Annotation {
            text: text.to_string(),
            markup,
            degraded: false,
        },
        Err(e) => {
            tracing::warn!(text, %style, "Annotation failed, using plain text: {}", e);
            Annotation::plain(text, true)
        }
    }
}

/// Annotate every token's surface concurrently, preserving token order
pub async fn annotate_tokens(
    converter: &dyn Converter,
    tokens: &[Token],
    style: ReadingStyle,
) -> Vec<Annotation> {
    join_all(
        tokens
            .iter()
            .map(|token| annotate(converter, &token.surface_form, style)),
    )
    .await
}
