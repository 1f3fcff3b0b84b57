use kotoba_types::Token;

use crate::engine::RawFeature;

impl From<RawFeature> for Token {
    fn from(feature: RawFeature) -> Self {
        let base_form = feature
            .basic_form
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| feature.surface_form.clone());

        Token {
            reading: feature.reading.unwrap_or_default(),
            pos: feature.pos,
            base_form,
            surface_form: feature.surface_form,
        }
    }
}

/// Map analyzer output to tokens, dropping empty morphemes
pub fn format_tokens(features: Vec<RawFeature>) -> Vec<Token> {
    features
        .into_iter()
        .filter(|f| {
            if f.surface_form.is_empty() {
                tracing::debug!("Skipping empty morpheme: {:?}", f);
                return false;
            }
            true
        })
        .map(Token::from)
        .collect()
}
