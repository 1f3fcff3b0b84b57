use kotoba_dictionary::{DictionaryEntry, DictionaryProvider, format_all, resolve};
use kotoba_types::Token;

/// Search the provider and pick the best entry; provider faults read as "not found"
pub async fn search_word(
    provider: &dyn DictionaryProvider,
    word: &str,
    pos_hint: Option<&str>,
) -> Option<DictionaryEntry> {
    match provider.search(word).await {
        Ok(candidates) => {
            tracing::debug!(
                provider = provider.name(),
                word,
                "{} candidates",
                candidates.len()
            );
            resolve(word, pos_hint, &candidates)
        }
        Err(e) => {
            tracing::warn!(provider = provider.name(), word, "Lookup failed: {}", e);
            None
        }
    }
}

/// Look a token up by its base form, then by its surface form if that differs
pub async fn lookup_token(
    provider: &dyn DictionaryProvider,
    token: &Token,
) -> Option<DictionaryEntry> {
    let pos_hint = Some(token.pos.as_str());

    if let Some(entry) = search_word(provider, &token.base_form, pos_hint).await {
        return Some(entry);
    }

    if token.is_inflected() {
        tracing::debug!(
            base = %token.base_form,
            surface = %token.surface_form,
            "Base form not found, retrying with surface form"
        );
        return search_word(provider, &token.surface_form, pos_hint).await;
    }

    None
}

/// Every candidate for a token, in provider order, unscored.
///
/// Follows the same base-then-surface chain as [`lookup_token`]; the surface
/// form is only tried when the base form yields nothing.
pub async fn list_token(provider: &dyn DictionaryProvider, token: &Token) -> Vec<DictionaryEntry> {
    let mut words = vec![token.base_form.as_str()];
    if token.is_inflected() {
        words.push(&token.surface_form);
    }

    for word in words {
        match provider.search(word).await {
            Ok(candidates) if !candidates.is_empty() => return format_all(&candidates),
            Ok(_) => {}
            Err(e) => tracing::warn!(provider = provider.name(), word, "Lookup failed: {}", e),
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::mocks::{MockProvider, entry_candidate};

    fn tabeta() -> Token {
        Token {
            surface_form: "食べた".to_string(),
            reading: "タベタ".to_string(),
            pos: "動詞".to_string(),
            base_form: "食べる".to_string(),
        }
    }

    #[tokio::test]
    async fn base_form_hit_skips_surface() {
        let provider = MockProvider::new()
            .with("食べる", vec![entry_candidate("食べる", "たべる", "to eat")])
            .with("食べた", vec![entry_candidate("食べた", "たべた", "ate")]);

        let entry = lookup_token(&provider, &tabeta()).await.unwrap();
        assert_eq!(entry.word, "食べる");
        assert_eq!(provider.calls(), vec!["食べる"]);
    }

    #[tokio::test]
    async fn base_form_miss_falls_back_to_surface() {
        let provider =
            MockProvider::new().with("食べた", vec![entry_candidate("食べた", "たべた", "ate")]);

        let entry = lookup_token(&provider, &tabeta()).await.unwrap();
        assert_eq!(entry.word, "食べた");
        assert_eq!(provider.calls(), vec!["食べる", "食べた"]);
    }

    #[tokio::test]
    async fn uninflected_token_is_searched_once() {
        let provider = MockProvider::new();
        let token = Token {
            surface_form: "犬".to_string(),
            reading: "イヌ".to_string(),
            pos: "名詞".to_string(),
            base_form: "犬".to_string(),
        };

        assert_eq!(lookup_token(&provider, &token).await, None);
        assert_eq!(provider.calls(), vec!["犬"]);
    }

    #[tokio::test]
    async fn provider_failure_reads_as_not_found() {
        let provider = MockProvider::new().failing_on("食べる");

        assert_eq!(search_word(&provider, "食べる", None).await, None);
        // a failed base-form search still falls back
        assert_eq!(lookup_token(&provider, &tabeta()).await, None);
        assert_eq!(provider.calls(), vec!["食べる", "食べる", "食べた"]);
    }

    #[tokio::test]
    async fn listing_keeps_every_candidate_in_order() {
        let provider = MockProvider::new().with(
            "食べる",
            vec![
                entry_candidate("食べる", "たべる", "to eat"),
                entry_candidate("喰べる", "たべる", "to eat (rare)"),
            ],
        );

        let entries = list_token(&provider, &tabeta()).await;
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["食べる", "喰べる"]);
        assert_eq!(provider.calls(), vec!["食べる"]);
    }

    #[tokio::test]
    async fn listing_falls_back_to_surface() {
        let provider = MockProvider::new()
            .failing_on("食べる")
            .with("食べた", vec![entry_candidate("食べた", "たべた", "ate")]);

        let entries = list_token(&provider, &tabeta()).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meanings, vec!["ate"]);
        assert_eq!(provider.calls(), vec!["食べる", "食べた"]);
    }
}
