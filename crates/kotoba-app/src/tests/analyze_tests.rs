use kotoba_config::Config;

use crate::tests::mocks::{MockLoader, MockProvider, app_state};
use crate::{LookupMode, analysis_report};

async fn report(text: &str, mode: LookupMode) -> String {
    let state = app_state(Config::default(), MockLoader { fail: false }, MockProvider::default());
    state.session.init().await.unwrap();
    analysis_report(&state.session, text, mode).await.unwrap()
}

#[tokio::test]
async fn plain_report_has_only_token_rows() {
    let out = report("犬と猫", LookupMode::Off).await;

    assert_eq!(out.lines().count(), 3);
    assert!(out.contains("[2] 猫"));
    assert!(!out.contains("【"));
}

#[tokio::test]
async fn best_lookup_prints_entries_and_misses() {
    let out = report("犬と猫", LookupMode::Best).await;

    assert!(out.contains("犬 【いぬ】 [jlpt-n5]"));
    assert!(out.contains("と: no entry"));
    assert!(out.contains("1. cat"));
}

#[tokio::test]
async fn listing_prints_every_candidate() {
    let state = app_state(Config::default(), MockLoader { fail: false }, MockProvider::default());
    state.session.init().await.unwrap();

    let out = analysis_report(&state.session, "食べた", LookupMode::All).await.unwrap();

    assert!(out.contains("食べる 【たべる】"));
    assert!(out.contains("1. to eat"));
    assert!(out.contains("た: no entry"));
    assert_eq!(state.session.last_lookup().await, None);
}
