use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use kotoba_config::Config;
use kotoba_core::engine::{
    Analyzer, ConvertOptions, Converter, EngineError, EngineLoader, RawFeature,
};
use kotoba_dictionary::{DictionaryCandidate, DictionaryProvider, JapaneseForm, LookupError, Sense};
use tokio::sync::Notify;

use crate::state::AppState;

fn morpheme(surface: &str, reading: &str, pos: &str, basic: &str) -> RawFeature {
    RawFeature {
        surface_form: surface.to_string(),
        reading: Some(reading.to_string()),
        pos: pos.to_string(),
        basic_form: Some(basic.to_string()),
    }
}

pub struct TableAnalyzer;

impl Analyzer for TableAnalyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<RawFeature>, EngineError> {
        match text {
            "食べた" => Ok(vec![
                morpheme("食べ", "タベ", "動詞", "食べる"),
                morpheme("た", "タ", "助動詞", "た"),
            ]),
            "犬と猫" => Ok(vec![
                morpheme("犬", "イヌ", "名詞", "犬"),
                morpheme("と", "ト", "助詞", "と"),
                morpheme("猫", "ネコ", "名詞", "猫"),
            ]),
            _ => Err(EngineError::Analyzer(format!("no analysis for '{text}'"))),
        }
    }
}

/// Wraps text in ruby markup tagged with the style; fails on "猫"
pub struct TagConverter;

#[async_trait]
impl Converter for TagConverter {
    async fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, EngineError> {
        if text == "猫" {
            return Err(EngineError::Conversion("no reading".to_string()));
        }
        Ok(format!("<ruby>{text}<rt>{}</rt></ruby>", options.to))
    }
}

pub struct MockLoader {
    pub fail: bool,
}

#[async_trait]
impl EngineLoader for MockLoader {
    async fn build_analyzer(&self, path: &Path) -> Result<Arc<dyn Analyzer>, EngineError> {
        if self.fail {
            return Err(EngineError::Dictionary {
                path: path.to_path_buf(),
                reason: "missing".to_string(),
            });
        }
        let analyzer: Arc<dyn Analyzer> = Arc::new(TableAnalyzer);
        Ok(analyzer)
    }

    async fn init_converter(&self, _path: &Path) -> Result<Arc<dyn Converter>, EngineError> {
        let converter: Arc<dyn Converter> = Arc::new(TagConverter);
        Ok(converter)
    }
}

fn candidate(word: &str, reading: &str, definition: &str) -> DictionaryCandidate {
    DictionaryCandidate {
        japanese: vec![JapaneseForm {
            word: Some(word.to_string()),
            reading: reading.to_string(),
        }],
        senses: vec![Sense {
            english_definitions: vec![definition.to_string()],
            parts_of_speech: vec!["Noun".to_string()],
        }],
        jlpt: vec!["jlpt-n5".to_string()],
        is_common: Some(true),
    }
}

/// Knows 犬, 猫 and 食べる; searches for keywords with a gate wait for it
#[derive(Default)]
pub struct MockProvider {
    gates: HashMap<String, Arc<Notify>>,
}

impl MockProvider {
    pub fn gated(mut self, keyword: &str) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gates.insert(keyword.to_string(), gate.clone());
        (self, gate)
    }
}

#[async_trait]
impl DictionaryProvider for MockProvider {
    async fn search(&self, keyword: &str) -> Result<Vec<DictionaryCandidate>, LookupError> {
        if let Some(gate) = self.gates.get(keyword) {
            gate.notified().await;
        }

        Ok(match keyword {
            "犬" => vec![candidate("犬", "いぬ", "dog")],
            "猫" => vec![candidate("猫", "ねこ", "cat")],
            "食べる" => vec![candidate("食べる", "たべる", "to eat")],
            _ => vec![],
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

pub fn app_state(config: Config, loader: MockLoader, provider: MockProvider) -> Arc<AppState> {
    Arc::new(AppState::new(config, Arc::new(loader), Arc::new(provider)))
}
