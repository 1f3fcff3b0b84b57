//! Furigana converter.
//!
//! Runs the analyzer over the input and rewrites each morpheme's reading in
//! the requested script. Only kanji are annotated, with leading and
//! trailing kana (okurigana) kept outside the ruby element.

use std::sync::Arc;

use async_trait::async_trait;
use kotoba_core::engine::{Analyzer, ConvertOptions, Converter, EngineError, RawFeature};
use kotoba_types::{ReadingStyle, contains_kanji};

use crate::kana::{hiragana_to_katakana, is_kana, katakana_to_hiragana, to_hiragana_char, to_romaji};

pub struct FuriganaConverter {
    analyzer: Arc<dyn Analyzer>,
}

impl FuriganaConverter {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self { analyzer }
    }
}

#[async_trait]
impl Converter for FuriganaConverter {
    async fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, EngineError> {
        let features = self.analyzer.tokenize(text)?;

        let converted = features
            .iter()
            .map(|feature| convert_furigana(feature, options))
            .collect();
        Ok(converted)
    }
}

fn render(reading: &str, style: ReadingStyle) -> String {
    match style {
        ReadingStyle::Hiragana => katakana_to_hiragana(reading),
        ReadingStyle::Katakana => hiragana_to_katakana(reading),
        ReadingStyle::Romaji => to_romaji(reading),
    }
}

fn ruby(base: &str, reading: &str) -> String {
    format!("<ruby>{base}<rp>(</rp><rt>{reading}</rt><rp>)</rp></ruby>")
}

fn reading_of(feature: &RawFeature) -> Option<&str> {
    feature.reading.as_deref().filter(|r| !r.is_empty())
}

fn convert_furigana(feature: &RawFeature, options: &ConvertOptions) -> String {
    let surface = feature.surface_form.as_str();

    if options.to == ReadingStyle::Romaji {
        // romaji does not line up with kana, so the whole morpheme is annotated
        let source = reading_of(feature).unwrap_or(surface);
        if !contains_kanji(surface) && !surface.chars().any(is_kana) {
            return surface.to_string();
        }
        return ruby(surface, &to_romaji(source));
    }

    let Some(reading) = reading_of(feature) else {
        return surface.to_string();
    };
    if !contains_kanji(surface) {
        return surface.to_string();
    }

    let split = split_okurigana(surface, &katakana_to_hiragana(reading));
    if split.core_reading.is_empty() {
        return surface.to_string();
    }

    format!(
        "{}{}{}",
        split.prefix,
        ruby(&split.core, &render(&split.core_reading, options.to)),
        split.suffix
    )
}

#[derive(Debug, PartialEq, Eq)]
struct Okurigana {
    prefix: String,
    core: String,
    core_reading: String,
    suffix: String,
}

/// Peel kana shared by the surface and its (hiragana) reading off both ends
fn split_okurigana(surface: &str, reading: &str) -> Okurigana {
    let surface: Vec<char> = surface.chars().collect();
    let reading: Vec<char> = reading.chars().collect();
    let matches = |s: char, r: char| is_kana(s) && to_hiragana_char(s) == r;

    let mut head = 0;
    while head < surface.len() && head < reading.len() && matches(surface[head], reading[head]) {
        head += 1;
    }

    let mut tail = 0;
    while tail < surface.len() - head
        && tail < reading.len() - head
        && matches(surface[surface.len() - 1 - tail], reading[reading.len() - 1 - tail])
    {
        tail += 1;
    }

    Okurigana {
        prefix: surface[..head].iter().collect(),
        core: surface[head..surface.len() - tail].iter().collect(),
        core_reading: reading[head..reading.len() - tail].iter().collect(),
        suffix: surface[surface.len() - tail..].iter().collect(),
    }
}
