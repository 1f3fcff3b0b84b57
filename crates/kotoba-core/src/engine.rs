//! Contracts for the two external engines a session drives.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kotoba_types::ReadingStyle;

/// Morpheme as reported by the analyzer engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeature {
    pub surface_form: String,
    pub reading: Option<String>,
    pub pos: String,
    pub basic_form: Option<String>,
}

/// Morphological analyzer; built once, then shared read-only
pub trait Analyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<RawFeature>, EngineError>;
}

/// Script conversion engine producing annotated markup
#[async_trait::async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, text: &str, options: &ConvertOptions) -> Result<String, EngineError>;
}

/// Builds both engines from a dictionary asset
#[async_trait::async_trait]
pub trait EngineLoader: Send + Sync {
    async fn build_analyzer(
        &self,
        dictionary_path: &Path,
    ) -> Result<Arc<dyn Analyzer>, EngineError>;

    async fn init_converter(
        &self,
        dictionary_path: &Path,
    ) -> Result<Arc<dyn Converter>, EngineError>;
}

/// Furigana conversion: kanji wrapped in ruby markup, everything else left
/// as is. Romaji readings follow passport romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub to: ReadingStyle,
}

impl ConvertOptions {
    pub fn furigana(to: ReadingStyle) -> Self {
        Self { to }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to load dictionary from {path}: {reason}")]
    Dictionary { path: PathBuf, reason: String },

    #[error("Analyzer error: {0}")]
    Analyzer(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Engine task failed: {0}")]
    Task(String),
}
