use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use kotoba_core::engine::{Analyzer, Converter, EngineError, EngineLoader};

use crate::analyzer::VibratoAnalyzer;
use crate::converter::FuriganaConverter;

/// Builds the vibrato analyzer and the furigana converter.
///
/// Each engine loads its own copy of the dictionary on the blocking pool so
/// both can be built at the same time.
#[derive(Debug, Default, Clone, Copy)]
pub struct JapaneseEngineLoader;

impl JapaneseEngineLoader {
    pub fn new() -> Self {
        Self
    }

    async fn load(path: &Path) -> Result<VibratoAnalyzer, EngineError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || VibratoAnalyzer::load(&path))
            .await
            .map_err(|e| EngineError::Task(e.to_string()))?
    }
}

#[async_trait]
impl EngineLoader for JapaneseEngineLoader {
    async fn build_analyzer(
        &self,
        dictionary_path: &Path,
    ) -> Result<Arc<dyn Analyzer>, EngineError> {
        let analyzer: Arc<dyn Analyzer> = Arc::new(Self::load(dictionary_path).await?);
        Ok(analyzer)
    }

    async fn init_converter(
        &self,
        dictionary_path: &Path,
    ) -> Result<Arc<dyn Converter>, EngineError> {
        let analyzer = Arc::new(Self::load(dictionary_path).await?);
        let converter: Arc<dyn Converter> = Arc::new(FuriganaConverter::new(analyzer));
        Ok(converter)
    }
}
