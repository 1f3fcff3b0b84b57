use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use kotoba_core::engine::{Analyzer, EngineError, RawFeature};
use vibrato::{Dictionary, Tokenizer};

const POS_FIELD: usize = 0;
const BASIC_FORM_FIELD: usize = 6;
const READING_FIELD: usize = 7;

/// Morphological analyzer over a vibrato system dictionary (IPADIC layout)
pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
}

impl VibratoAnalyzer {
    /// Load a dictionary file; `.zst` files are decompressed on the fly
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let fail = |reason: String| EngineError::Dictionary {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| fail(e.to_string()))?;
        let reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "zst") {
            Box::new(zstd::Decoder::new(file).map_err(|e| fail(e.to_string()))?)
        } else {
            Box::new(BufReader::new(file))
        };

        let dictionary = Dictionary::read(reader).map_err(|e| fail(e.to_string()))?;
        tracing::info!("Loaded analyzer dictionary from {}", path.display());

        Ok(Self {
            tokenizer: Tokenizer::new(dictionary),
        })
    }
}

impl Analyzer for VibratoAnalyzer {
    fn tokenize(&self, text: &str) -> Result<Vec<RawFeature>, EngineError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        Ok(worker
            .token_iter()
            .map(|token| parse_feature(token.surface(), token.feature()))
            .collect())
    }
}

/// Map a comma-separated IPADIC feature string onto a [`RawFeature`].
///
/// Unknown words carry fewer columns and `*` placeholders; both read as
/// missing values.
pub fn parse_feature(surface: &str, feature: &str) -> RawFeature {
    let fields: Vec<&str> = feature.split(',').collect();
    let field = |i: usize| {
        fields
            .get(i)
            .copied()
            .filter(|f| !f.is_empty() && *f != "*")
            .map(str::to_string)
    };

    RawFeature {
        surface_form: surface.to_string(),
        reading: field(READING_FIELD),
        pos: field(POS_FIELD).unwrap_or_default(),
        basic_form: field(BASIC_FORM_FIELD),
    }
}
