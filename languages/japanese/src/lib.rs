pub mod analyzer;
pub mod converter;
pub mod jisho;
pub mod kana;
pub mod loader;

pub use analyzer::VibratoAnalyzer;
pub use converter::FuriganaConverter;
pub use jisho::JishoProvider;
pub use loader::JapaneseEngineLoader;
