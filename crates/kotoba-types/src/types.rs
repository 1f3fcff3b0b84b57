use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One morphological unit of analyzed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Text exactly as it appears in the input, never empty
    pub surface_form: String,
    /// Katakana reading from the analyzer, empty when unknown
    pub reading: String,
    /// Analyzer part-of-speech tag (e.g. "動詞")
    pub pos: String,
    /// Dictionary form, equal to `surface_form` when the analyzer has none
    pub base_form: String,
}

impl Token {
    /// Whether the analyzer produced a lemma different from the surface text
    pub fn is_inflected(&self) -> bool {
        self.base_form != self.surface_form
    }
}

/// Script used for furigana annotations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStyle {
    #[default]
    Hiragana,
    Katakana,
    Romaji,
}

impl ReadingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStyle::Hiragana => "hiragana",
            ReadingStyle::Katakana => "katakana",
            ReadingStyle::Romaji => "romaji",
        }
    }
}

impl fmt::Display for ReadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownReadingStyle(pub String);

impl fmt::Display for UnknownReadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown reading style '{}' (expected hiragana, katakana or romaji)",
            self.0
        )
    }
}

impl std::error::Error for UnknownReadingStyle {}

impl FromStr for ReadingStyle {
    type Err = UnknownReadingStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hiragana" => Ok(ReadingStyle::Hiragana),
            "katakana" => Ok(ReadingStyle::Katakana),
            "romaji" => Ok(ReadingStyle::Romaji),
            _ => Err(UnknownReadingStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text to analyze
    TextInput(String),
    /// Look up the n-th token of the last analysis
    Lookup(usize),
    SetReadingStyle(ReadingStyle),
    ShowTokens(Vec<DisplayToken>),
    ShowResult(DisplayResult),
    StatusUpdate(String),
    BackendReady,
    Quit,
}

/// Annotated token row ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayToken {
    pub index: usize,
    pub surface: String,
    pub markup: String,
    pub pos: String,
    pub base_form: Option<String>,
    /// Conversion failed and `markup` is the plain surface text
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub term: String,
    pub reading: String,
    pub definitions: Vec<String>,
    pub part_of_speech: String,
    pub jlpt_level: Option<String>,
}
