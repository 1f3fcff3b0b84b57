use std::env;
use std::path::PathBuf;

use kotoba_types::ReadingStyle;
use serde::{Deserialize, Serialize};

fn default_dictionary_path() -> PathBuf {
    PathBuf::from("dict/system.dic.zst")
}

/// Inputs of an annotation session: the engines' dictionary and the furigana script
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Dictionary asset shared by the analyzer and the conversion engine
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    #[serde(default)]
    pub reading_style: ReadingStyle,
}

impl SessionConfig {
    pub fn new() -> Self {
        let dictionary_path = env::var("KOTOBA_DICT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_dictionary_path());

        let reading_style = env::var("KOTOBA_READING_STYLE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            dictionary_path,
            reading_style,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            reading_style: ReadingStyle::default(),
        }
    }
}
