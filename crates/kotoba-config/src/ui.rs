use serde::{Deserialize, Serialize};

fn default_show_furigana() -> bool {
    true
}

fn default_max_tokens() -> usize {
    200
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Print ruby markup instead of plain surface text
    #[serde(default = "default_show_furigana")]
    pub show_furigana: bool,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_furigana: default_show_furigana(),
            max_tokens: default_max_tokens(),
        }
    }
}
