pub mod script;
pub mod types;

pub use script::{Script, contains_kanji, is_hiragana_word};
pub use types::*;
