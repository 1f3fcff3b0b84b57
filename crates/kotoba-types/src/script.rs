//! Code point classification for Japanese scripts.

use std::ops::RangeInclusive;

/// CJK Unified Ideographs block
const KANJI: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';
/// Hiragana letters ぁ..ゖ (iteration marks and voicing marks excluded)
const HIRAGANA: RangeInclusive<char> = '\u{3041}'..='\u{3096}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Kanji,
    Hiragana,
    Other,
}

impl Script {
    pub fn of(c: char) -> Self {
        if KANJI.contains(&c) {
            Script::Kanji
        } else if HIRAGANA.contains(&c) {
            Script::Hiragana
        } else {
            Script::Other
        }
    }
}

pub fn is_kanji(c: char) -> bool {
    Script::of(c) == Script::Kanji
}

pub fn is_hiragana(c: char) -> bool {
    Script::of(c) == Script::Hiragana
}

/// True if any code point of `text` is a kanji
pub fn contains_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

/// True if `text` is one or more hiragana code points and nothing else
pub fn is_hiragana_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_hiragana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_code_points() {
        assert_eq!(Script::of('食'), Script::Kanji);
        assert_eq!(Script::of('た'), Script::Hiragana);
        assert_eq!(Script::of('タ'), Script::Other);
        assert_eq!(Script::of('a'), Script::Other);
        assert_eq!(Script::of('。'), Script::Other);
    }

    #[test]
    fn detects_kanji_anywhere() {
        assert!(contains_kanji("食べた"));
        assert!(contains_kanji("たべ物"));
        assert!(!contains_kanji("たべた"));
        assert!(!contains_kanji("タベタ、abc"));
        assert!(!contains_kanji(""));
    }

    #[test]
    fn hiragana_word_requires_only_hiragana() {
        assert!(is_hiragana_word("たべる"));
        assert!(!is_hiragana_word(""));
        assert!(!is_hiragana_word("食べる"));
        assert!(!is_hiragana_word("たべる "));
        assert!(!is_hiragana_word("タベル"));
        // prolonged sound mark is outside the letter range
        assert!(!is_hiragana_word("らーめん"));
    }
}
