//! Kana script conversion and romanization.

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30F6;
const KANA_OFFSET: u32 = KATAKANA_START - HIRAGANA_START;

pub fn is_katakana(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&(c as u32))
}

pub fn is_kana(c: char) -> bool {
    let cp = c as u32;
    (HIRAGANA_START..=HIRAGANA_END).contains(&cp) || is_katakana(c) || c == 'ー'
}

pub fn to_hiragana_char(c: char) -> char {
    if is_katakana(c) {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars().map(to_hiragana_char).collect()
}

pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            let cp = c as u32;
            if (HIRAGANA_START..=HIRAGANA_END).contains(&cp) {
                char::from_u32(cp + KANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[rustfmt::skip]
fn mora(c: char) -> Option<&'static str> {
    let romaji = match c {
        'あ' => "a", 'い' => "i", 'う' => "u", 'え' => "e", 'お' => "o",
        'か' => "ka", 'き' => "ki", 'く' => "ku", 'け' => "ke", 'こ' => "ko",
        'が' => "ga", 'ぎ' => "gi", 'ぐ' => "gu", 'げ' => "ge", 'ご' => "go",
        'さ' => "sa", 'し' => "shi", 'す' => "su", 'せ' => "se", 'そ' => "so",
        'ざ' => "za", 'じ' => "ji", 'ず' => "zu", 'ぜ' => "ze", 'ぞ' => "zo",
        'た' => "ta", 'ち' => "chi", 'つ' => "tsu", 'て' => "te", 'と' => "to",
        'だ' => "da", 'ぢ' => "ji", 'づ' => "zu", 'で' => "de", 'ど' => "do",
        'な' => "na", 'に' => "ni", 'ぬ' => "nu", 'ね' => "ne", 'の' => "no",
        'は' => "ha", 'ひ' => "hi", 'ふ' => "fu", 'へ' => "he", 'ほ' => "ho",
        'ば' => "ba", 'び' => "bi", 'ぶ' => "bu", 'べ' => "be", 'ぼ' => "bo",
        'ぱ' => "pa", 'ぴ' => "pi", 'ぷ' => "pu", 'ぺ' => "pe", 'ぽ' => "po",
        'ま' => "ma", 'み' => "mi", 'む' => "mu", 'め' => "me", 'も' => "mo",
        'や' => "ya", 'ゆ' => "yu", 'よ' => "yo",
        'ら' => "ra", 'り' => "ri", 'る' => "ru", 'れ' => "re", 'ろ' => "ro",
        'わ' => "wa", 'ゐ' => "i", 'ゑ' => "e", 'を' => "o",
        'ん' => "n", 'ゔ' => "vu", 'ゎ' => "wa",
        _ => return None,
    };
    Some(romaji)
}

fn small_vowel(c: char) -> Option<&'static str> {
    match c {
        'ぁ' => Some("a"),
        'ぃ' => Some("i"),
        'ぅ' => Some("u"),
        'ぇ' => Some("e"),
        'ぉ' => Some("o"),
        _ => None,
    }
}

fn small_y(c: char) -> Option<&'static str> {
    match c {
        'ゃ' => Some("a"),
        'ゅ' => Some("u"),
        'ょ' => Some("o"),
        _ => None,
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn starts_with_vowel_or_y(s: &str) -> bool {
    s.starts_with(['a', 'i', 'u', 'e', 'o', 'y'])
}

/// Passport romanization of kana text; anything that is not kana passes
/// through. Long vowels collapse (おう -> o) and ん before b/m/p is written m.
pub fn to_romaji(text: &str) -> String {
    let hiragana = katakana_to_hiragana(text);
    let mut syllables: Vec<String> = Vec::new();
    let mut sokuon = false;
    let mut after_n = false;

    for c in hiragana.chars() {
        if c == 'っ' {
            sokuon = true;
            continue;
        }

        // きゃ -> kya, しゃ -> sha
        if let Some(vowel) = small_y(c)
            && let Some(last) = syllables.last_mut()
            && last.len() > 1
            && last.ends_with('i')
        {
            last.pop();
            if !(last.ends_with("sh") || last.ends_with("ch") || last.ends_with('j')) {
                last.push('y');
            }
            last.push_str(vowel);
            continue;
        }

        // ファ -> fa, ウィ -> wi, チェ -> che
        if let Some(vowel) = small_vowel(c)
            && let Some(last) = syllables.last_mut()
            && last.chars().last().is_some_and(is_vowel)
        {
            if last == "u" {
                *last = "w".to_string();
            } else {
                last.pop();
            }
            last.push_str(vowel);
            continue;
        }

        if c == 'ー' {
            continue;
        }

        let mut syllable = match mora(c).or_else(|| small_vowel(c)).or_else(|| small_y(c)) {
            Some(romaji) => romaji.to_string(),
            None => c.to_string(),
        };

        if sokuon {
            if syllable.starts_with("ch") {
                syllable.insert(0, 't');
            } else if let Some(first) = syllable.chars().next()
                && first.is_ascii_alphabetic()
                && !starts_with_vowel_or_y(&syllable)
            {
                syllable.insert(0, first);
            }
            sokuon = false;
        }

        if after_n
            && syllable.starts_with(['b', 'm', 'p'])
            && let Some(n) = syllables.last_mut()
        {
            *n = "m".to_string();
        }
        after_n = c == 'ん';

        syllables.push(syllable);
    }

    syllables
        .concat()
        .replace("ou", "o")
        .replace("oo", "o")
        .replace("uu", "u")
}
