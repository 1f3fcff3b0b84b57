//! Picks the dictionary candidate that best fits a looked-up word.
//!
//! Scores are additive integers. A part-of-speech agreement outweighs
//! commonness and JLPT presence together; an exact hiragana reading match
//! sits between them; the positional prior only separates near-ties.

use kotoba_types::is_hiragana_word;

use crate::pos;
use crate::types::{DictionaryCandidate, DictionaryEntry};

pub const COMMON_BONUS: i64 = 100;
pub const JLPT_BONUS: i64 = 50;
pub const READING_MATCH_BONUS: i64 = 300;
pub const POS_MATCH_BONUS: i64 = 400;
pub const POSITION_WEIGHT: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a DictionaryCandidate,
    pub score: i64,
    pub original_index: usize,
}

/// Score every candidate, keeping provider order
pub fn score_candidates<'a>(
    word: &str,
    pos_hint: Option<&str>,
    candidates: &'a [DictionaryCandidate],
) -> Vec<ScoredCandidate<'a>> {
    let n = candidates.len();
    let hiragana_search = is_hiragana_word(word);
    let targets = pos_hint
        .filter(|hint| !hint.is_empty())
        .map(pos::descriptors)
        .unwrap_or_default();

    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let mut score = 0;

            if candidate.is_common() {
                score += COMMON_BONUS;
            }

            if candidate.has_jlpt() {
                score += JLPT_BONUS;
            }

            if hiragana_search && reading_matches(candidate, word) {
                score += READING_MATCH_BONUS;
            }

            if !targets.is_empty() && has_matching_pos(candidate, &targets) {
                score += POS_MATCH_BONUS;
            }

            score += (n - i) as i64 * POSITION_WEIGHT;

            tracing::trace!(
                index = i,
                score,
                word = candidate.primary().map(headword).unwrap_or_default(),
                "scored candidate"
            );

            ScoredCandidate {
                candidate,
                score,
                original_index: i,
            }
        })
        .collect()
}

/// Best entry for `word` among `candidates`, or `None` when there is nothing to pick
pub fn resolve(
    word: &str,
    pos_hint: Option<&str>,
    candidates: &[DictionaryCandidate],
) -> Option<DictionaryEntry> {
    match candidates {
        [] => None,
        [only] => format_entry(word, only),
        _ => {
            let mut scored = score_candidates(word, pos_hint, candidates);
            // stable: equal scores keep provider order
            scored.sort_by(|a, b| b.score.cmp(&a.score));

            let best = scored.first()?;
            tracing::debug!(
                word,
                pos_hint,
                index = best.original_index,
                score = best.score,
                "selected candidate among {}",
                candidates.len()
            );
            format_entry(word, best.candidate)
        }
    }
}

/// Flatten a candidate into an entry as seen from the search term `word`
pub fn format_entry(word: &str, candidate: &DictionaryCandidate) -> Option<DictionaryEntry> {
    let primary = candidate.primary()?;

    let display_word = if is_hiragana_word(word) && primary.reading == word {
        primary.reading.clone()
    } else {
        headword(primary).to_string()
    };

    Some(DictionaryEntry {
        word: display_word,
        reading: primary.reading.clone(),
        meanings: candidate
            .senses
            .iter()
            .map(|sense| sense.english_definitions.join(", "))
            .collect(),
        part_of_speech: candidate
            .senses
            .first()
            .map(|sense| sense.parts_of_speech.clone())
            .unwrap_or_default(),
        jlpt: candidate.jlpt.first().cloned(),
    })
}

/// Every candidate as an entry, unscored, in provider order
pub fn format_all(candidates: &[DictionaryCandidate]) -> Vec<DictionaryEntry> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let primary = candidate.primary()?;
            format_entry(headword(primary), candidate)
        })
        .collect()
}

fn headword(form: &crate::types::JapaneseForm) -> &str {
    form.word.as_deref().unwrap_or(&form.reading)
}

fn reading_matches(candidate: &DictionaryCandidate, word: &str) -> bool {
    candidate.primary().is_some_and(|form| form.reading == word)
}

fn has_matching_pos(candidate: &DictionaryCandidate, targets: &[String]) -> bool {
    candidate
        .senses
        .iter()
        .any(|sense| sense.parts_of_speech.iter().any(|p| pos::matches(p, targets)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{JapaneseForm, Sense};

    fn candidate(word: Option<&str>, reading: &str, pos: &[&str]) -> DictionaryCandidate {
        DictionaryCandidate {
            japanese: vec![JapaneseForm {
                word: word.map(str::to_string),
                reading: reading.to_string(),
            }],
            senses: vec![Sense {
                english_definitions: vec!["def".to_string()],
                parts_of_speech: pos.iter().map(|s| s.to_string()).collect(),
            }],
            jlpt: vec![],
            is_common: None,
        }
    }

    fn common(mut c: DictionaryCandidate) -> DictionaryCandidate {
        c.is_common = Some(true);
        c
    }

    fn jlpt(mut c: DictionaryCandidate, level: &str) -> DictionaryCandidate {
        c.jlpt = vec![level.to_string()];
        c
    }

    #[test]
    fn no_candidates_resolves_to_none() {
        assert_eq!(resolve("犬", Some("名詞"), &[]), None);
    }

    #[test]
    fn single_candidate_is_formatted_directly() {
        let only = candidate(Some("犬"), "いぬ", &["Noun"]);
        let entry = resolve("いぬ", None, std::slice::from_ref(&only)).unwrap();
        // hiragana search with matching reading keeps the kana spelling
        assert_eq!(entry.word, "いぬ");
        assert_eq!(entry.reading, "いぬ");
    }

    #[test]
    fn base_scores_cover_each_signal() {
        let candidates = vec![
            common(candidate(Some("甲"), "こう", &[])),
            jlpt(candidate(Some("乙"), "おつ", &[]), "jlpt-n1"),
            candidate(Some("丙"), "へい", &[]),
        ];
        let scored = score_candidates("漢字", None, &candidates);

        assert_eq!(scored[0].score, 100 + 30);
        assert_eq!(scored[1].score, 50 + 20);
        assert_eq!(scored[2].score, 10);
        assert_eq!(
            scored.iter().map(|s| s.original_index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn hiragana_exact_reading_adds_exactly_300() {
        let a = candidate(Some("食べる"), "たべる", &[]);
        let b = candidate(Some("食う"), "くう", &[]);

        // score both at the same position so only the reading differs
        let with_a = vec![a.clone(), b.clone()];
        let with_b = vec![b, a];
        let a_score = score_candidates("たべる", None, &with_a)[0].score;
        let b_score = score_candidates("たべる", None, &with_b)[0].score;

        assert_eq!(a_score - b_score, READING_MATCH_BONUS);
    }

    #[test]
    fn reading_bonus_needs_hiragana_search_term() {
        let candidates = vec![candidate(Some("食べる"), "たべる", &[])];
        let scored = score_candidates("タベル", None, &candidates);
        assert_eq!(scored[0].score, 10);
    }

    #[test]
    fn pos_match_outranks_common_and_jlpt() {
        let candidates = vec![
            jlpt(common(candidate(Some("家"), "いえ", &["Noun"])), "jlpt-n5"),
            candidate(Some("言え"), "いえ", &["Godan verb with 'u' ending"]),
        ];
        let scored = score_candidates("言え", Some("動詞"), &candidates);
        assert_eq!(scored[0].score, 100 + 50 + 20);
        assert_eq!(scored[1].score, 400 + 10);

        let entry = resolve("言え", Some("動詞"), &candidates).unwrap();
        assert_eq!(entry.word, "言え");
    }

    #[test]
    fn pos_matches_any_sense() {
        let mut c = candidate(Some("明日"), "あした", &["Noun"]);
        c.senses.push(Sense {
            english_definitions: vec!["tomorrow".to_string()],
            parts_of_speech: vec!["Adverb (fukushi)".to_string()],
        });
        let candidates = vec![candidate(Some("足"), "あし", &["Noun"]), c];

        let entry = resolve("明日", Some("副詞"), &candidates).unwrap();
        assert_eq!(entry.word, "明日");
        assert_eq!(entry.part_of_speech, vec!["Noun"]);
    }

    #[test]
    fn empty_pos_hint_is_ignored() {
        let candidates = vec![candidate(Some("犬"), "いぬ", &["noun"])];
        let scored = score_candidates("犬", Some(""), &candidates);
        assert_eq!(scored[0].score, 10);
    }

    #[test]
    fn ties_keep_provider_order() {
        // a later candidate gains exactly the positional gap back
        let first = candidate(Some("一"), "いち", &[]);
        let second = common(candidate(Some("二"), "に", &[]));
        let mut candidates = vec![first];
        for _ in 0..9 {
            candidates.push(candidate(Some("空"), "から", &[]));
        }
        candidates.push(second);
        // first: 11 * 10 = 110, last: 100 + 1 * 10 = 110
        let scored = score_candidates("漢字", None, &candidates);
        assert_eq!(scored[0].score, scored[10].score);

        let entry = resolve("漢字", None, &candidates).unwrap();
        assert_eq!(entry.word, "一");
    }

    #[test]
    fn resolution_is_deterministic() {
        let candidates = vec![
            common(candidate(Some("上"), "うえ", &["Noun"])),
            common(candidate(Some("植え"), "うえ", &["Noun"])),
            jlpt(candidate(None, "うえ", &["Noun"]), "jlpt-n3"),
        ];
        let first = resolve("うえ", Some("名詞"), &candidates);
        for _ in 0..10 {
            assert_eq!(resolve("うえ", Some("名詞"), &candidates), first);
        }
    }

    #[test]
    fn hiragana_search_forces_kana_word() {
        let candidates = vec![
            common(candidate(Some("食べる"), "たべる", &["Ichidan verb"])),
            candidate(Some("食う"), "くう", &["Godan verb"]),
        ];
        let entry = resolve("たべる", Some("動詞"), &candidates).unwrap();
        assert_eq!(entry.word, "たべる");
        assert_eq!(entry.reading, "たべる");
    }

    #[test]
    fn kanji_search_keeps_kanji_word() {
        let candidates = vec![
            common(candidate(Some("食べる"), "たべる", &["Ichidan verb"])),
            candidate(Some("食う"), "くう", &["Godan verb"]),
        ];
        let entry = resolve("食べる", Some("動詞"), &candidates).unwrap();
        assert_eq!(entry.word, "食べる");
    }

    #[test]
    fn formats_senses_and_jlpt() {
        let mut c = jlpt(candidate(Some("犬"), "いぬ", &["Noun"]), "jlpt-n5");
        c.jlpt.push("jlpt-n4".to_string());
        c.senses = vec![
            Sense {
                english_definitions: vec!["dog".to_string(), "canine".to_string()],
                parts_of_speech: vec!["Noun".to_string()],
            },
            Sense {
                english_definitions: vec!["spy".to_string()],
                parts_of_speech: vec!["Noun".to_string(), "Prefix".to_string()],
            },
        ];

        let entry = format_entry("犬", &c).unwrap();
        assert_eq!(entry.meanings, vec!["dog, canine", "spy"]);
        assert_eq!(entry.part_of_speech, vec!["Noun"]);
        assert_eq!(entry.jlpt.as_deref(), Some("jlpt-n5"));
    }

    #[test]
    fn no_senses_gives_empty_part_of_speech() {
        let mut c = candidate(None, "ああ", &[]);
        c.senses.clear();
        let entry = format_entry("ああ", &c).unwrap();
        assert!(entry.meanings.is_empty());
        assert!(entry.part_of_speech.is_empty());
    }

    #[test]
    fn format_all_keeps_order() {
        let candidates = vec![
            candidate(Some("上"), "うえ", &[]),
            candidate(None, "うえ", &[]),
        ];
        let entries = format_all(&candidates);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "上");
        assert_eq!(entries[1].word, "うえ");
    }
}
