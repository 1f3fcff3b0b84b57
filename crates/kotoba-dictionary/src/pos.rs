//! Analyzer part-of-speech tags mapped to dictionary sense descriptors.

/// IPADIC top-level tags and the English descriptors they correspond to
const POS_TABLE: &[(&str, &[&str])] = &[
    ("感動詞", &["interjection", "exclamation"]),
    ("助動詞", &["auxiliary verb", "auxiliary"]),
    ("動詞", &["verb", "godan verb", "ichidan verb"]),
    ("形容詞", &["adjective", "i-adjective"]),
    ("名詞", &["noun"]),
    ("副詞", &["adverb"]),
    ("連体詞", &["pre-noun adjectival"]),
    ("接続詞", &["conjunction"]),
    ("助詞", &["particle"]),
    ("記号", &["symbol"]),
    ("補助記号", &["auxiliary symbol"]),
    ("接頭詞", &["prefix"]),
];

/// Lowercase descriptors for `tag`; unmapped tags describe themselves
pub fn descriptors(tag: &str) -> Vec<String> {
    match POS_TABLE.iter().find(|(jp, _)| *jp == tag) {
        Some((_, english)) => english.iter().map(|s| s.to_string()).collect(),
        None => vec![tag.to_lowercase()],
    }
}

/// Case-insensitive containment in either direction
pub fn matches(sense_pos: &str, descriptors: &[String]) -> bool {
    let sense_pos = sense_pos.to_lowercase();
    descriptors
        .iter()
        .any(|d| sense_pos.contains(d.as_str()) || d.contains(sense_pos.as_str()))
}
