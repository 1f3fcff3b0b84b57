use serde::{Deserialize, Serialize};

use crate::provider::LookupError;

/// One written form of a candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseForm {
    /// Kanji spelling, absent for kana-only words
    #[serde(default)]
    pub word: Option<String>,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
}

/// Raw dictionary entry as returned by the provider.
///
/// Position inside the provider's result list is meaningful and is kept by
/// every consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryCandidate {
    pub japanese: Vec<JapaneseForm>,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub jlpt: Vec<String>,
    #[serde(default)]
    pub is_common: Option<bool>,
}

impl DictionaryCandidate {
    pub fn primary(&self) -> Option<&JapaneseForm> {
        self.japanese.first()
    }

    pub fn is_common(&self) -> bool {
        self.is_common.unwrap_or(false)
    }

    pub fn has_jlpt(&self) -> bool {
        !self.jlpt.is_empty()
    }
}

/// Body of a dictionary search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<DictionaryCandidate>,
}

impl SearchResponse {
    /// Parse and validate a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, LookupError> {
        let response: SearchResponse =
            serde_json::from_slice(body).map_err(|e| LookupError::Malformed(e.to_string()))?;
        response.validate()?;
        Ok(response)
    }

    /// Every candidate needs at least one written form
    pub fn validate(&self) -> Result<(), LookupError> {
        if let Some(index) = self.data.iter().position(|c| c.japanese.is_empty()) {
            return Err(LookupError::Malformed(format!(
                "candidate {index} has no japanese forms"
            )));
        }
        Ok(())
    }

    pub fn into_candidates(self) -> Vec<DictionaryCandidate> {
        self.data
    }
}

/// Resolved dictionary entry exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    pub reading: String,
    /// One string per sense, definitions joined with ", "
    pub meanings: Vec<String>,
    pub part_of_speech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jlpt: Option<String>,
}
