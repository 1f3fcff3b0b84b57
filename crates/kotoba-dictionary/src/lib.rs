pub mod disambiguate;
pub mod pos;
pub mod provider;
pub mod types;

pub use disambiguate::{ScoredCandidate, format_all, format_entry, resolve, score_candidates};
pub use provider::{DictionaryProvider, LookupError};
pub use types::{DictionaryCandidate, DictionaryEntry, JapaneseForm, SearchResponse, Sense};
