use crate::types::DictionaryCandidate;

/// Keyword search against a remote dictionary
#[async_trait::async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Candidates for `keyword` in provider order
    async fn search(&self, keyword: &str) -> Result<Vec<DictionaryCandidate>, LookupError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}
