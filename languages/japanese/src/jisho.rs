use std::time::Duration;

use async_trait::async_trait;
use kotoba_dictionary::{DictionaryCandidate, DictionaryProvider, LookupError, SearchResponse};

/// Dictionary search over a Jisho-compatible `?keyword=` endpoint
#[derive(Clone)]
pub struct JishoProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl JishoProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DictionaryProvider for JishoProvider {
    async fn search(&self, keyword: &str) -> Result<Vec<DictionaryCandidate>, LookupError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("keyword", keyword)])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(format!("Failed to read response: {}", e)))?;

        let parsed = SearchResponse::from_slice(&body)?;
        Ok(parsed.into_candidates())
    }

    fn name(&self) -> &str {
        "jisho"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let provider =
            JishoProvider::new("http://127.0.0.1:9/api/jisho", Duration::from_secs(2)).unwrap();

        let result = provider.search("犬").await;
        assert!(matches!(result, Err(LookupError::Network(_))));
    }
}
