use std::time::Duration;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

/// Upstream dictionary API the gateway forwards to
#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response is not JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl Upstream {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw search body. Any JSON body is passed on as is,
    /// whatever the upstream status.
    pub async fn search(&self, keyword: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            tracing::debug!(%status, keyword, "Upstream answered with non-success status");
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

/// First `keyword` value; later repeats are ignored
fn first_keyword(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(name, value)| (name == "keyword").then_some(value))
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// `GET /api/jisho?keyword=<word>`
pub async fn search_handler(
    State(upstream): State<Upstream>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some(keyword) = first_keyword(params).filter(|k| !k.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing keyword");
    };

    match upstream.search(&keyword).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::warn!(keyword = %keyword, "Upstream lookup failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch from Jisho.org")
        }
    }
}
