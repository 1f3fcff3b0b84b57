use std::env;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_upstream_url() -> String {
    "https://jisho.org/api/v1/search/words".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Address the lookup gateway listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Dictionary search API the gateway forwards to
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Endpoint the session queries for candidates, upstream when unset
    #[serde(default)]
    pub lookup_endpoint: Option<String>,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let bind_addr = env::var("KOTOBA_BIND_ADDR").unwrap_or_else(|_| default_bind_addr());

        let upstream_url =
            env::var("KOTOBA_UPSTREAM_URL").unwrap_or_else(|_| default_upstream_url());

        let lookup_endpoint = env::var("KOTOBA_LOOKUP_ENDPOINT").ok();

        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            bind_addr,
            upstream_url,
            lookup_endpoint,
            timeout_seconds,
        }
    }

    pub fn lookup_url(&self) -> &str {
        self.lookup_endpoint.as_deref().unwrap_or(&self.upstream_url)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            upstream_url: default_upstream_url(),
            lookup_endpoint: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
