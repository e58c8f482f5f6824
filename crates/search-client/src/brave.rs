//! Brave Search web API client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::config::{SearchConfig, DEFAULT_RESULT_COUNT, DEFAULT_SEARCH_URL};
use crate::{SearchGateway, SearchResult};

#[derive(Clone)]
pub struct BraveSearchClient {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
    count: u32,
}

impl BraveSearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: DEFAULT_SEARCH_URL.to_string(),
            count: DEFAULT_RESULT_COUNT,
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.api_key.clone())
            .with_endpoint(config.endpoint.clone())
            .with_count(config.result_count)
    }

    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.clamp(1, 20);
        self
    }
}

#[async_trait]
impl SearchGateway for BraveSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                warn!("BRAVE_API_KEY not set, web search unavailable");
                anyhow::bail!("search API key not configured");
            }
        };

        let mut url = reqwest::Url::parse(&self.endpoint)
            .with_context(|| format!("invalid search endpoint: {}", self.endpoint))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("count", &self.count.to_string());

        let response = self
            .client
            .get(url)
            .header("X-Subscription-Token", api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .context("search request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("search API error ({}): {}", status, body);
        }

        let body: BraveSearchResponse = response
            .json()
            .await
            .context("failed to parse search response")?;

        let results: Vec<SearchResult> = body
            .web
            .map(|w| w.results)
            .unwrap_or_default()
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                url: r.url,
            })
            .collect();

        info!(result_count = results.len(), "Search completed");
        Ok(results)
    }
}

#[derive(Deserialize)]
struct BraveSearchResponse {
    web: Option<WebResults>,
}

#[derive(Deserialize)]
struct WebResults {
    results: Vec<WebResult>,
}

#[derive(Deserialize)]
struct WebResult {
    title: String,
    url: String,
}
