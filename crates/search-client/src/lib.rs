//! # Search client
//!
//! [`SearchGateway`] returns ordered `{title, url}` results for a free-text query.
//! [`BraveSearchClient`] implements it over the Brave Search web API.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

mod brave;
mod config;

pub use brave::BraveSearchClient;
pub use config::{SearchConfig, DEFAULT_RESULT_COUNT, DEFAULT_SEARCH_URL};

/// One search hit, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Renders results as `"N. title - url"` lines (1-indexed) joined by newlines.
pub fn format_results(results: &[SearchResult]) -> String {
    let mut output = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let _ = write!(output, "{}. {} - {}", i + 1, result.title, result.url);
    }
    output
}
