//! Search configuration loaded from the environment.

use std::env;

pub const DEFAULT_SEARCH_URL: &str = "https://api.search.brave.com/res/v1/web/search";
pub const DEFAULT_RESULT_COUNT: u32 = 5;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// BRAVE_API_KEY; when absent every search fails.
    pub api_key: Option<String>,
    pub endpoint: String,
    pub result_count: u32,
}

impl SearchConfig {
    /// All variables optional: BRAVE_API_KEY, SEARCH_API_URL, SEARCH_RESULT_COUNT (clamped to 1..=20).
    pub fn from_env() -> Self {
        let api_key = env::var("BRAVE_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let endpoint = env::var("SEARCH_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
        let result_count = env::var("SEARCH_RESULT_COUNT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RESULT_COUNT)
            .clamp(1, 20);
        Self {
            api_key,
            endpoint,
            result_count,
        }
    }
}
