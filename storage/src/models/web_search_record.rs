//! Web search query and its formatted results. Maps to `web_search`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WebSearchRecord {
    pub chat_id: i64,
    pub first_name: String,
    pub username: String,
    pub query: String,
    /// Numbered `"N. title - url"` lines joined by newlines.
    pub results: String,
    pub timestamp: DateTime<Utc>,
}

impl WebSearchRecord {
    pub fn new(
        chat_id: i64,
        first_name: String,
        username: String,
        query: String,
        results: String,
    ) -> Self {
        Self {
            chat_id,
            first_name,
            username,
            query,
            results,
            timestamp: Utc::now(),
        }
    }
}
