//! Image/document analysis outcome. Maps to `file_analysis`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FileAnalysisRecord {
    pub chat_id: i64,
    pub first_name: String,
    pub username: String,
    /// Local path of the downloaded copy.
    pub file_name: String,
    pub analysis: String,
    pub timestamp: DateTime<Utc>,
}

impl FileAnalysisRecord {
    pub fn new(
        chat_id: i64,
        first_name: String,
        username: String,
        file_name: String,
        analysis: String,
    ) -> Self {
        Self {
            chat_id,
            first_name,
            username,
            file_name,
            analysis,
            timestamp: Utc::now(),
        }
    }
}
