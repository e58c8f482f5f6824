//! One text exchange (user message and bot response). Maps to `chat_history`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatRecord {
    pub chat_id: i64,
    pub first_name: String,
    pub username: String,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatRecord {
    pub fn new(
        chat_id: i64,
        first_name: String,
        username: String,
        user_message: String,
        bot_response: String,
    ) -> Self {
        Self {
            chat_id,
            first_name,
            username,
            user_message,
            bot_response,
            timestamp: Utc::now(),
        }
    }
}
