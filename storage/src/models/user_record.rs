//! User model; maps to the `users` table, keyed by chat id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub chat_id: i64,
    pub first_name: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Registration snapshot without a phone number; timestamps set to now.
    pub fn new(chat_id: i64, first_name: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            first_name,
            username,
            phone_number: None,
            created_at: now,
            updated_at: now,
        }
    }
}
