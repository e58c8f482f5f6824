use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{ChatRecord, FileAnalysisRecord, UserRecord, WebSearchRecord};

/// Persistence gateway over the four collections: users (upsert by chat id) and three
/// append-only histories.
#[async_trait]
pub trait BotStore: Send + Sync {
    /// Inserts the user or refreshes first_name/username; phone_number is left untouched.
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StorageError>;

    /// Updates an existing user's phone number. Returns false when no user matched.
    async fn set_phone_number(&self, chat_id: i64, phone_number: &str)
        -> Result<bool, StorageError>;

    async fn insert_chat(&self, record: &ChatRecord) -> Result<(), StorageError>;

    async fn insert_file_analysis(&self, record: &FileAnalysisRecord) -> Result<(), StorageError>;

    async fn insert_web_search(&self, record: &WebSearchRecord) -> Result<(), StorageError>;

    async fn get_user(&self, chat_id: i64) -> Result<Option<UserRecord>, StorageError>;

    /// Chat exchanges for one chat id, oldest first.
    async fn chat_history(&self, chat_id: i64) -> Result<Vec<ChatRecord>, StorageError>;

    async fn file_analyses(&self, chat_id: i64) -> Result<Vec<FileAnalysisRecord>, StorageError>;

    async fn web_searches(&self, chat_id: i64) -> Result<Vec<WebSearchRecord>, StorageError>;
}
