//! SQLite implementation of [`BotStore`].
//!
//! Uses SqlitePoolManager and the models. External: SQLite via sqlx.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{ChatRecord, FileAnalysisRecord, UserRecord, WebSearchRecord};
use crate::repository::BotStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                chat_id INTEGER PRIMARY KEY,
                first_name TEXT NOT NULL,
                username TEXT NOT NULL,
                phone_number TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                chat_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                username TEXT NOT NULL,
                user_message TEXT NOT NULL,
                bot_response TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS file_analysis (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                chat_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                username TEXT NOT NULL,
                file_name TEXT NOT NULL,
                analysis TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS web_search (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                chat_id INTEGER NOT NULL,
                first_name TEXT NOT NULL,
                username TEXT NOT NULL,
                query TEXT NOT NULL,
                results TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_chat_history_chat_id ON chat_history(chat_id);
            CREATE INDEX IF NOT EXISTS idx_file_analysis_chat_id ON file_analysis(chat_id);
            CREATE INDEX IF NOT EXISTS idx_web_search_chat_id ON web_search(chat_id);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}

#[async_trait]
impl BotStore for SqliteStore {
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO users (chat_id, first_name, username, phone_number, created_at, updated_at)
            VALUES (?, ?, ?, NULL, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                first_name = excluded.first_name,
                username = excluded.username,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user.chat_id)
        .bind(&user.first_name)
        .bind(&user.username)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(pool)
        .await?;

        info!(chat_id = user.chat_id, "Upserted user");
        Ok(())
    }

    async fn set_phone_number(
        &self,
        chat_id: i64,
        phone_number: &str,
    ) -> Result<bool, StorageError> {
        let pool = self.pool_manager.pool();

        let result =
            sqlx::query("UPDATE users SET phone_number = ?, updated_at = ? WHERE chat_id = ?")
                .bind(phone_number)
                .bind(Utc::now())
                .bind(chat_id)
                .execute(pool)
                .await?;

        let matched = result.rows_affected() > 0;
        info!(chat_id = chat_id, matched = matched, "Updated phone number");
        Ok(matched)
    }

    async fn insert_chat(&self, record: &ChatRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO chat_history (chat_id, first_name, username, user_message, bot_response, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.chat_id)
        .bind(&record.first_name)
        .bind(&record.username)
        .bind(&record.user_message)
        .bind(&record.bot_response)
        .bind(record.timestamp)
        .execute(pool)
        .await?;

        debug!(chat_id = record.chat_id, "Saved chat record");
        Ok(())
    }

    async fn insert_file_analysis(&self, record: &FileAnalysisRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO file_analysis (chat_id, first_name, username, file_name, analysis, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.chat_id)
        .bind(&record.first_name)
        .bind(&record.username)
        .bind(&record.file_name)
        .bind(&record.analysis)
        .bind(record.timestamp)
        .execute(pool)
        .await?;

        debug!(chat_id = record.chat_id, file_name = %record.file_name, "Saved file analysis");
        Ok(())
    }

    async fn insert_web_search(&self, record: &WebSearchRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO web_search (chat_id, first_name, username, query, results, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.chat_id)
        .bind(&record.first_name)
        .bind(&record.username)
        .bind(&record.query)
        .bind(&record.results)
        .bind(record.timestamp)
        .execute(pool)
        .await?;

        debug!(chat_id = record.chat_id, query = %record.query, "Saved web search");
        Ok(())
    }

    async fn get_user(&self, chat_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT chat_id, first_name, username, phone_number, created_at, updated_at FROM users WHERE chat_id = ?",
        )
        .bind(chat_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    async fn chat_history(&self, chat_id: i64) -> Result<Vec<ChatRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let records = sqlx::query_as::<_, ChatRecord>(
            "SELECT chat_id, first_name, username, user_message, bot_response, timestamp FROM chat_history WHERE chat_id = ? ORDER BY id ASC",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    async fn file_analyses(&self, chat_id: i64) -> Result<Vec<FileAnalysisRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let records = sqlx::query_as::<_, FileAnalysisRecord>(
            "SELECT chat_id, first_name, username, file_name, analysis, timestamp FROM file_analysis WHERE chat_id = ? ORDER BY id ASC",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    async fn web_searches(&self, chat_id: i64) -> Result<Vec<WebSearchRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let records = sqlx::query_as::<_, WebSearchRecord>(
            "SELECT chat_id, first_name, username, query, results, timestamp FROM web_search WHERE chat_id = ? ORDER BY id ASC",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
