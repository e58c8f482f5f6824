//! Test doubles shared by the handler tests.

use async_trait::async_trait;
use chrono::Utc;
use gbot_core::{Bot, BotError, Chat, EventContent, InboundEvent, Reply, User};
use gemini_client::AiGateway;
use search_client::{SearchGateway, SearchResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storage::{
    BotStore, ChatRecord, FileAnalysisRecord, SqliteStore, StorageError, UserRecord,
    WebSearchRecord,
};

/// Builds an event with fixed user_id=123, chat_id=123 (private chat).
pub(crate) fn create_test_event(content: EventContent) -> InboundEvent {
    InboundEvent {
        id: "test_event_id".to_string(),
        user: User {
            id: 123,
            first_name: "Test".to_string(),
            username: Some("test_user".to_string()),
        },
        chat: Chat { id: 123 },
        content,
        received_at: Utc::now(),
    }
}

/// Same sender (id 123) writing in a group chat whose id differs from the sender id.
pub(crate) fn create_group_event(content: EventContent) -> InboundEvent {
    let mut event = create_test_event(content);
    event.chat = Chat { id: -100 };
    event
}

pub(crate) fn text(s: &str) -> EventContent {
    EventContent::Text(s.to_string())
}

pub(crate) fn command(name: &str, args: &[&str]) -> EventContent {
    EventContent::Command {
        name: name.to_string(),
        args: args.iter().map(|s| s.to_string()).collect(),
    }
}

pub(crate) async fn memory_store() -> Arc<SqliteStore> {
    Arc::new(
        SqliteStore::new("sqlite::memory:")
            .await
            .expect("Failed to create store"),
    )
}

/// AI double: returns `reply` for every call, or fails when `reply` is None.
pub(crate) struct StubAi {
    reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
    pub images: Mutex<Vec<Vec<u8>>>,
}

impl StubAi {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
            images: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
            images: Mutex::new(Vec::new()),
        })
    }

    fn answer(&self) -> anyhow::Result<String> {
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("model unavailable: 503"))
    }
}

#[async_trait]
impl AiGateway for StubAi {
    async fn generate_text(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer()
    }

    async fn generate_from_image(&self, prompt: &str, image: &[u8]) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.images.lock().unwrap().push(image.to_vec());
        self.answer()
    }
}

/// Search double: fixed results, or failure when None; counts calls.
pub(crate) struct StubSearch {
    results: Option<Vec<SearchResult>>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl StubSearch {
    pub fn returning(results: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            results: Some(
                results
                    .iter()
                    .map(|(title, url)| SearchResult {
                        title: title.to_string(),
                        url: url.to_string(),
                    })
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SearchGateway for StubSearch {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        self.results
            .clone()
            .ok_or_else(|| anyhow::anyhow!("search provider returned 500"))
    }
}

/// Store whose every call fails.
pub(crate) struct FailingStore;

fn down() -> StorageError {
    StorageError::Database("database is locked".to_string())
}

#[async_trait]
impl BotStore for FailingStore {
    async fn upsert_user(&self, _user: &UserRecord) -> Result<(), StorageError> {
        Err(down())
    }
    async fn set_phone_number(&self, _chat_id: i64, _phone: &str) -> Result<bool, StorageError> {
        Err(down())
    }
    async fn insert_chat(&self, _record: &ChatRecord) -> Result<(), StorageError> {
        Err(down())
    }
    async fn insert_file_analysis(&self, _record: &FileAnalysisRecord) -> Result<(), StorageError> {
        Err(down())
    }
    async fn insert_web_search(&self, _record: &WebSearchRecord) -> Result<(), StorageError> {
        Err(down())
    }
    async fn get_user(&self, _chat_id: i64) -> Result<Option<UserRecord>, StorageError> {
        Err(down())
    }
    async fn chat_history(&self, _chat_id: i64) -> Result<Vec<ChatRecord>, StorageError> {
        Err(down())
    }
    async fn file_analyses(&self, _chat_id: i64) -> Result<Vec<FileAnalysisRecord>, StorageError> {
        Err(down())
    }
    async fn web_searches(&self, _chat_id: i64) -> Result<Vec<WebSearchRecord>, StorageError> {
        Err(down())
    }
}

/// Bot double serving attachment bytes by file id; unknown ids fail as transport errors.
#[derive(Default)]
pub(crate) struct FileBot {
    files: HashMap<String, Vec<u8>>,
}

impl FileBot {
    pub fn with_file(mut self, file_id: &str, bytes: &[u8]) -> Self {
        self.files.insert(file_id.to_string(), bytes.to_vec());
        self
    }
}

#[async_trait]
impl Bot for FileBot {
    async fn send_message(&self, _chat: &Chat, _text: &str) -> gbot_core::Result<()> {
        Ok(())
    }

    async fn send_reply(&self, _chat: &Chat, _reply: &Reply) -> gbot_core::Result<()> {
        Ok(())
    }

    async fn fetch_attachment(&self, file_id: &str) -> gbot_core::Result<Vec<u8>> {
        self.files
            .get(file_id)
            .cloned()
            .ok_or_else(|| BotError::Transport(format!("file {} not found", file_id)))
    }
}
