//! Storage crate: persistence gateway for users and interaction history.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, ChatRecord, FileAnalysisRecord, WebSearchRecord
//! - [`repository`] – BotStore trait
//! - [`sqlite_store`] – SqliteStore (SQLite via sqlx)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod sqlite_pool;
mod sqlite_store;


pub use error::StorageError;
pub use models::{ChatRecord, FileAnalysisRecord, UserRecord, WebSearchRecord};
pub use repository::BotStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteStore;
