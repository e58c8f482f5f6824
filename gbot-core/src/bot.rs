//! Outbound side of the transport.
//!
//! [`Bot`] is transport-agnostic; gbot-telegram implements it via teloxide and tests substitute
//! recording doubles.

use crate::error::Result;
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Sends replies and resolves attachments. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply, rendering its keyboard if one is attached.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Resolves an attachment id to its download location and fetches the bytes.
    /// Failures are [`crate::BotError::Transport`].
    async fn fetch_attachment(&self, file_id: &str) -> Result<Vec<u8>>;
}
