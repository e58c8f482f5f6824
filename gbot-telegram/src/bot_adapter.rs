//! Wraps teloxide::Bot and implements [`gbot_core::Bot`]. Production code talks to Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use gbot_core::{Bot as CoreBot, BotError, Chat, Reply, ReplyKeyboard, Result};
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ButtonRequest, ChatId, FileId, KeyboardButton, KeyboardMarkup};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements gbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Builds a teloxide Bot, pointing it at `api_url` when given (local Bot API server, tests).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> anyhow::Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => Ok(bot.set_api_url(reqwest::Url::parse(url)?)),
        None => Ok(bot),
    }
}

fn keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    match keyboard {
        ReplyKeyboard::RequestContact { button_text } => KeyboardMarkup::new(vec![vec![
            KeyboardButton::new(button_text.clone()).request(ButtonRequest::Contact),
        ]])
        .resize_keyboard(),
    }
}

/// Telegram's limit for one message, in UTF-16 code units.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Splits `text` into pieces of at most `limit` UTF-16 units on char boundaries.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut units = 0;
    for ch in text.chars() {
        let len = ch.len_utf16();
        if units + len > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            units = 0;
        }
        current.push(ch);
        units += len;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn transport(e: impl std::fmt::Display) -> BotError {
    BotError::Transport(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(transport)?;
        Ok(())
    }

    /// Long texts go out as several messages; the keyboard rides on the last one.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut chunks = split_message(&reply.text, MAX_MESSAGE_LEN);
        let last = chunks.pop().unwrap_or_default();
        for chunk in chunks {
            self.send_message(chat, &chunk).await?;
        }

        let request = self.bot.send_message(ChatId(chat.id), last);
        match &reply.keyboard {
            Some(keyboard) => request.reply_markup(keyboard_markup(keyboard)).await,
            None => request.await,
        }
        .map_err(transport)?;
        Ok(())
    }

    async fn fetch_attachment(&self, file_id: &str) -> Result<Vec<u8>> {
        let file = self
            .bot
            .get_file(FileId(file_id.to_string()))
            .await
            .map_err(transport)?;
        let mut bytes = Vec::new();
        self.bot
            .download_file(&file.path, &mut bytes)
            .await
            .map_err(transport)?;
        debug!(file_id = %file_id, size = bytes.len(), "Attachment downloaded");
        Ok(bytes)
    }
}
