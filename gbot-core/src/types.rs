//! Core types: sender, chat, inbound event, reply, route, and the Handler / Middleware traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, Result};

/// Stored in place of a username when the sender has none.
pub const MISSING_USERNAME: &str = "N/A";

/// Sender identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

impl User {
    /// Username for persisted records; [`MISSING_USERNAME`] when absent.
    pub fn display_username(&self) -> String {
        self.username
            .clone()
            .unwrap_or_else(|| MISSING_USERNAME.to_string())
    }
}

/// Conversation the event arrived in; replies go back here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    Photo,
    Document,
}

/// A photo (largest size) or document attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Transport id used to resolve the download location.
    pub file_id: String,
    /// Stable id across bots; names the local copy.
    pub unique_id: String,
    pub kind: AttachmentKind,
    pub file_name: Option<String>,
}

/// What the inbound event carries. Exactly one variant per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventContent {
    Command { name: String, args: Vec<String> },
    Contact { phone_number: String },
    Attachment(Attachment),
    Text(String),
    Unsupported,
}

/// A single inbound event from the messaging platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: EventContent,
    pub received_at: DateTime<Utc>,
}

/// Converts a transport-specific message into an [`InboundEvent`].
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> InboundEvent;
}

/// Extra UI sent along with a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplyKeyboard {
    /// Persistent one-button keyboard asking the user to share their contact.
    RequestContact { button_text: String },
}

/// Text sent back to the sender, optionally with a keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Event category; each maps to at most one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Registration,
    WebSearch,
    ContactCapture,
    ChatReply,
    ImageAnalysis,
    Unmatched,
}

impl Route {
    pub const START_COMMAND: &'static str = "start";
    pub const WEBSEARCH_COMMAND: &'static str = "websearch";

    /// Classifies content with fixed precedence: commands, contact, text, attachment.
    /// Unknown commands and unsupported content are [`Route::Unmatched`].
    pub fn classify(content: &EventContent) -> Route {
        match content {
            EventContent::Command { name, .. } if name == Self::START_COMMAND => Route::Registration,
            EventContent::Command { name, .. } if name == Self::WEBSEARCH_COMMAND => Route::WebSearch,
            EventContent::Command { .. } => Route::Unmatched,
            EventContent::Contact { .. } => Route::ContactCapture,
            EventContent::Text(_) => Route::ChatReply,
            EventContent::Attachment(_) => Route::ImageAnalysis,
            EventContent::Unsupported => Route::Unmatched,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Registration => "registration",
            Route::WebSearch => "web_search",
            Route::ContactCapture => "contact_capture",
            Route::ChatReply => "chat_reply",
            Route::ImageAnalysis => "image_analysis",
            Route::Unmatched => "unmatched",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Handler succeeded and its reply was sent.
    Replied,
    /// Handler failed with a reportable error, or its reply could not be delivered; the fixed
    /// apology was sent.
    Apologized(ErrorKind),
    /// Processing of this event was abandoned without a reply.
    Aborted(ErrorKind),
    /// No handler serves this event.
    Dropped,
    /// A middleware refused the event.
    Stopped,
}

/// One unit of logic bound to a [`Route`]. Returns the reply on success; the router renders errors.
#[async_trait]
pub trait Handler: Send + Sync {
    /// The single route this handler serves.
    fn route(&self) -> Route;

    /// Fixed user-facing text sent when `handle` fails with a gateway or persistence error.
    fn apology(&self) -> &'static str;

    async fn handle(&self, event: &InboundEvent) -> Result<Reply>;
}

/// Runs around every dispatched event. Return false from `before` to drop the event.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn before(&self, _event: &InboundEvent, _route: Route) -> Result<bool> {
        Ok(true)
    }

    async fn after(
        &self,
        _event: &InboundEvent,
        _route: Route,
        _outcome: &DispatchOutcome,
    ) -> Result<()> {
        Ok(())
    }
}
