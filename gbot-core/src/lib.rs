//! # gbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], [`Middleware`], inbound event and reply
//! types, error classification, and tracing initialization. Transport-agnostic; used by router,
//! handlers and gbot-telegram.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use command::parse_command;
pub use error::{BotError, ErrorKind, Result};
pub use logger::init_tracing;
pub use types::{
    Attachment, AttachmentKind, Chat, DispatchOutcome, EventContent, Handler, InboundEvent,
    Middleware, Reply, ReplyKeyboard, Route, ToInboundEvent, User, MISSING_USERNAME,
};
