//! # gbot-telegram
//!
//! Telegram layer: teloxide messages to [`gbot_core::InboundEvent`], a [`gbot_core::Bot`]
//! implementation over teloxide, and the long-poll runner that feeds the [`router::Router`].
//! No persistence or AI logic lives here.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, split_message, TelegramBotAdapter, MAX_MESSAGE_LEN};
pub use runner::run_polling;
