//! Long-poll loop: each teloxide message becomes an [`InboundEvent`](gbot_core::InboundEvent) and
//! is dispatched through the [`Router`] before the update handler returns.

use anyhow::Result;
use gbot_core::ToInboundEvent;
use router::Router;
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Runs the teloxide REPL until shutdown (Ctrl-C). Dispatch is awaited inline, so events of one
/// chat are handled one at a time; different chats proceed concurrently.
#[instrument(skip(bot, router))]
pub async fn run_polling(bot: teloxide::Bot, router: Router) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    teloxide::repl(bot, move |msg: Message| {
        let router = router.clone();

        async move {
            let event = TelegramMessageWrapper(&msg).to_event();
            info!(
                user_id = event.user.id,
                chat_id = event.chat.id,
                message_id = %event.id,
                "step: dispatching message"
            );
            let outcome = router.dispatch(&event).await;
            info!(message_id = %event.id, outcome = ?outcome, "Message done");
            respond(())
        }
    })
    .await;

    info!("Polling stopped");
    Ok(())
}
