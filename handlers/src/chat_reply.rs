use async_trait::async_trait;
use gbot_core::{BotError, EventContent, Handler, InboundEvent, Reply, Result, Route};
use gemini_client::AiGateway;
use std::sync::Arc;
use storage::{BotStore, ChatRecord};
use tracing::{debug, info, instrument};

use crate::or_fallback;

pub const CHAT_FALLBACK: &str = "Sorry, I couldn't process that.";
pub const CHAT_APOLOGY: &str = "Sorry, something went wrong. Please try again later.";

/// Plain text: one stateless model call, one stored exchange, one reply.
pub struct ChatReplyHandler {
    ai: Arc<dyn AiGateway>,
    store: Arc<dyn BotStore>,
}

impl ChatReplyHandler {
    pub fn new(ai: Arc<dyn AiGateway>, store: Arc<dyn BotStore>) -> Self {
        Self { ai, store }
    }
}

#[async_trait]
impl Handler for ChatReplyHandler {
    fn route(&self) -> Route {
        Route::ChatReply
    }

    fn apology(&self) -> &'static str {
        CHAT_APOLOGY
    }

    #[instrument(skip(self, event), fields(user_id = event.user.id, chat_id = event.chat.id))]
    async fn handle(&self, event: &InboundEvent) -> Result<Reply> {
        let EventContent::Text(text) = &event.content else {
            return Err(BotError::UnexpectedContent("chat_reply"));
        };

        debug!(text_len = text.len(), "step: AI text generation");
        let generated = self
            .ai
            .generate_text(text)
            .await
            .map_err(BotError::gateway)?;
        let response = or_fallback(generated, CHAT_FALLBACK);

        let record = ChatRecord::new(
            event.user.id,
            event.user.first_name.clone(),
            event.user.display_username(),
            text.clone(),
            response.clone(),
        );
        self.store
            .insert_chat(&record)
            .await
            .map_err(BotError::persistence)?;

        info!(
            user_id = event.user.id,
            response_len = response.len(),
            "Chat reply generated"
        );
        Ok(Reply::text(response))
    }
}
