use async_trait::async_trait;
use gbot_core::{BotError, EventContent, Handler, InboundEvent, Reply, Result, Route};
use std::sync::Arc;
use storage::BotStore;
use tracing::{info, instrument, warn};

pub const CONTACT_THANKS: &str = "Thank you for sharing your contact!";
pub const CONTACT_APOLOGY: &str =
    "Sorry, something went wrong while processing your contact. Please try again later.";

/// Stores a shared phone number on the existing user for this chat.
pub struct ContactCaptureHandler {
    store: Arc<dyn BotStore>,
}

impl ContactCaptureHandler {
    pub fn new(store: Arc<dyn BotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Handler for ContactCaptureHandler {
    fn route(&self) -> Route {
        Route::ContactCapture
    }

    fn apology(&self) -> &'static str {
        CONTACT_APOLOGY
    }

    #[instrument(skip(self, event), fields(chat_id = event.chat.id))]
    async fn handle(&self, event: &InboundEvent) -> Result<Reply> {
        let EventContent::Contact { phone_number } = &event.content else {
            return Err(BotError::UnexpectedContent("contact_capture"));
        };

        let matched = self
            .store
            .set_phone_number(event.chat.id, phone_number)
            .await
            .map_err(BotError::persistence)?;

        if matched {
            info!(chat_id = event.chat.id, "Phone number saved");
        } else {
            // update only: an unregistered chat stays unregistered
            warn!(chat_id = event.chat.id, "Contact shared by unknown user, nothing updated");
        }

        Ok(Reply::text(CONTACT_THANKS))
    }
}
