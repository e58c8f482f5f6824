use async_trait::async_trait;
use gbot_core::{BotError, Handler, InboundEvent, Reply, ReplyKeyboard, Result, Route};
use std::sync::Arc;
use storage::{BotStore, UserRecord};
use tracing::{info, instrument};

pub const WELCOME_MESSAGE: &str = "Welcome! Please share your contact.";
pub const SHARE_CONTACT_BUTTON: &str = "Share Contact";
pub const REGISTRATION_APOLOGY: &str =
    "Sorry, something went wrong during registration. Please try again later.";

/// `/start`: upserts the sender and asks for their contact.
pub struct RegistrationHandler {
    store: Arc<dyn BotStore>,
}

impl RegistrationHandler {
    pub fn new(store: Arc<dyn BotStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Handler for RegistrationHandler {
    fn route(&self) -> Route {
        Route::Registration
    }

    fn apology(&self) -> &'static str {
        REGISTRATION_APOLOGY
    }

    #[instrument(skip(self, event), fields(user_id = event.user.id))]
    async fn handle(&self, event: &InboundEvent) -> Result<Reply> {
        let record = UserRecord::new(
            event.user.id,
            event.user.first_name.clone(),
            event.user.display_username(),
        );
        self.store
            .upsert_user(&record)
            .await
            .map_err(BotError::persistence)?;

        info!(user_id = event.user.id, "User registered");

        Ok(Reply::text(WELCOME_MESSAGE).with_keyboard(ReplyKeyboard::RequestContact {
            button_text: SHARE_CONTACT_BUTTON.to_string(),
        }))
    }
}
