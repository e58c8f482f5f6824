//! Builds shared components (store, gateways, Telegram bot) and the router over them.

use anyhow::Result;
use gbot_core::Bot;
use gbot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use gemini_client::{AiGateway, GeminiClient};
use handlers::{
    ChatReplyHandler, ContactCaptureHandler, ImageAnalysisHandler, RegistrationHandler,
    WebSearchHandler,
};
use router::{LoggingMiddleware, Router};
use search_client::{BraveSearchClient, SearchGateway};
use std::sync::Arc;
use storage::{BotStore, SqliteStore};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Process-wide singletons, constructed once and shared by every handler.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub store: Arc<dyn BotStore>,
    pub ai: Arc<dyn AiGateway>,
    pub search: Arc<dyn SearchGateway>,
}

#[instrument(skip(config))]
pub async fn build_bot_components(config: &AppConfig) -> Result<BotComponents> {
    let store = SqliteStore::new(&config.database_url).await.map_err(|e| {
        error!(
            error = %e,
            database_url = %config.database_url,
            "Failed to initialize storage"
        );
        anyhow::anyhow!("Failed to initialize storage: {}", e)
    })?;

    let teloxide_bot = build_teloxide_bot(&config.bot_token, config.telegram_api_url.as_deref())?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let ai: Arc<dyn AiGateway> = Arc::new(GeminiClient::from_config(&config.gemini));

    if config.search.api_key.is_none() {
        info!("BRAVE_API_KEY not set, /websearch will answer with an apology");
    }
    let search: Arc<dyn SearchGateway> = Arc::new(BraveSearchClient::from_config(&config.search));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        store: Arc::new(store),
        ai,
        search,
    })
}

/// Router with logging middleware and one handler per route.
pub fn build_router(components: &BotComponents, download_dir: &str) -> Router {
    Router::new(components.bot.clone())
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(Arc::new(RegistrationHandler::new(components.store.clone())))
        .add_handler(Arc::new(ContactCaptureHandler::new(
            components.store.clone(),
        )))
        .add_handler(Arc::new(ChatReplyHandler::new(
            components.ai.clone(),
            components.store.clone(),
        )))
        .add_handler(Arc::new(
            ImageAnalysisHandler::new(
                components.ai.clone(),
                components.store.clone(),
                components.bot.clone(),
            )
            .with_download_dir(download_dir),
        ))
        .add_handler(Arc::new(WebSearchHandler::new(
            components.search.clone(),
            components.store.clone(),
        )))
}
