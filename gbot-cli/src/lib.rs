//! # gbot-cli
//!
//! CLI parsing, configuration from the environment, component assembly and the run loop.

pub mod cli;
pub mod components;
pub mod config;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_router, BotComponents};
pub use config::AppConfig;

use anyhow::Result;
use tracing::{info, instrument};

/// Validates config, starts logging, builds components and polls until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    config.validate()?;
    gbot_core::init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        model = %config.gemini.model,
        api_key = %gemini_client::mask_token(&config.gemini.api_key),
        search_enabled = config.search.api_key.is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let router = build_router(&components, &config.download_dir);

    info!("Bot started successfully");
    gbot_telegram::run_polling(components.teloxide_bot.clone(), router).await
}
