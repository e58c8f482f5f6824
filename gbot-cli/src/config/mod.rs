//! Application config loaded from env.
//!
//! Required: TELEGRAM_BOT_TOKEN (or `--token`), DATABASE_URL, GEMINI_API_KEY. Everything else has
//! a default.

use anyhow::{Context, Result};
use gemini_client::GeminiConfig;
use handlers::DEFAULT_DOWNLOAD_DIR;
use search_client::SearchConfig;
use std::env;


pub const DEFAULT_LOG_FILE: &str = "logs/gbot.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL; teloxide default when unset
    pub telegram_api_url: Option<String>,
    /// DATABASE_URL, e.g. `sqlite:./gbot.db`
    pub database_url: String,
    pub log_file: String,
    /// Local copies of analyzed attachments
    pub download_dir: String,
    pub gemini: GeminiConfig,
    pub search: SearchConfig,
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn required(name: &str) -> Result<String> {
    optional(name).with_context(|| format!("{} not set", name))
}

impl AppConfig {
    /// Loads from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => required("TELEGRAM_BOT_TOKEN")?,
        };
        let database_url = required("DATABASE_URL")?;
        let gemini = GeminiConfig::from_env()?;
        let search = SearchConfig::from_env();

        Ok(Self {
            bot_token,
            telegram_api_url: optional("TELEGRAM_API_URL"),
            database_url,
            log_file: optional("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            download_dir: optional("DOWNLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_DIR.to_string()),
            gemini,
            search,
        })
    }

    /// Rejects malformed endpoint URLs before anything connects.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url_str);
            }
        }
        if reqwest::Url::parse(&self.gemini.base_url).is_err() {
            anyhow::bail!("GEMINI_BASE_URL is not a valid URL: {}", self.gemini.base_url);
        }
        if reqwest::Url::parse(&self.search.endpoint).is_err() {
            anyhow::bail!("SEARCH_API_URL is not a valid URL: {}", self.search.endpoint);
        }
        Ok(())
    }
}
