//! Gemini configuration loaded from the environment.

use anyhow::{Context, Result};
use std::env;

/// Gemini's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// GEMINI_API_KEY is required; GEMINI_BASE_URL and GEMINI_MODEL fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("GEMINI_API_KEY is empty");
        }
        let base_url = env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}
