//! # Gemini client
//!
//! Defines the [`AiGateway`] trait (text generation and image description) and [`GeminiClient`],
//! which talks to Gemini through its OpenAI-compatible chat completions endpoint via [async-openai].
//! Every call is a single stateless request; no conversation history is sent.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod gemini;
mod image;

pub use config::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use gemini::GeminiClient;
pub use image::{data_url, sniff_mime};

/// Generative content API used by the handlers.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Returns the model's text for a single prompt. May be empty.
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Returns the model's text for a prompt plus one image. May be empty.
    async fn generate_from_image(&self, prompt: &str, image: &[u8]) -> Result<String>;
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
