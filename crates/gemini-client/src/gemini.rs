//! [`AiGateway`] backed by Gemini's OpenAI-compatible chat completions endpoint.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrlArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::config::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::image::data_url;
use crate::{mask_token, AiGateway};

/// Gemini client. Wraps an async-openai client pointed at the Gemini API root.
#[derive(Clone)]
pub struct GeminiClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    /// Stored only for masked logging.
    api_key_for_logging: String,
}

impl GeminiClient {
    /// Builds a client with the default base URL and model.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client against a custom API root (proxies, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/'));
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging,
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
            .with_model(config.model.clone())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one user message and returns the first choice's content (empty if the model sent none).
    async fn complete(&self, message: ChatCompletionRequestMessage) -> Result<String> {
        tracing::info!(
            model = %self.model,
            api_key = %mask_token(&self.api_key_for_logging),
            "Gemini chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "Gemini chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from Gemini"),
        }
    }
}

#[async_trait]
impl AiGateway for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();
        self.complete(message).await
    }

    #[instrument(skip(self, prompt, image), fields(image_bytes = image.len()))]
    async fn generate_from_image(&self, prompt: &str, image: &[u8]) -> Result<String> {
        let text_part = ChatCompletionRequestMessageContentPartTextArgs::default()
            .text(prompt)
            .build()?;
        let image_part = ChatCompletionRequestMessageContentPartImageArgs::default()
            .image_url(
                ImageUrlArgs::default()
                    .url(data_url(image))
                    .detail(ImageDetail::Auto)
                    .build()?,
            )
            .build()?;
        let content = ChatCompletionRequestUserMessageContent::Array(vec![
            ChatCompletionRequestUserMessageContentPart::Text(text_part),
            ChatCompletionRequestUserMessageContentPart::ImageUrl(image_part),
        ]);
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into();
        self.complete(message).await
    }
}
