use async_trait::async_trait;
use gbot_core::{Bot, BotError, EventContent, Handler, InboundEvent, Reply, Result, Route};
use gemini_client::AiGateway;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storage::{BotStore, FileAnalysisRecord};
use tracing::{debug, info, instrument};

use crate::or_fallback;

pub const IMAGE_PROMPT: &str = "Describe this image:";
pub const IMAGE_FALLBACK: &str = "Couldn't analyze the image.";
pub const IMAGE_REPLY_PREFIX: &str = "🖼 Image Analysis:\n";
pub const IMAGE_APOLOGY: &str = "Sorry, I couldn't analyze this image.";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";

/// Photo or document: download, keep a local copy, ask the model to describe it.
pub struct ImageAnalysisHandler {
    ai: Arc<dyn AiGateway>,
    store: Arc<dyn BotStore>,
    bot: Arc<dyn Bot>,
    download_dir: PathBuf,
}

impl ImageAnalysisHandler {
    pub fn new(ai: Arc<dyn AiGateway>, store: Arc<dyn BotStore>, bot: Arc<dyn Bot>) -> Self {
        Self {
            ai,
            store,
            bot,
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
        }
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// `<download_dir>/<unique_id>.jpg`, whatever the real content type.
    pub fn local_path(&self, unique_id: &str) -> PathBuf {
        self.download_dir.join(format!("{}.jpg", unique_id))
    }
}

#[async_trait]
impl Handler for ImageAnalysisHandler {
    fn route(&self) -> Route {
        Route::ImageAnalysis
    }

    fn apology(&self) -> &'static str {
        IMAGE_APOLOGY
    }

    #[instrument(skip(self, event), fields(user_id = event.user.id, chat_id = event.chat.id))]
    async fn handle(&self, event: &InboundEvent) -> Result<Reply> {
        let EventContent::Attachment(attachment) = &event.content else {
            return Err(BotError::UnexpectedContent("image_analysis"));
        };

        debug!(file_id = %attachment.file_id, kind = ?attachment.kind, "step: fetch attachment");
        let bytes = self.bot.fetch_attachment(&attachment.file_id).await?;

        let path = self.local_path(&attachment.unique_id);
        tokio::fs::create_dir_all(&self.download_dir).await?;
        tokio::fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "Attachment saved");

        let described = self
            .ai
            .generate_from_image(IMAGE_PROMPT, &bytes)
            .await
            .map_err(BotError::gateway)?;
        let analysis = or_fallback(described, IMAGE_FALLBACK);

        let record = FileAnalysisRecord::new(
            event.user.id,
            event.user.first_name.clone(),
            event.user.display_username(),
            path.to_string_lossy().into_owned(),
            analysis.clone(),
        );
        self.store
            .insert_file_analysis(&record)
            .await
            .map_err(BotError::persistence)?;

        info!(
            user_id = event.user.id,
            file = %path.display(),
            "Image analyzed"
        );
        Ok(Reply::text(format!("{}{}", IMAGE_REPLY_PREFIX, analysis)))
    }
}
