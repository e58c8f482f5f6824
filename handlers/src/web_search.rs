use async_trait::async_trait;
use gbot_core::{BotError, EventContent, Handler, InboundEvent, Reply, Result, Route};
use search_client::{format_results, SearchGateway};
use std::sync::Arc;
use storage::{BotStore, WebSearchRecord};
use tracing::{info, instrument};

pub const SEARCH_USAGE: &str = "Usage: /websearch <query>";
pub const SEARCH_APOLOGY: &str = "Sorry, I couldn't perform the search.";

/// `/websearch <query>`: searches, stores the formatted summary, replies with it.
pub struct WebSearchHandler {
    search: Arc<dyn SearchGateway>,
    store: Arc<dyn BotStore>,
}

impl WebSearchHandler {
    pub fn new(search: Arc<dyn SearchGateway>, store: Arc<dyn BotStore>) -> Self {
        Self { search, store }
    }
}

#[async_trait]
impl Handler for WebSearchHandler {
    fn route(&self) -> Route {
        Route::WebSearch
    }

    fn apology(&self) -> &'static str {
        SEARCH_APOLOGY
    }

    #[instrument(skip(self, event), fields(user_id = event.user.id))]
    async fn handle(&self, event: &InboundEvent) -> Result<Reply> {
        let EventContent::Command { args, .. } = &event.content else {
            return Err(BotError::UnexpectedContent("web_search"));
        };

        let query = args.join(" ");
        if query.trim().is_empty() {
            return Ok(Reply::text(SEARCH_USAGE));
        }

        let results = self
            .search
            .search(&query)
            .await
            .map_err(BotError::gateway)?;
        let summary = format_results(&results);

        let record = WebSearchRecord::new(
            event.user.id,
            event.user.first_name.clone(),
            event.user.display_username(),
            query.clone(),
            summary.clone(),
        );
        self.store
            .insert_web_search(&record)
            .await
            .map_err(BotError::persistence)?;

        info!(query = %query, result_count = results.len(), "Web search completed");
        Ok(Reply::text(format!(
            "🔎 Web Search Results for: {}\n\n{}",
            query, summary
        )))
    }
}
