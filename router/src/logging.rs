//! Logging middleware: one line per routed event on entry and one with its outcome on exit.

use async_trait::async_trait;
use gbot_core::{DispatchOutcome, EventContent, InboundEvent, Middleware, Result, Route};
use tracing::{info, instrument};

/// Logs every routed event on the way in and its outcome on the way out; never stops dispatch.
pub struct LoggingMiddleware;

fn content_kind(content: &EventContent) -> &'static str {
    match content {
        EventContent::Command { .. } => "command",
        EventContent::Contact { .. } => "contact",
        EventContent::Attachment(_) => "attachment",
        EventContent::Text(_) => "text",
        EventContent::Unsupported => "unsupported",
    }
}

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &InboundEvent, route: Route) -> Result<bool> {
        info!(
            user_id = event.user.id,
            username = %event.user.username.as_deref().unwrap_or("unknown"),
            chat_id = event.chat.id,
            content = content_kind(&event.content),
            route = %route,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, outcome))]
    async fn after(&self, event: &InboundEvent, route: Route, outcome: &DispatchOutcome) -> Result<()> {
        info!(
            event_id = %event.id,
            route = %route,
            outcome = ?outcome,
            "Processed event"
        );
        Ok(())
    }
}
