//! # Router
//!
//! Classifies each inbound event into one [`Route`] and runs the single handler registered for it,
//! wrapped by middleware (before in order, after in reverse). The router owns presentation of
//! failures: gateway and persistence errors become the handler's fixed apology, as does a reply the
//! transport refused to deliver; other handler errors abandon the event without a reply.

mod logging;

pub use logging::LoggingMiddleware;

use gbot_core::{
    Bot, BotError, DispatchOutcome, ErrorKind, Handler, InboundEvent, Middleware, Route,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Route table plus the outbound bot used to deliver replies and apologies.
#[derive(Clone)]
pub struct Router {
    bot: Arc<dyn Bot>,
    middleware: Vec<Arc<dyn Middleware>>,
    handlers: HashMap<Route, Arc<dyn Handler>>,
}

impl Router {
    /// Creates a router with no middleware and no handlers.
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            middleware: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Appends a middleware (before runs in insertion order, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Registers a handler under its own route; a later handler for the same route replaces the earlier one.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        let route = handler.route();
        if self.handlers.insert(route, handler).is_some() {
            warn!(route = %route, "Handler replaced for route");
        }
        self
    }

    pub fn has_route(&self, route: Route) -> bool {
        self.handlers.contains_key(&route)
    }

    /// Dispatches one event to at most one handler and delivers the result.
    #[instrument(skip(self, event), fields(event_id = %event.id, chat_id = event.chat.id))]
    pub async fn dispatch(&self, event: &InboundEvent) -> DispatchOutcome {
        let route = Route::classify(&event.content);
        let handler = match self.handlers.get(&route) {
            Some(handler) => handler,
            None => {
                debug!(route = %route, "No handler for event, dropped");
                return DispatchOutcome::Dropped;
            }
        };

        for mw in &self.middleware {
            match mw.before(event, route).await {
                Ok(true) => {}
                Ok(false) => {
                    info!(route = %route, "Middleware stopped event");
                    return DispatchOutcome::Stopped;
                }
                Err(e) => {
                    error!(route = %route, error = %e, "Middleware before failed");
                    return DispatchOutcome::Stopped;
                }
            }
        }

        info!(
            user_id = event.user.id,
            route = %route,
            "step: handler processing"
        );

        let outcome = match handler.handle(event).await {
            Ok(reply) => match self.bot.send_reply(&event.chat, &reply).await {
                Ok(()) => DispatchOutcome::Replied,
                Err(e) => {
                    error!(route = %route, error = %e, "Failed to send reply, trying apology");
                    match self.bot.send_message(&event.chat, handler.apology()).await {
                        Ok(()) => DispatchOutcome::Apologized(e.kind()),
                        Err(e) => {
                            error!(route = %route, error = %e, "Failed to send apology");
                            DispatchOutcome::Aborted(e.kind())
                        }
                    }
                }
            },
            Err(e) => self.render_failure(event, route, handler.apology(), e).await,
        };

        for mw in self.middleware.iter().rev() {
            if let Err(e) = mw.after(event, route, &outcome).await {
                warn!(route = %route, error = %e, "Middleware after failed");
            }
        }

        outcome
    }

    /// Gateway/persistence failures are apologized for; other kinds abort the event silently.
    async fn render_failure(
        &self,
        event: &InboundEvent,
        route: Route,
        apology: &str,
        err: BotError,
    ) -> DispatchOutcome {
        let kind = err.kind();
        match kind {
            ErrorKind::Gateway | ErrorKind::Persistence => {
                error!(
                    user_id = event.user.id,
                    route = %route,
                    error = %err,
                    "Handler failed, sending apology"
                );
                match self.bot.send_message(&event.chat, apology).await {
                    Ok(()) => DispatchOutcome::Apologized(kind),
                    Err(e) => {
                        error!(route = %route, error = %e, "Failed to send apology");
                        DispatchOutcome::Aborted(e.kind())
                    }
                }
            }
            _ => {
                error!(
                    user_id = event.user.id,
                    route = %route,
                    error = %err,
                    "Unhandled fault, event aborted"
                );
                DispatchOutcome::Aborted(kind)
            }
        }
    }
}
