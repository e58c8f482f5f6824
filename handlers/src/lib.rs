//! # Handlers
//!
//! One handler per route: registration, contact capture, chat reply, image analysis and web search.
//! Each handler receives its gateways at construction and returns a [`gbot_core::Reply`] or a
//! classified [`gbot_core::BotError`]; the router decides how failures reach the user.

mod chat_reply;
mod contact;
mod image_analysis;
mod registration;
mod web_search;

#[cfg(test)]
mod test;

pub use chat_reply::{ChatReplyHandler, CHAT_APOLOGY, CHAT_FALLBACK};
pub use contact::{ContactCaptureHandler, CONTACT_APOLOGY, CONTACT_THANKS};
pub use image_analysis::{
    ImageAnalysisHandler, DEFAULT_DOWNLOAD_DIR, IMAGE_APOLOGY, IMAGE_FALLBACK, IMAGE_PROMPT,
    IMAGE_REPLY_PREFIX,
};
pub use registration::{
    RegistrationHandler, REGISTRATION_APOLOGY, SHARE_CONTACT_BUTTON, WELCOME_MESSAGE,
};
pub use web_search::{WebSearchHandler, SEARCH_APOLOGY, SEARCH_USAGE};

/// Returns the model text, or `fallback` when it is empty or whitespace only.
pub(crate) fn or_fallback(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
