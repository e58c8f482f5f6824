//! Unit tests for ContactCaptureHandler.

use super::support::{command, create_test_event, memory_store, text, FailingStore};
use crate::contact::{ContactCaptureHandler, CONTACT_THANKS};
use crate::registration::RegistrationHandler;
use gbot_core::{ErrorKind, EventContent, Handler};
use std::sync::Arc;
use storage::BotStore;

fn contact(phone: &str) -> EventContent {
    EventContent::Contact {
        phone_number: phone.to_string(),
    }
}

/// **Test: Contact after registration sets the phone number.**
#[tokio::test]
async fn test_contact_after_registration_sets_phone() {
    let store = memory_store().await;
    RegistrationHandler::new(store.clone())
        .handle(&create_test_event(command("start", &[])))
        .await
        .unwrap();

    let reply = ContactCaptureHandler::new(store.clone())
        .handle(&create_test_event(contact("+15550100")))
        .await
        .unwrap();

    assert_eq!(reply.text, CONTACT_THANKS);
    assert!(reply.keyboard.is_none());
    let user = store.get_user(123).await.unwrap().unwrap();
    assert_eq!(user.phone_number.as_deref(), Some("+15550100"));
}

/// **Test: Contact from an unknown chat is a no-op that still thanks the user.**
#[tokio::test]
async fn test_contact_without_user_is_noop() {
    let store = memory_store().await;

    let reply = ContactCaptureHandler::new(store.clone())
        .handle(&create_test_event(contact("+15550100")))
        .await
        .unwrap();

    assert_eq!(reply.text, CONTACT_THANKS);
    assert!(store.get_user(123).await.unwrap().is_none());
}

#[tokio::test]
async fn test_contact_store_failure() {
    let err = ContactCaptureHandler::new(Arc::new(FailingStore))
        .handle(&create_test_event(contact("+1")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Persistence);
}

#[tokio::test]
async fn test_contact_rejects_other_content() {
    let err = ContactCaptureHandler::new(memory_store().await)
        .handle(&create_test_event(text("hi")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}
