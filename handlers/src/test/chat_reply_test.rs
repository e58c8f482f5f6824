//! Unit tests for ChatReplyHandler: model output, fallback, stored exchange, failures.

use super::support::{
    create_group_event, create_test_event, memory_store, text, FailingStore, StubAi,
};
use crate::chat_reply::{ChatReplyHandler, CHAT_FALLBACK};
use gbot_core::{ErrorKind, Handler};
use std::sync::Arc;
use storage::BotStore;

/// **Test: The model text is replied and exactly one exchange is stored.**
#[tokio::test]
async fn test_chat_reply_stores_exchange() {
    let store = memory_store().await;
    let ai = StubAi::replying("Rust is a systems language.");
    let handler = ChatReplyHandler::new(ai.clone(), store.clone());

    let reply = handler
        .handle(&create_test_event(text("What is Rust?")))
        .await
        .unwrap();

    assert_eq!(reply.text, "Rust is a systems language.");
    assert_eq!(*ai.prompts.lock().unwrap(), vec!["What is Rust?".to_string()]);

    let history = store.chat_history(123).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].user_message, "What is Rust?");
    assert_eq!(history[0].bot_response, "Rust is a systems language.");
    assert_eq!(history[0].username, "test_user");
}

/// **Test: Empty or whitespace model output is replaced by the fallback, in reply and record.**
#[tokio::test]
async fn test_chat_reply_empty_output_uses_fallback() {
    for empty in ["", "   \n"] {
        let store = memory_store().await;
        let handler = ChatReplyHandler::new(StubAi::replying(empty), store.clone());

        let reply = handler
            .handle(&create_test_event(text("hello")))
            .await
            .unwrap();

        assert_eq!(reply.text, CHAT_FALLBACK);
        let history = store.chat_history(123).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].bot_response, CHAT_FALLBACK);
    }
}

/// **Test: Each message is sent alone; earlier turns are not fed back to the model.**
#[tokio::test]
async fn test_chat_reply_is_stateless() {
    let store = memory_store().await;
    let ai = StubAi::replying("ok");
    let handler = ChatReplyHandler::new(ai.clone(), store.clone());

    handler.handle(&create_test_event(text("first"))).await.unwrap();
    handler.handle(&create_test_event(text("second"))).await.unwrap();

    assert_eq!(
        *ai.prompts.lock().unwrap(),
        vec!["first".to_string(), "second".to_string()]
    );
    assert_eq!(store.chat_history(123).await.unwrap().len(), 2);
}

/// **Test: A gateway failure stores nothing and surfaces as a gateway error.**
#[tokio::test]
async fn test_chat_reply_gateway_failure_stores_nothing() {
    let store = memory_store().await;
    let handler = ChatReplyHandler::new(StubAi::failing(), store.clone());

    let err = handler
        .handle(&create_test_event(text("hello")))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Gateway);
    assert!(store.chat_history(123).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_chat_reply_store_failure() {
    let handler = ChatReplyHandler::new(StubAi::replying("hi"), Arc::new(FailingStore));
    let err = handler
        .handle(&create_test_event(text("hello")))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Persistence);
}

/// **Test: In a group chat the exchange is stored under the sender id, matching the user record.**
#[tokio::test]
async fn test_chat_reply_in_group_stored_under_sender_id() {
    let store = memory_store().await;
    let handler = ChatReplyHandler::new(StubAi::replying("hey"), store.clone());

    handler
        .handle(&create_group_event(text("hi")))
        .await
        .unwrap();

    let history = store.chat_history(123).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].chat_id, 123);
    assert!(store.chat_history(-100).await.unwrap().is_empty());
}
