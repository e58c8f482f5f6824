//! Adapters from Telegram (teloxide) types to gbot_core types.

use gbot_core::{
    parse_command, Attachment, AttachmentKind, Chat, EventContent, InboundEvent, ToInboundEvent,
    User,
};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_user(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            first_name: self.0.first_name.clone(),
            username: self.0.username.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to an [`InboundEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> InboundEvent {
        InboundEvent {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_user())
                .unwrap_or_else(|| User {
                    id: self.0.chat.id.0,
                    first_name: String::new(),
                    username: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
            },
            content: self.content(),
            received_at: chrono::Utc::now(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Text (command or plain), then contact, then photo, then document.
    fn content(&self) -> EventContent {
        let msg = self.0;
        if let Some(text) = msg.text() {
            return match parse_command(text) {
                Some((name, args)) => EventContent::Command { name, args },
                None => EventContent::Text(text.to_string()),
            };
        }
        if let Some(contact) = msg.contact() {
            return EventContent::Contact {
                phone_number: contact.phone_number.clone(),
            };
        }
        // sizes are ascending; the last one is the original resolution
        if let Some(largest) = msg.photo().and_then(|sizes| sizes.last()) {
            return EventContent::Attachment(Attachment {
                file_id: largest.file.id.0.clone(),
                unique_id: largest.file.unique_id.0.clone(),
                kind: AttachmentKind::Photo,
                file_name: None,
            });
        }
        if let Some(doc) = msg.document() {
            return EventContent::Attachment(Attachment {
                file_id: doc.file.id.0.clone(),
                unique_id: doc.file.unique_id.0.clone(),
                kind: AttachmentKind::Document,
                file_name: doc.file_name.clone(),
            });
        }
        EventContent::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(extra: serde_json::Value) -> teloxide::types::Message {
        let mut value = json!({
            "message_id": 7,
            "date": 1_700_000_000,
            "chat": { "id": 42, "type": "private", "first_name": "Ada" },
            "from": { "id": 42, "is_bot": false, "first_name": "Ada", "username": "ada" }
        });
        for (k, v) in extra.as_object().unwrap() {
            value[k] = v.clone();
        }
        serde_json::from_value(value).expect("valid telegram message")
    }

    /// **Test: TelegramUserWrapper converts teloxide User with id, first_name and username.**
    #[test]
    fn test_telegram_user_wrapper_to_user() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_user();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.first_name, "Test");
        assert_eq!(core_user.username, Some("testuser".to_string()));
    }

    #[test]
    fn test_command_message() {
        let event = TelegramMessageWrapper(&message(json!({ "text": "/websearch hello world" })))
            .to_event();

        assert_eq!(event.id, "7");
        assert_eq!(event.user.id, 42);
        assert_eq!(event.chat.id, 42);
        assert_eq!(
            event.content,
            EventContent::Command {
                name: "websearch".to_string(),
                args: vec!["hello".to_string(), "world".to_string()],
            }
        );
    }

    #[test]
    fn test_plain_text_message() {
        let event = TelegramMessageWrapper(&message(json!({ "text": "hi there" }))).to_event();
        assert_eq!(event.content, EventContent::Text("hi there".to_string()));
    }

    #[test]
    fn test_contact_message() {
        let event = TelegramMessageWrapper(&message(json!({
            "contact": { "phone_number": "+15550100", "first_name": "Ada", "user_id": 42 }
        })))
        .to_event();
        assert_eq!(
            event.content,
            EventContent::Contact {
                phone_number: "+15550100".to_string()
            }
        );
    }

    /// **Test: Photo messages use the largest (last) size.**
    #[test]
    fn test_photo_message_picks_largest_size() {
        let event = TelegramMessageWrapper(&message(json!({
            "photo": [
                { "file_id": "small", "file_unique_id": "s", "width": 90, "height": 90, "file_size": 100 },
                { "file_id": "large", "file_unique_id": "l", "width": 1280, "height": 1280, "file_size": 9000 }
            ]
        })))
        .to_event();

        match event.content {
            EventContent::Attachment(a) => {
                assert_eq!(a.file_id, "large");
                assert_eq!(a.unique_id, "l");
                assert_eq!(a.kind, AttachmentKind::Photo);
            }
            other => panic!("expected attachment, got {:?}", other),
        }
    }

    #[test]
    fn test_document_message() {
        let event = TelegramMessageWrapper(&message(json!({
            "document": {
                "file_id": "doc", "file_unique_id": "du",
                "file_name": "cat.png", "mime_type": "image/png", "file_size": 10
            }
        })))
        .to_event();

        assert_eq!(
            event.content,
            EventContent::Attachment(Attachment {
                file_id: "doc".to_string(),
                unique_id: "du".to_string(),
                kind: AttachmentKind::Document,
                file_name: Some("cat.png".to_string()),
            })
        );
    }

    #[test]
    fn test_other_content_is_unsupported() {
        let event = TelegramMessageWrapper(&message(json!({
            "location": { "latitude": 51.5, "longitude": -0.12 }
        })))
        .to_event();
        assert_eq!(event.content, EventContent::Unsupported);
    }
}
