use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from the channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Platform user ID of the sender.
    pub sender_id: i64,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text content (caption for document messages).
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Chat to route the reply to.
    pub chat_id: i64,
    /// Platform message ID, used for reply-to threading.
    pub message_id: i64,
    pub attachments: Vec<Attachment>,
}

/// An outgoing reply to send back through the channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub chat_id: i64,
    /// Message to reply to, if any.
    pub reply_to: Option<i64>,
    pub text: String,
    /// Reply keyboard to attach, replacing the current one.
    pub keyboard: Option<ReplyKeyboard>,
    /// Sticker asset to send after the text, if any.
    pub sticker: Option<String>,
}

impl OutgoingMessage {
    /// Plain text reply to an incoming message.
    pub fn reply(incoming: &IncomingMessage, text: impl Into<String>) -> Self {
        Self {
            chat_id: incoming.chat_id,
            reply_to: Some(incoming.message_id),
            text: text.into(),
            keyboard: None,
            sticker: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: ReplyKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_sticker(mut self, sticker: impl Into<String>) -> Self {
        self.sticker = Some(sticker.into());
        self
    }
}

/// A reply keyboard: rows of button labels.
///
/// Labels double as the wire payload — when the user taps a button the
/// platform sends the label back as plain text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
}

impl ReplyKeyboard {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

/// A file attachment on an incoming message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: Option<String>,
    pub data: Vec<u8>,
}
