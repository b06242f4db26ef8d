//! Message sending: text with reply keyboards, and stickers.

use super::TelegramChannel;
use cargotrack_core::{error::CargotrackError, message::ReplyKeyboard};

impl TelegramChannel {
    /// Send a text message, optionally replying to a message and attaching
    /// a reply keyboard. Long texts are split at the Bot API limit.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        reply_to: Option<i64>,
        text: &str,
        keyboard: Option<&ReplyKeyboard>,
    ) -> Result<(), CargotrackError> {
        let chunks = split_message(text, 4096);
        let last = chunks.len().saturating_sub(1);

        for (i, chunk) in chunks.iter().enumerate() {
            let url = format!("{}/sendMessage", self.base_url);
            let mut body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            if let Some(id) = reply_to {
                body["reply_to_message_id"] = serde_json::json!(id);
            }
            // Keyboard goes on the final chunk so it stays visible.
            if i == last {
                if let Some(kb) = keyboard {
                    body["reply_markup"] = keyboard_markup(kb);
                }
            }

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| CargotrackError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                return Err(CargotrackError::Channel(format!(
                    "telegram send failed ({status}): {error_text}"
                )));
            }
        }

        Ok(())
    }

    /// Send a sticker by pre-registered file_id.
    pub(crate) async fn send_sticker(
        &self,
        chat_id: i64,
        sticker: &str,
    ) -> Result<(), CargotrackError> {
        let url = format!("{}/sendSticker", self.base_url);
        let body = serde_json::json!({
            "chat_id": chat_id,
            "sticker": sticker,
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CargotrackError::Channel(format!("telegram sendSticker failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(CargotrackError::Channel(format!(
                "telegram sendSticker failed ({status}): {error_text}"
            )));
        }

        Ok(())
    }
}

/// Build the `reply_markup` payload for a reply keyboard.
pub(crate) fn keyboard_markup(keyboard: &ReplyKeyboard) -> serde_json::Value {
    let rows: Vec<Vec<serde_json::Value>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| serde_json::json!({ "text": label }))
                .collect()
        })
        .collect();
    serde_json::json!({
        "keyboard": rows,
        "resize_keyboard": true,
    })
}

/// Split a message into chunks of at most `limit` bytes, preferring to
/// break on line boundaries.
pub(crate) fn split_message(text: &str, limit: usize) -> Vec<String> {
    if text.len() <= limit {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for line in text.split_inclusive('\n') {
        if current.len() + line.len() > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        // A single line longer than the limit is split hard.
        if line.len() > limit {
            let mut rest = line;
            while rest.len() > limit {
                let mut cut = limit;
                while !rest.is_char_boundary(cut) {
                    cut -= 1;
                }
                let (head, tail) = rest.split_at(cut);
                chunks.push(head.to_string());
                rest = tail;
            }
            current.push_str(rest);
        } else {
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
