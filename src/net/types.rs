#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::ChatError;
use crate::state::chat::{Author, ChatMessage};

/// Message submitted over the real-time channel, in the server's camelCase
/// shape: `{message, id, sender, isUser, sessionId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub message: String,
    pub id: String,
    pub sender: String,
    pub is_user: bool,
    pub session_id: String,
}

impl OutboundMessage {
    /// Customer-authored message with a freshly minted id. Ids are uuid-v4
    /// rather than wall-clock timestamps so rapid retries cannot collide,
    /// and the id rides along so a server echo collapses in the buffer.
    pub fn customer(text: &str, session_id: &str) -> Self {
        Self {
            message: text.to_owned(),
            id: uuid::Uuid::new_v4().to_string(),
            sender: "user".to_owned(),
            is_user: true,
            session_id: session_id.to_owned(),
        }
    }

    /// Agent-authored message sent from the admin console.
    pub fn agent(text: &str, session_id: &str) -> Self {
        Self {
            message: text.to_owned(),
            id: uuid::Uuid::new_v4().to_string(),
            sender: "admin".to_owned(),
            is_user: false,
            session_id: session_id.to_owned(),
        }
    }

    /// The optimistic local echo inserted into the buffer before the send.
    pub fn to_chat_message(&self) -> ChatMessage {
        ChatMessage {
            id: self.id.clone(),
            text: self.message.clone(),
            author: Author::from_is_user(self.is_user),
        }
    }
}

/// Body of `POST /api/chat/start`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartChatRequest {
    pub chat_user: String,
}

/// Response of `POST /api/chat/start`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartChatResponse {
    pub session_id: String,
}

/// Parse one inbound message payload: `{id, message | text, isUser}`.
///
/// Lenient on the text field name, strict on presence: a payload missing
/// `id` or its text is rejected so it never reaches the render buffer.
///
/// # Errors
///
/// [`ChatError::MalformedPayload`] naming the missing field.
pub fn parse_inbound_message(data: &serde_json::Value) -> Result<ChatMessage, ChatError> {
    let id = data
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or(ChatError::MalformedPayload("id"))?;

    let text = data
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| data.get("text").and_then(|v| v.as_str()))
        .ok_or(ChatError::MalformedPayload("message"))?;

    let is_user = data.get("isUser").and_then(|v| v.as_bool()).unwrap_or(false);

    Ok(ChatMessage {
        id: id.to_owned(),
        text: text.to_owned(),
        author: Author::from_is_user(is_user),
    })
}

/// Parse the history response body `{"messages": [...]}` in server-given
/// order. Malformed entries are dropped with a warning; the rest survive.
pub fn parse_history(body: &serde_json::Value) -> Vec<ChatMessage> {
    body.get("messages")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match parse_inbound_message(item) {
                    Ok(msg) => Some(msg),
                    Err(e) => {
                        leptos::logging::warn!("dropping history entry: {e}");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}
