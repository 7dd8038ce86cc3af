//! Network layer: wire types, REST helpers, and the WebSocket transport.
//!
//! ERROR HANDLING
//! ==============
//! Failures follow a small taxonomy instead of bubbling raw transport
//! errors: history loss degrades to an empty transcript, session-creation
//! failure is surfaced inline and retried by the user, malformed payloads
//! are dropped before they can reach the render buffer. Nothing here is
//! allowed to take the page down.

pub mod api;
pub mod socket;
pub mod types;

use thiserror::Error;

/// Failure kinds of the chat client.
#[derive(Debug, Error)]
pub enum ChatError {
    /// History fetch failed; callers present an empty transcript.
    #[error("chat history unavailable: {0}")]
    HistoryUnavailable(String),

    /// The first-send session mint failed; the message was not sent and the
    /// user may retry.
    #[error("session creation failed: {0}")]
    SessionCreationFailed(String),

    /// The real-time channel is down. Sends fail silently; no reconnect.
    #[error("chat channel disconnected")]
    ChannelDisconnected,

    /// An inbound payload is missing a required field and was dropped.
    #[error("malformed server payload: missing `{0}`")]
    MalformedPayload(&'static str),
}
