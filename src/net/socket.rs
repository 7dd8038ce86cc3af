//! WebSocket transport channel for the chat widgets.
//!
//! A [`ChatSocket`] is an owned value, one per mounted widget instance,
//! never a module-level singleton, so re-mounts and multiple views cannot
//! interfere with each other. Connect at most once per mount and pair with
//! exactly one close on every unmount path.
//!
//! There is no reconnect or backoff: when the channel drops, the connection
//! status flips to `Disconnected` and later sends fail silently until the
//! next mount. Inbound payloads are validated before they can reach the
//! de-duplication buffer.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since
//! it requires a browser environment.

#[cfg(feature = "hydrate")]
use crate::net::types::{OutboundMessage, parse_inbound_message};
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Handle to the one live connection owned by a mounted widget.
#[cfg(feature = "hydrate")]
pub struct ChatSocket {
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

#[cfg(feature = "hydrate")]
impl ChatSocket {
    /// Queue a message for delivery. Best-effort and fire-and-forget: no
    /// acknowledgment is modeled, and `false` means the channel is gone.
    pub fn send(&self, msg: &OutboundMessage) -> bool {
        if let Ok(json) = serde_json::to_string(msg) {
            self.tx.unbounded_send(json).is_ok()
        } else {
            false
        }
    }

    /// Release the connection. Dropping the outbound sender ends the pump
    /// task, which tears down the socket; no further inbound dispatch runs
    /// afterwards.
    pub fn close(self) {
        drop(self.tx);
    }
}

/// Open the channel and spawn its pump task. Call at most once per mount,
/// paired with exactly one [`ChatSocket::close`].
#[cfg(feature = "hydrate")]
pub fn connect(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) -> ChatSocket {
    let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
    leptos::task::spawn_local(run(chat, session, rx));
    ChatSocket { tx }
}

/// Connection lifetime: open, pump in both directions, mark disconnected.
#[cfg(feature = "hydrate")]
async fn run(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    session.update(|s| s.connection = ConnectionStatus::Connecting);

    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    let ws_url = format!("{ws_proto}://{host}/api/chat/ws");

    let ws = match WebSocket::open(&ws_url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("chat socket open failed: {e}");
            session.update(|s| s.connection = ConnectionStatus::Disconnected);
            return;
        }
    };
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection = ConnectionStatus::Connected);

    // Forward queued outbound messages to the socket sink.
    let send_task = async {
        use futures::SinkExt;
        let mut rx = rx;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: validate each inbound payload, then hand it to the
    // de-duplicating buffer in delivery order.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<serde_json::Value>(&text) {
                    Ok(value) => match parse_inbound_message(&value) {
                        Ok(inbound) => chat.update(|c| c.push_inbound(inbound)),
                        Err(e) => leptos::logging::warn!("dropping inbound chat payload: {e}"),
                    },
                    Err(e) => leptos::logging::warn!("dropping non-JSON chat payload: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("chat socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes (close dropped the sender, or the server
    // hung up), the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    session.update(|s| s.connection = ConnectionStatus::Disconnected);
}
