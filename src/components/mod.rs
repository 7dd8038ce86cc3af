//! Chat widget components.
//!
//! DESIGN
//! ======
//! Each mounted widget owns at most one live transport handle, kept in a
//! `StoredValue` slot: attached once per mount, released on every unmount
//! path. The helpers below are the only place that touches the slot, so the
//! acquire/release discipline stays in one spot.

pub mod admin_chat;
pub mod chat_widget;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::socket::{self, ChatSocket};
use crate::net::types::OutboundMessage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Slot holding a widget's one live transport handle.
#[cfg(feature = "hydrate")]
pub(crate) type SocketSlot = StoredValue<Option<ChatSocket>>;
#[cfg(not(feature = "hydrate"))]
pub(crate) type SocketSlot = StoredValue<Option<()>>;

pub(crate) fn new_socket_slot() -> SocketSlot {
    StoredValue::new(None)
}

/// Attach the channel if this widget has none yet.
pub(crate) fn attach_channel(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    slot: SocketSlot,
) {
    #[cfg(feature = "hydrate")]
    {
        if slot.with_value(Option::is_none) {
            slot.set_value(Some(socket::connect(chat, session)));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, session, slot);
    }
}

/// Release the channel. Safe on every unmount path, including when no
/// channel was ever attached.
pub(crate) fn close_channel(slot: SocketSlot) {
    #[cfg(feature = "hydrate")]
    {
        let mut taken = None;
        slot.update_value(|s| taken = s.take());
        if let Some(sock) = taken {
            sock.close();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slot;
    }
}

/// Best-effort send through the slot's channel. A dropped channel is logged
/// and otherwise ignored; there is no retry.
pub(crate) fn send_over_channel(slot: SocketSlot, msg: &OutboundMessage) {
    #[cfg(feature = "hydrate")]
    {
        let delivered = slot.with_value(|s| s.as_ref().map(|sock| sock.send(msg)).unwrap_or(false));
        if !delivered {
            leptos::logging::warn!("chat send dropped: {}", crate::net::ChatError::ChannelDisconnected);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (slot, msg);
    }
}
