//! Agent-side console view of one customer session.
//!
//! Mounted per session from the admin user-management console. It owns its
//! own buffer and transport handle, independent of any customer widget,
//! and sends as the agent through the same de-duplicating path.

use leptos::prelude::*;

use super::{attach_channel, close_channel, new_socket_slot, send_over_channel};
use crate::net::api;
use crate::net::types::OutboundMessage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Transcript and reply box for a single session id.
#[component]
pub fn AdminChatPanel(#[prop(into)] session_id: String) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    // Connection bookkeeping only; the admin panel has no bootstrap phase.
    let session = RwSignal::new(SessionState::default());

    let input = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let socket_slot = new_socket_slot();

    // One-shot: load the transcript and attach the channel on first run.
    let history_started = RwSignal::new(false);
    Effect::new({
        let session_id = session_id.clone();
        move || {
            if history_started.get() {
                return;
            }
            history_started.set(true);

            chat.update(|c| c.begin_history());
            attach_channel(chat, session, socket_slot);

            let session_id = session_id.clone();
            leptos::task::spawn_local(async move {
                match api::fetch_history(&session_id).await {
                    Ok(transcript) => chat.update(|c| c.finish_history(transcript)),
                    Err(e) => {
                        leptos::logging::warn!("{e}; presenting empty transcript");
                        chat.update(|c| c.history_unavailable());
                    }
                }
                loading.set(false);
            });
        }
    });

    on_cleanup(move || close_channel(socket_slot));

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = {
        let session_id = session_id.clone();
        move || {
            let text = input.get_untracked().trim().to_owned();
            if text.is_empty() {
                return;
            }
            let msg = OutboundMessage::agent(&text, &session_id);
            chat.update(|c| c.append(msg.to_chat_message()));
            send_over_channel(socket_slot, &msg);
            input.set(String::new());
        }
    };

    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="admin-chat">
            <div class="admin-chat__header">
                <span class="admin-chat__title">"Session "{session_id}</span>
            </div>

            <div class="admin-chat__messages" node_ref=messages_ref>
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="admin-chat__loading">"Loading conversation..."</div>
                        }
                            .into_any();
                    }

                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="admin-chat__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.author.is_user();
                            let text = msg.text.clone();
                            view! {
                                <div
                                    class="admin-chat__bubble"
                                    class=("admin-chat__bubble--customer", is_user)
                                    class=("admin-chat__bubble--agent", !is_user)
                                >
                                    {text}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="admin-chat__input-row">
                <input
                    class="admin-chat__input"
                    type="text"
                    placeholder="Reply to the customer..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary admin-chat__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
