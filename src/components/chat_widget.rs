//! Customer-facing floating support chat widget.
//!
//! Drives the session bootstrap machine: resume from the stored session via
//! the history endpoint, or prompt for a display name and mint a session on
//! the first send. Every message (history, push, or local echo) renders
//! through the de-duplicating buffer.

use leptos::prelude::*;

use super::{SocketSlot, attach_channel, close_channel, new_socket_slot, send_over_channel};
use crate::net::api;
use crate::net::types::OutboundMessage;
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::session::{CreateTicket, OpenAction, SessionPhase, SessionState};
use crate::state::ui::UiState;
use crate::util::storage;

/// Floating launcher button plus the chat window and name prompt overlay.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let name_input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let socket_slot = new_socket_slot();

    // Opportunistic liveness probe; informational only, never gates the UI.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(api::healthcheck());

    // Every unmount path releases the channel; the stored session and the
    // buffer are retained so the next open resumes.
    on_cleanup(move || {
        close_channel(socket_slot);
        session.update(|s| s.close());
    });

    // Keep the view pinned to the latest message.
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

    let open_window = move |_| {
        if ui.get_untracked().window_open {
            return;
        }
        ui.update(|u| u.window_open = true);

        let action = session
            .try_update(|s| s.open(storage::load()))
            .unwrap_or(OpenAction::PromptForName);
        match action {
            OpenAction::Resume { session_id } => {
                chat.update(|c| c.begin_history());
                attach_channel(chat, session, socket_slot);
                leptos::task::spawn_local(resume_history(chat, session, session_id));
            }
            OpenAction::PromptForName => ui.update(|u| u.name_prompt_open = true),
        }
    };

    let close_window = move |_| {
        ui.update(|u| {
            u.window_open = false;
            u.name_prompt_open = false;
        });
        close_channel(socket_slot);
        session.update(|s| s.close());
    };

    let dismiss_prompt = move |_| {
        ui.update(|u| {
            u.name_prompt_open = false;
            u.window_open = false;
        });
        session.update(|s| s.close());
    };

    let restart_chat = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to restart the chat? This will clear your chat history.",
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            storage::clear();
            chat.update(|c| c.clear());
            close_channel(socket_slot);
            session.update(|s| s.restart());
            ui.update(|u| {
                u.window_open = false;
                u.name_prompt_open = false;
                u.dismiss_notice();
            });
            if let Some(w) = web_sys::window() {
                let _ = w.location().reload();
            }
        }
    };

    let submit_name = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name_input.get_untracked();
        let accepted = session.try_update(|s| s.submit_name(&name)).unwrap_or(false);
        if !accepted {
            return;
        }
        ui.update(|u| u.name_prompt_open = false);
        if let Some(display_name) = session.get_untracked().display_name {
            chat.update(|c| c.append(ChatMessage::greeting(&display_name)));
        }
    };

    let do_send = move || {
        let text = input.get_untracked().trim().to_owned();
        if text.is_empty() {
            return;
        }

        let snapshot = session.get_untracked();
        if snapshot.is_active() {
            if let Some(session_id) = snapshot.session_id {
                // Steady-state send: optimistic echo first, then
                // fire-and-forget over the channel.
                let msg = OutboundMessage::customer(&text, &session_id);
                chat.update(|c| c.append(msg.to_chat_message()));
                send_over_channel(socket_slot, &msg);
                input.set(String::new());
            }
            return;
        }

        // First send of a new session: the mint call fires exactly once.
        let Some(ticket) = session.try_update(|s| s.begin_create()).flatten() else {
            return;
        };
        let Some(name) = snapshot.display_name else {
            return;
        };
        leptos::task::spawn_local(create_session_and_send(
            chat,
            session,
            ui,
            socket_slot,
            input,
            ticket,
            name,
            text,
        ));
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <button class="chat-widget__launcher" on:click=open_window title="Customer support">
            "Chat with us"
        </button>

        <Show when=move || ui.get().window_open>
            <div class="chat-widget__window">
                <div class="chat-widget__header">
                    <span class="chat-widget__user">
                        {move || session.get().display_name.unwrap_or_default()}
                    </span>
                    <div class="chat-widget__header-actions">
                        <button class="chat-widget__restart" on:click=restart_chat title="Restart chat">
                            "Restart"
                        </button>
                        <button class="chat-widget__close" on:click=close_window>"X"</button>
                    </div>
                </div>

                {move || {
                    ui.get().notice.map(|text| view! { <div class="chat-widget__notice">{text}</div> })
                }}

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-widget__empty">"No messages yet"</div>
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
                                        class="chat-widget__bubble"
                                        class=("chat-widget__bubble--user", is_user)
                                        class=("chat-widget__bubble--agent", !is_user)
                                    >
                                        {text}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary chat-widget__send" on:click=on_click disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
            </div>
        </Show>

        <Show when=move || ui.get().name_prompt_open>
            <div class="chat-widget__overlay">
                <div class="chat-widget__prompt">
                    <button class="chat-widget__prompt-close" on:click=dismiss_prompt>"X"</button>
                    <form on:submit=submit_name>
                        <h3>"What's your name?"</h3>
                        <input
                            class="chat-widget__prompt-input"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name_input.get()
                            on:input=move |ev| name_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit">"Start Chat"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Resume path: fetch the transcript, seed the buffer, then activate.
/// Results that resolve after unmount are discarded.
async fn resume_history(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    session_id: String,
) {
    let result = api::fetch_history(&session_id).await;

    // The widget may have been closed while the fetch was in flight; a
    // disposed view must not be mutated.
    if session.get_untracked().phase != SessionPhase::Resuming {
        return;
    }

    match result {
        Ok(transcript) => chat.update(|c| c.finish_history(transcript)),
        Err(e) => {
            leptos::logging::warn!("{e}; presenting empty transcript");
            chat.update(|c| c.history_unavailable());
        }
    }
    session.update(|s| s.resumed());
}

/// First-send path: mint the session, persist it, attach the channel, then
/// deliver the message through the steady-state send path.
///
/// The ticket pins the outcome to the attempt that claimed it: a result
/// that arrives after the widget closed, or after a later attempt took
/// over, is discarded without touching state or storage.
async fn create_session_and_send(
    chat: RwSignal<ChatState>,
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    slot: SocketSlot,
    input: RwSignal<String>,
    ticket: CreateTicket,
    display_name: String,
    text: String,
) {
    match api::start_session(&display_name).await {
        Ok(session_id) => {
            let Some(pair) = session
                .try_update(|s| s.create_succeeded(ticket, session_id.clone()))
                .flatten()
            else {
                return;
            };
            storage::save(&pair);
            attach_channel(chat, session, slot);

            let msg = OutboundMessage::customer(&text, &session_id);
            chat.update(|c| c.append(msg.to_chat_message()));
            send_over_channel(slot, &msg);
            input.set(String::new());
        }
        Err(e) => {
            // The message was not sent; the user stays in the name prompt
            // flow and may retry. A stale ticket is dropped silently.
            leptos::logging::warn!("{e}");
            if session.try_update(|s| s.create_failed(ticket)).unwrap_or(false) {
                show_transient_notice(ui, "Your message was not sent. Please try again.");
            }
        }
    }
}

/// Show an inline notice that dismisses itself after a few seconds.
fn show_transient_notice(ui: RwSignal<UiState>, text: &str) {
    ui.update(|u| u.show_notice(text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        ui.update(|u| u.dismiss_notice());
    });
}
