//! # support-chat
//!
//! Leptos + WASM support chat widget for the customer banking portal.
//! Replaces the React `ChatBot`/`AdminChatBot` components with a Rust-native
//! client: session bootstrap, durable session storage, history loading, a
//! de-duplicating message buffer, and the WebSocket transport.
//!
//! The banking pages themselves live elsewhere; this crate only talks to the
//! remote backend over same-origin `/api` routes.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
