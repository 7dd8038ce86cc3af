//! REST helpers for the chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! `/api` routes. Server-side (SSR): stubs returning the failure kind, since
//! these endpoints are only meaningful in the browser.
//!
//! History loss and session-mint failure are both recoverable by design:
//! callers fall back to an empty transcript or keep the user in the name
//! prompt. Nothing here crashes the page.

#![allow(clippy::unused_async)]

use super::ChatError;
use crate::state::chat::ChatMessage;

/// Fetch the full transcript for a session via
/// `GET /api/chat/history/{sessionId}`.
///
/// # Errors
///
/// [`ChatError::HistoryUnavailable`] on any network or server failure.
/// Callers treat this as an empty transcript, never as fatal.
pub async fn fetch_history(session_id: &str) -> Result<Vec<ChatMessage>, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/chat/history/{session_id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ChatError::HistoryUnavailable(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::HistoryUnavailable(format!("status {}", resp.status())));
        }
        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ChatError::HistoryUnavailable(e.to_string()))?;
        Ok(super::types::parse_history(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ChatError::HistoryUnavailable("not available on server".to_owned()))
    }
}

/// Mint a new session via `POST /api/chat/start`, returning the session id.
///
/// Must be called at most once per new session; the bootstrap state machine
/// guards re-invocation.
///
/// # Errors
///
/// [`ChatError::SessionCreationFailed`] on any network or server failure.
pub async fn start_session(display_name: &str) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let req = super::types::StartChatRequest { chat_user: display_name.to_owned() };
        let resp = gloo_net::http::Request::post("/api/chat/start")
            .json(&req)
            .map_err(|e| ChatError::SessionCreationFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::SessionCreationFailed(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::SessionCreationFailed(format!("status {}", resp.status())));
        }
        let body: super::types::StartChatResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::SessionCreationFailed(e.to_string()))?;
        Ok(body.session_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = display_name;
        Err(ChatError::SessionCreationFailed("not available on server".to_owned()))
    }
}

/// Fire-and-forget liveness probe of `GET /api/auth/healthcheck`.
///
/// Purely informational: the outcome is logged and otherwise ignored, and
/// the widget never blocks on it.
pub async fn healthcheck() {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get("/api/auth/healthcheck").send().await {
            Ok(resp) if resp.ok() => leptos::logging::log!("chat backend ready"),
            Ok(resp) => leptos::logging::warn!("healthcheck failed: status {}", resp.status()),
            Err(e) => leptos::logging::warn!("healthcheck failed: {e}"),
        }
    }
}
