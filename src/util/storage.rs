//! Durable chat session storage.
//!
//! Persists the (display name, session id) pair in `localStorage` under the
//! keys the backend has always used (`chatUser` / `sessionId`), so a session
//! survives page reloads. Missing keys are a normal outcome, not an error.
//! Requires a browser environment; server builds see an absent store.

use crate::state::session::StoredSession;

#[cfg(feature = "hydrate")]
const NAME_KEY: &str = "chatUser";
#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "sessionId";

/// Read the stored session. `None` when either key is missing.
pub fn load() -> Option<StoredSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let display_name = storage.get_item(NAME_KEY).ok().flatten()?;
        let session_id = storage.get_item(SESSION_KEY).ok().flatten()?;
        Some(StoredSession { display_name, session_id })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write both keys.
pub fn save(session: &StoredSession) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(NAME_KEY, &session.display_name);
            let _ = storage.set_item(SESSION_KEY, &session.session_id);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both keys. Used only by the explicit restart action.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(NAME_KEY);
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
