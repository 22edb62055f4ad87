//! Session persistence in `localStorage`.
//!
//! A signed-in session survives reloads by being stored as JSON. The
//! stored token is only a hint: on startup it is checked against the
//! platform before the user counts as signed in. Server-side these are
//! no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use platform::Session;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "dashboard_session";

/// Decode a stored session; corrupt entries count as absent.
#[must_use]
pub fn decode(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[must_use]
pub fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(session).ok()
}

pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let (Some(raw), Some(Ok(Some(storage)))) = (encode(session), web_sys::window().map(|w| w.local_storage())) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
