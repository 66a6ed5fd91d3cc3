//! Browser localStorage helpers for persisted overlay preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the provider
//! can persist the edit-mode flag, preview size, and hidden-region list
//! without repeating web-sys glue. Non-browser targets read nothing and
//! write nowhere, keeping server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage keys for persisted overlay preferences.
pub mod keys {
    /// Boolean edit-mode enabled flag.
    pub const EDIT_MODE: &str = "inlay_edit_mode";
    /// Selected preview screen size.
    pub const SCREEN_SIZE: &str = "inlay_screen_size";
    /// Hidden-region id list.
    pub const HIDDEN_IDS: &str = "inlay_hidden_ids";
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
