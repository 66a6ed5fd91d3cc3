//! Yes/no gate ahead of destructive actions.
//!
//! Browser targets ask through `window.confirm`; everywhere else the gate
//! declines, so destructive paths never proceed without a real answer.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Ask the user to confirm. Returns `false` when no browser is available.
#[must_use]
pub fn ask(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
