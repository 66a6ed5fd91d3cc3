//! Edit-mode state machine.
//!
//! DESIGN
//! ======
//! Three states: read-only (no identified user; unreachable otherwise),
//! edit-off, and edit-on. A persisted boolean selects between off/on while a
//! user is present. Leaving edit-on with pending changes goes through a
//! confirmation gate; the gate decision is passed in as a plain bool so the
//! rule stays testable away from the browser.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// Current overlay mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    /// No identified user; the overlay renders content untouched.
    #[default]
    ReadOnly,
    /// User present, editing chrome visible, regions inactive.
    Off,
    /// User present and actively editing.
    On,
}

impl EditMode {
    /// Resolve the mode from user presence and the persisted enabled flag.
    /// Read-only wins whenever no user is present, regardless of the flag.
    #[must_use]
    pub fn resolve(user_present: bool, enabled: bool) -> Self {
        if !user_present {
            Self::ReadOnly
        } else if enabled {
            Self::On
        } else {
            Self::Off
        }
    }

    /// Whether editable regions should show their overlays.
    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Whether the editing chrome is hidden entirely.
    #[must_use]
    pub fn is_read_only(self) -> bool {
        self == Self::ReadOnly
    }
}

/// Whether a toggle out of edit-on may proceed. Pending edits require the
/// confirmation gate; declining keeps the mode (and the edits) unchanged.
#[must_use]
pub fn exit_allowed(touched: bool, confirmed: bool) -> bool {
    !touched || confirmed
}
