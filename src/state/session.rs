//! The editing session: which region path the edit form is open for.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::content::types::Field;

/// Identity of the entry currently open in the edit form. `id == None`
/// means no form is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditingSession {
    /// Dotted path of the entry being edited, including the `.-1` append
    /// sentinel for new repeatable items.
    pub id: Option<String>,
    /// Field descriptors driving the form widgets.
    pub fields: Vec<Field>,
}

impl EditingSession {
    /// Open the form for an entry.
    #[must_use]
    pub fn open(id: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: Some(id.into()),
            fields,
        }
    }

    /// Close the form.
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    /// Whether the form is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    /// The open entry's path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
