//! The page-data store: live edits next to the last published snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`PageStore`] lives in a provider-owned signal and is the single
//! source of truth for everything the overlay edits. "Touched" is a plain
//! deep-equality check between the live data and the baseline snapshot, so
//! discard and mode-exit are just clones of the baseline.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::path::{self, ItemMove, PathError};

/// Reserved page-data key for page-level SEO metadata.
pub const SEO_KEY: &str = "__seo";

/// Mapping from region ids to field-value records, plus the reserved
/// [`SEO_KEY`] entry. Repeatable regions store a list of records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageData {
    entries: Map<String, Value>,
}

impl PageData {
    /// Empty page data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing record map.
    #[must_use]
    pub fn from_entries(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Whether no region has a value yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve the value a dotted path addresses.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::resolve(&self.entries, path)
    }

    /// Write a record at a dotted path, creating the entry as needed.
    ///
    /// # Errors
    ///
    /// Propagates [`PathError`] from the path layer.
    pub fn write(&mut self, path: &str, record: Value) -> Result<(), PathError> {
        path::write(&mut self.entries, path, record)
    }

    /// Remove the repeatable item a dotted path addresses.
    ///
    /// # Errors
    ///
    /// Propagates [`PathError`] from the path layer.
    pub fn remove_item(&mut self, path: &str) -> Result<Value, PathError> {
        path::remove(&mut self.entries, path)
    }

    /// Reorder the repeatable item a dotted path addresses. Returns whether
    /// anything moved.
    ///
    /// # Errors
    ///
    /// Propagates [`PathError`] from the path layer.
    pub fn shift_item(&mut self, path: &str, movement: ItemMove) -> Result<bool, PathError> {
        path::shift(&mut self.entries, path, movement)
    }

    /// The page-level SEO record, if one has been saved.
    #[must_use]
    pub fn seo(&self) -> Option<&Map<String, Value>> {
        self.entries.get(SEO_KEY)?.as_object()
    }

    /// Replace the page-level SEO record.
    pub fn set_seo(&mut self, record: Map<String, Value>) {
        self.entries.insert(SEO_KEY.to_owned(), Value::Object(record));
    }
}

/// Live page data paired with the last published snapshot it was seeded from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageStore {
    /// Data the overlay currently edits.
    pub data: PageData,
    baseline: PageData,
}

impl PageStore {
    /// Replace both the live data and the baseline with a fresh snapshot.
    /// Called on mount and whenever the host hands over new initial data.
    pub fn seed(&mut self, snapshot: PageData) {
        self.baseline = snapshot.clone();
        self.data = snapshot;
    }

    /// Whether the live data differs from the baseline snapshot.
    #[must_use]
    pub fn touched(&self) -> bool {
        self.data != self.baseline
    }

    /// Throw away pending edits and restore the baseline.
    pub fn discard(&mut self) {
        self.data = self.baseline.clone();
    }

    /// Copy of the live data, as handed to the publish hook.
    #[must_use]
    pub fn snapshot(&self) -> PageData {
        self.data.clone()
    }
}
