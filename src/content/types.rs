//! Field descriptors and host-facing content DTOs.
//!
//! DESIGN
//! ======
//! These types are the vocabulary shared with the hosting application: hosts
//! describe each editable region as a list of [`Field`]s, and receive/supply
//! assets and page links through the descriptor types below. Values
//! themselves stay schemaless (`serde_json::Value`); the field type is a
//! widget hint, not a validator.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Widget and logical-type hint for one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Image URL picked through the asset picker.
    Image,
    /// Video URL picked through the asset picker.
    Video,
    /// Numeric input.
    Number,
    /// Link target picked through the URL picker.
    Url,
    /// Checkbox.
    Boolean,
    /// Markdown editing surface.
    RichText,
}

impl FieldType {
    /// Whether this field is edited through the asset picker.
    #[must_use]
    pub fn is_media(self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }
}

/// Descriptor for one field inside an editable region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Key the value is stored under inside the region's record.
    pub id: String,
    /// Widget hint.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Human-readable label shown in the edit form.
    pub label: String,
}

impl Field {
    /// Build a field descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
        }
    }
}

/// An asset known to the host's asset source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Host-side identifier.
    pub id: String,
    /// Full-size URL committed into page data on selection.
    pub url: String,
    /// Display name, if the source tracks one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Thumbnail URL; falls back to `url` in grids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
}

impl AssetDescriptor {
    /// Grid entry for this asset.
    #[must_use]
    pub fn hit(&self) -> AssetHit {
        AssetHit {
            thumb: self.thumb_url.clone().unwrap_or_else(|| self.url.clone()),
            full: self.url.clone(),
        }
    }
}

/// One selectable tile in the asset grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHit {
    /// Thumbnail URL shown in the grid.
    pub thumb: String,
    /// Full-size URL committed on selection.
    pub full: String,
}

/// A page the URL picker can link to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Path committed into the field value.
    pub path: String,
    /// Title shown in the dropdown.
    pub title: String,
}

/// The identified user editing the page. Absence means read-only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmsUser {
    /// Email shown by hosts; optional because some identity providers
    /// only hand back an opaque id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
