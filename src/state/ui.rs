//! Overlay chrome state: preview size, hover highlight, hidden regions.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

/// Fixed preview width for the responsive preview frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    /// No frame; content renders at its natural width.
    #[default]
    #[serde(rename = "default")]
    Full,
    /// 640px phone preview.
    Phone,
    /// 1280px tablet preview.
    Tablet,
    /// 1536px desktop preview.
    Desktop,
}

impl ScreenSize {
    /// Frame width in pixels, or `None` for the unframed default.
    #[must_use]
    pub fn frame_width_px(self) -> Option<u32> {
        match self {
            Self::Full => None,
            Self::Phone => Some(640),
            Self::Tablet => Some(1280),
            Self::Desktop => Some(1536),
        }
    }

    /// Label for the size switcher.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Default",
            Self::Phone => "Phone",
            Self::Tablet => "Tablet",
            Self::Desktop => "Desktop",
        }
    }

    /// All sizes in switcher order.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Full, Self::Phone, Self::Tablet, Self::Desktop]
    }
}

/// Transient overlay chrome state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Selected preview size. Persisted.
    pub screen_size: ScreenSize,
    /// Region the pointer is over, for overlay highlighting.
    pub hovered_id: Option<String>,
    /// Regions the editor has hidden from the overlay. Persisted.
    pub hidden_ids: Vec<String>,
    /// Whether the SEO form modal is open.
    pub seo_form_open: bool,
    /// True while a publish call is in flight; disables the publish control.
    pub publishing: bool,
}

impl UiState {
    /// Whether a region is on the hidden list.
    #[must_use]
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden_ids.iter().any(|hidden| hidden == id)
    }

    /// Add a region to the hidden list.
    pub fn hide(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.is_hidden(&id) {
            self.hidden_ids.push(id);
        }
    }

    /// Remove a region from the hidden list.
    pub fn unhide(&mut self, id: &str) {
        self.hidden_ids.retain(|hidden| hidden != id);
    }

    /// Empty the hidden list.
    pub fn clear_hidden(&mut self) {
        self.hidden_ids.clear();
    }
}
