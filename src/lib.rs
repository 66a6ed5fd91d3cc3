//! In-page visual content editing for Leptos applications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `inlay` is a library crate consumed by a hosting WASM app. The host wraps
//! its page in [`CmsProvider`], marks regions with [`Editable`] / [`Repeater`],
//! and supplies async hooks for publishing, asset access, and page search.
//! All shared state lives in Leptos context signals; nothing here talks to a
//! server except through host-provided hooks.
//!
//! Browser-only behavior (localStorage, DOM reads, timers, HTTP) is gated
//! behind the `hydrate` feature so the pure editing logic compiles and tests
//! on the native target.

pub mod components;
pub mod content;
pub mod host;
pub mod state;
pub mod util;

pub use components::asset_picker::AssetPicker;
pub use components::editable::{Editable, RegionRender};
pub use components::provider::CmsProvider;
pub use components::repeater::{RepeatRender, Repeater};
pub use components::rich_text::RichText;
pub use content::page_data::{PageData, PageStore, SEO_KEY};
pub use content::path::{EntryPath, ItemMove, PathError, Slot};
pub use content::types::{AssetDescriptor, AssetHit, CmsUser, Field, FieldType, PageRef};
pub use host::{
    AssetQuery, AssetSearchHook, AssetSource, FileHandle, HostHooks, HostResult, PageSearchHook,
    PublishHook, StockSource,
};
pub use state::mode::EditMode;

/// Install the browser logging and panic hooks.
///
/// Call once from the host's hydrate entry point, before mounting.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
