//! Host-application integration surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay never talks to a backend directly; everything outward goes
//! through the hooks here, supplied by the hosting app when it mounts the
//! provider. Hooks are cheap-to-clone handles around boxed async closures.
//!
//! ERROR HANDLING
//! ==============
//! Hooks yield `Result<_, String>` so failures degrade to a logged warning
//! and a toast instead of crashing hydration.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use leptos::prelude::Callback;

use crate::content::page_data::PageData;
use crate::content::types::{AssetDescriptor, AssetHit, PageRef};

/// Outcome of a host hook call.
pub type HostResult<T> = Result<T, String>;

type AsyncHook<In, Out> = Arc<dyn Fn(In) -> LocalBoxFuture<'static, Out> + Send + Sync>;

/// A file picked for upload. Only the name survives off-browser targets.
#[derive(Clone)]
pub struct FileHandle {
    /// File name as reported by the picker.
    pub name: String,
    /// Browser file handle.
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// Hook that publishes the full page-data snapshot.
#[derive(Clone)]
pub struct PublishHook(AsyncHook<PageData, HostResult<()>>);

impl PublishHook {
    /// Wrap an async publish function.
    pub fn new<F, Fut>(publish: F) -> Self
    where
        F: Fn(PageData) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HostResult<()>> + 'static,
    {
        Self(Arc::new(move |data| publish(data).boxed_local()))
    }

    /// Publish a snapshot.
    pub async fn run(&self, data: PageData) -> HostResult<()> {
        (self.0)(data).await
    }
}

/// Hook that searches the host's pages by free text.
#[derive(Clone)]
pub struct PageSearchHook(AsyncHook<String, HostResult<Vec<PageRef>>>);

impl PageSearchHook {
    /// Wrap an async page-search function.
    pub fn new<F, Fut>(search: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HostResult<Vec<PageRef>>> + 'static,
    {
        Self(Arc::new(move |query| search(query).boxed_local()))
    }

    /// Run a search.
    pub async fn run(&self, query: String) -> HostResult<Vec<PageRef>> {
        (self.0)(query).await
    }
}

/// The host's asset library: list always, upload when supported.
#[derive(Clone)]
pub struct AssetSource {
    list: Arc<dyn Fn() -> LocalBoxFuture<'static, HostResult<Vec<AssetDescriptor>>> + Send + Sync>,
    upload: Option<AsyncHook<FileHandle, HostResult<AssetDescriptor>>>,
}

impl AssetSource {
    /// Build a list-only source. The picker offers no upload tab for these.
    pub fn new<F, Fut>(list: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HostResult<Vec<AssetDescriptor>>> + 'static,
    {
        Self {
            list: Arc::new(move || list().boxed_local()),
            upload: None,
        }
    }

    /// Add upload support.
    #[must_use]
    pub fn with_upload<F, Fut>(mut self, upload: F) -> Self
    where
        F: Fn(FileHandle) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HostResult<AssetDescriptor>> + 'static,
    {
        self.upload = Some(Arc::new(move |file| upload(file).boxed_local()));
        self
    }

    /// Whether the picker should offer the upload tab.
    #[must_use]
    pub fn supports_upload(&self) -> bool {
        self.upload.is_some()
    }

    /// List the library's assets.
    pub async fn list_assets(&self) -> HostResult<Vec<AssetDescriptor>> {
        (self.list)().await
    }

    /// Upload a file, when supported.
    pub async fn upload(&self, file: FileHandle) -> HostResult<AssetDescriptor> {
        match &self.upload {
            Some(upload) => upload(file).await,
            None => Err("uploads are not supported by this asset source".to_owned()),
        }
    }
}

/// Selectable stock-media providers for the asset search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockSource {
    /// Photo search.
    Unsplash,
    /// Vector/icon search. Images only.
    SvgRepo,
    /// Photo and video search.
    Pexels,
}

impl StockSource {
    /// Wire name sent to the search hook.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unsplash => "unsplash",
            Self::SvgRepo => "svgrepo",
            Self::Pexels => "pexels",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsplash => "Unsplash",
            Self::SvgRepo => "Svgrepo",
            Self::Pexels => "Pexels",
        }
    }

    /// Sources applicable to the field being edited. Video fields only get
    /// providers that serve video.
    #[must_use]
    pub fn options_for(video: bool) -> &'static [Self] {
        if video {
            &[Self::Pexels]
        } else {
            &[Self::Unsplash, Self::SvgRepo, Self::Pexels]
        }
    }

    /// Parse a wire name back into a source.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "unsplash" => Some(Self::Unsplash),
            "svgrepo" => Some(Self::SvgRepo),
            "pexels" => Some(Self::Pexels),
            _ => None,
        }
    }
}

/// One asset search request.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AssetQuery {
    /// Free-text query.
    #[serde(rename = "search")]
    pub text: String,
    /// Stock provider to search.
    #[serde(serialize_with = "serialize_source")]
    pub source: StockSource,
    /// Whether the field being edited is a video field.
    #[serde(rename = "isVideo")]
    pub video: bool,
}

fn serialize_source<S: serde::Serializer>(
    source: &StockSource,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(source.as_str())
}

/// Hook that searches stock media.
#[derive(Clone)]
pub struct AssetSearchHook(AsyncHook<AssetQuery, HostResult<Vec<AssetHit>>>);

impl AssetSearchHook {
    /// Wrap an async search function.
    pub fn new<F, Fut>(search: F) -> Self
    where
        F: Fn(AssetQuery) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HostResult<Vec<AssetHit>>> + 'static,
    {
        Self(Arc::new(move |query| search(query).boxed_local()))
    }

    /// Search hook that POSTs the query as JSON to a host endpoint and
    /// expects a JSON list of grid tiles back. Resolves empty off-browser.
    #[must_use]
    pub fn endpoint(url: impl Into<String>) -> Self {
        let url = url.into();
        Self::new(move |query: AssetQuery| {
            let url = url.clone();
            async move {
                #[cfg(feature = "hydrate")]
                {
                    let response = gloo_net::http::Request::post(&url)
                        .json(&query)
                        .map_err(|e| e.to_string())?
                        .send()
                        .await
                        .map_err(|e| e.to_string())?;
                    if !response.ok() {
                        return Err(format!("asset search failed: {}", response.status()));
                    }
                    response
                        .json::<Vec<AssetHit>>()
                        .await
                        .map_err(|e| e.to_string())
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (url, query);
                    Ok(Vec::new())
                }
            }
        })
    }

    /// Run a search.
    pub async fn run(&self, query: AssetQuery) -> HostResult<Vec<AssetHit>> {
        (self.0)(query).await
    }
}

/// Everything the host wires into the provider, bundled for context.
#[derive(Clone)]
pub struct HostHooks {
    /// Publishes the page-data snapshot.
    pub publish: PublishHook,
    /// Asset library, if the host has one.
    pub asset_source: Option<AssetSource>,
    /// Stock-media search, if the host exposes one.
    pub asset_search: Option<AssetSearchHook>,
    /// Statically known pages for the URL picker dropdown.
    pub pages: Vec<PageRef>,
    /// Live page search for the URL picker.
    pub page_search: Option<PageSearchHook>,
    /// Starts the host's sign-in flow.
    pub on_sign_in: Callback<()>,
    /// Signs the current user out.
    pub on_sign_out: Callback<()>,
}
