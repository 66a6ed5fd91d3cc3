//! Image/video field widget and the asset picker modal behind it.

#[cfg(test)]
#[path = "asset_picker_test.rs"]
mod asset_picker_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::types::AssetHit;
use crate::host::{AssetQuery, HostHooks, StockSource};

use super::uploader::Uploader;

/// Tabs offered inside the picker modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerTab {
    /// Host asset library plus stock search.
    Library,
    /// File upload. Only offered when the asset source supports uploads.
    Upload,
}

impl PickerTab {
    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::Upload => "Upload",
        }
    }
}

/// Which tabs the modal offers for the configured asset source.
#[must_use]
pub fn available_tabs(supports_upload: bool) -> Vec<PickerTab> {
    if supports_upload {
        vec![PickerTab::Library, PickerTab::Upload]
    } else {
        vec![PickerTab::Library]
    }
}

/// Field widget: current media tile plus a browse button opening the modal.
#[component]
pub fn AssetPicker(video: bool, value: String, on_selected: Callback<String>) -> impl IntoView {
    let show_modal = RwSignal::new(false);
    let current = RwSignal::new(value);

    let on_picked = Callback::new(move |url: String| {
        current.set(url.clone());
        on_selected.run(url);
    });
    let close_modal = Callback::new(move |()| show_modal.set(false));

    view! {
        <div class="inlay-assetpicker">
            <div class="inlay-assetpicker__tile">
                <Show when=move || !current.get().is_empty()>
                    {move || {
                        let url = current.get();
                        if video {
                            view! {
                                <video
                                    class="inlay-assetpicker__media"
                                    src=url
                                    autoplay=true
                                    muted=true
                                ></video>
                            }
                                .into_any()
                        } else {
                            view! {
                                <img class="inlay-assetpicker__media" src=url alt="Selected" />
                            }
                                .into_any()
                        }
                    }}
                </Show>
                <button
                    type="button"
                    class="inlay-assetpicker__browse"
                    on:click=move |_| show_modal.set(true)
                >
                    "Browse"
                </button>
            </div>
            <Show when=move || show_modal.get()>
                <PickerModal video=video on_selected=on_picked on_close=close_modal />
            </Show>
        </div>
    }
}

/// Asset selection modal: library grid, stock search, optional upload tab.
#[component]
fn PickerModal(
    video: bool,
    on_selected: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let hooks = expect_context::<HostHooks>();

    let hits = RwSignal::new(Vec::<AssetHit>::new());
    let tab = RwSignal::new(PickerTab::Library);
    let query = RwSignal::new(String::new());
    let source = RwSignal::new(if video {
        StockSource::Pexels
    } else {
        StockSource::Unsplash
    });

    let supports_upload = hooks
        .asset_source
        .as_ref()
        .is_some_and(crate::host::AssetSource::supports_upload);
    let tabs = available_tabs(supports_upload);

    // Seed the grid from the host's library.
    #[cfg(feature = "hydrate")]
    {
        if let Some(asset_source) = hooks.asset_source.clone() {
            leptos::task::spawn_local(async move {
                match asset_source.list_assets().await {
                    Ok(assets) => {
                        hits.set(assets.iter().map(crate::content::types::AssetDescriptor::hit).collect());
                    }
                    Err(err) => log::warn!("asset listing failed: {err}"),
                }
            });
        }
    }

    let run_search = {
        let asset_search = hooks.asset_search.clone();
        move || {
            let _ = &asset_search;
            let text = query.get_untracked();
            if text.is_empty() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let Some(asset_search) = asset_search.clone() else {
                    return;
                };
                let request = AssetQuery {
                    text,
                    source: source.get_untracked(),
                    video,
                };
                leptos::task::spawn_local(async move {
                    match asset_search.run(request).await {
                        Ok(found) => hits.set(found),
                        Err(err) => log::warn!("asset search failed: {err}"),
                    }
                });
            }
        }
    };

    let on_query_keydown = {
        let run_search = run_search.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                run_search();
            }
        }
    };

    let on_source_change = {
        let run_search = run_search.clone();
        move |ev| {
            if let Some(parsed) = StockSource::parse(&event_target_value(&ev)) {
                source.set(parsed);
                run_search();
            }
        }
    };

    let on_uploaded = Callback::new(move |asset: crate::content::types::AssetDescriptor| {
        hits.update(|items| items.push(asset.hit()));
    });

    view! {
        <div class="inlay-assetmodal">
            <div class="inlay-assetmodal__backdrop" on:click=move |_| on_close.run(())></div>
            <div class="inlay-assetmodal__panel">
                <div class="inlay-assetmodal__header">
                    <h2>{if video { "Select Video" } else { "Select Image" }}</h2>
                    <div class="inlay-assetmodal__tabs">
                        {tabs
                            .iter()
                            .map(|&entry| {
                                let class = move || {
                                    if tab.get() == entry {
                                        "inlay-assetmodal__tab inlay-assetmodal__tab--active"
                                    } else {
                                        "inlay-assetmodal__tab"
                                    }
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        on:click=move |_| tab.set(entry)
                                    >
                                        {entry.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        class="inlay-assetmodal__close"
                        on:click=move |_| on_close.run(())
                    >
                        "Close"
                    </button>
                </div>
                <Show
                    when=move || tab.get() == PickerTab::Library
                    fallback=move || view! { <Uploader on_uploaded=on_uploaded /> }
                >
                    <div class="inlay-assetmodal__search">
                        <input
                            type="text"
                            placeholder="Search stock media..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                            on:keydown=on_query_keydown.clone()
                        />
                        <select on:change=on_source_change.clone()>
                            {StockSource::options_for(video)
                                .iter()
                                .map(|&option| {
                                    view! {
                                        <option
                                            value=option.as_str()
                                            selected=move || source.get() == option
                                        >
                                            {option.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <button
                            type="button"
                            class="inlay-assetmodal__go"
                            on:click={
                                let run_search = run_search.clone();
                                move |_| run_search()
                            }
                        >
                            "Search"
                        </button>
                    </div>
                    <div class="inlay-assetmodal__grid">
                        {move || {
                            hits.get()
                                .into_iter()
                                .map(|hit| {
                                    let full = hit.full.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="inlay-assetmodal__cell"
                                            on:click=move |_| {
                                                on_selected.run(full.clone());
                                                on_close.run(());
                                            }
                                        >
                                            <img src=hit.thumb.clone() alt="Result" />
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
