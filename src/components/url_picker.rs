//! URL field widget: free text plus a dropdown of page suggestions.
//!
//! Static pages from the host render immediately; typing also fires the
//! page-search hook after a 500ms debounce. Searches are fire-and-forget
//! with a generation counter so only the newest result lands
//! (last-write-wins, no cancellation of in-flight requests).

#[cfg(test)]
#[path = "url_picker_test.rs"]
mod url_picker_test;

use leptos::prelude::*;

use crate::content::types::PageRef;
use crate::host::HostHooks;

use super::checkbox::Checkbox;

#[cfg(feature = "hydrate")]
const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Static pages first, then fetched hits, deduplicated by path.
#[must_use]
pub fn merge_suggestions(pages: &[PageRef], fetched: &[PageRef]) -> Vec<PageRef> {
    let mut merged: Vec<PageRef> = Vec::with_capacity(pages.len() + fetched.len());
    for candidate in pages.iter().chain(fetched) {
        if !merged.iter().any(|seen| seen.path == candidate.path) {
            merged.push(candidate.clone());
        }
    }
    merged
}

/// URL picker with page suggestions and an open-in-new-tab flag.
#[component]
pub fn UrlPicker(
    label: String,
    value: String,
    new_tab: bool,
    on_set_url: Callback<String>,
    on_new_tab: Callback<bool>,
) -> impl IntoView {
    let hooks = expect_context::<HostHooks>();

    let search = RwSignal::new(value);
    let show_dropdown = RwSignal::new(false);
    let fetched = RwSignal::new(Vec::<PageRef>::new());
    let generation = RwSignal::new(0u64);
    let open_in_new_tab = RwSignal::new(new_tab);

    let static_pages = hooks.pages.clone();
    let suggestions = move || merge_suggestions(&static_pages, &fetched.get());

    let run_search = {
        #[cfg(feature = "hydrate")]
        let page_search = hooks.page_search.clone();
        move |term: String| {
            let this_generation = generation.get_untracked() + 1;
            generation.set(this_generation);
            #[cfg(feature = "hydrate")]
            {
                let Some(page_search) = page_search.clone() else {
                    return;
                };
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        SEARCH_DEBOUNCE_MS,
                    ))
                    .await;
                    if generation.get_untracked() != this_generation {
                        return;
                    }
                    match page_search.run(term).await {
                        Ok(hits) => fetched.set(hits),
                        Err(err) => log::warn!("page search failed: {err}"),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = term;
            }
        }
    };

    let on_input = move |ev| {
        let term = event_target_value(&ev);
        search.set(term.clone());
        show_dropdown.set(true);
        if !term.is_empty() {
            run_search(term);
        }
    };

    let choose = move |url: String| {
        show_dropdown.set(false);
        search.set(url.clone());
        on_set_url.run(url);
    };

    let on_toggle_new_tab = Callback::new(move |checked: bool| {
        open_in_new_tab.set(checked);
        on_new_tab.run(checked);
    });

    let new_tab_label = "Open in new tab".to_owned();

    view! {
        <div class="inlay-urlpicker">
            <input
                class="inlay-urlpicker__input"
                type="text"
                placeholder=label
                prop:value=move || search.get()
                on:input=on_input
                on:focus=move |_| show_dropdown.set(true)
            />
            <Show when=move || show_dropdown.get()>
                <ul class="inlay-urlpicker__dropdown">
                    {
                        let suggestions = suggestions.clone();
                        move || {
                        suggestions()
                            .into_iter()
                            .map(|page| {
                                let path = page.path.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="inlay-urlpicker__option"
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                choose(path.clone());
                                            }
                                        >
                                            {page.title.clone()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || !search.get().is_empty()>
                        <li>
                            <button
                                type="button"
                                class="inlay-urlpicker__option inlay-urlpicker__option--verbatim"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    choose(search.get_untracked());
                                }
                            >
                                {move || format!("Use {}", search.get())}
                            </button>
                        </li>
                    </Show>
                </ul>
            </Show>
            <Checkbox
                label=new_tab_label
                checked=open_in_new_tab
                on_change=on_toggle_new_tab
            />
        </div>
    }
}
