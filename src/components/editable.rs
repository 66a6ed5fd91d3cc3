//! Editable region: the overlay affordance over one piece of page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts wrap each editable piece of their page in [`Editable`], passing the
//! region id, its field descriptors, and a render closure from the region's
//! current value. Outside edit-on mode the closure's output renders bare; in
//! edit-on mode it gains a hover-highlighted click target that opens the
//! editing session, plus hide/unhide toggles.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use serde_json::Value;

use crate::state::mode::EditMode;
use crate::state::session::EditingSession;
use crate::state::ui::UiState;
use crate::content::page_data::PageStore;
use crate::content::types::Field;

/// Render closure from a region's current value. Missing entries hand the
/// closure `Value::Null`, so a malformed or absent value renders whatever
/// the closure makes of nothing rather than breaking the page.
#[derive(Clone)]
pub struct RegionRender(std::sync::Arc<dyn Fn(Value) -> AnyView + Send + Sync>);

impl RegionRender {
    /// Render the region for a value.
    #[must_use]
    pub fn call(&self, value: Value) -> AnyView {
        (self.0)(value)
    }
}

impl<F, V> From<F> for RegionRender
where
    F: Fn(Value) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    fn from(render: F) -> Self {
        Self(std::sync::Arc::new(move |value| render(value).into_any()))
    }
}

/// One editable region.
#[component]
pub fn Editable(
    /// Page-data key backing this region.
    #[prop(into)]
    id: String,
    /// Fields offered in the edit form.
    fields: Vec<Field>,
    /// Keep the region read-only even in edit mode.
    #[prop(optional)]
    locked: bool,
    /// Renders the region from its current value.
    #[prop(into)]
    render: RegionRender,
) -> impl IntoView {
    let page = expect_context::<RwSignal<PageStore>>();
    let session = expect_context::<RwSignal<EditingSession>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let mode = expect_context::<Signal<EditMode>>();

    let hovered = RwSignal::new(false);

    let region_value = {
        let id = id.clone();
        move || {
            page.with(|store| store.data.get(&id).cloned().unwrap_or(Value::Null))
        }
    };

    let is_hidden = {
        let id = id.clone();
        move || ui.with(|state| state.is_hidden(&id))
    };

    let open_editor = {
        let id = id.clone();
        let fields = fields.clone();
        move |_| {
            session.set(EditingSession::open(id.clone(), fields.clone()));
        }
    };

    let hide_region = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            ui.update(|state| state.hide(id.clone()));
        }
    };

    let unhide_region = {
        let id = id.clone();
        move |_| {
            ui.update(|state| state.unhide(&id));
        }
    };

    let bare = {
        let render = render.clone();
        let region_value = region_value.clone();
        move || render.call(region_value())
    };

    view! {
        <Show when=move || mode.get().is_on() && !locked fallback=bare.clone()>
            <div
                class="inlay-region"
                on:mouseenter=move |_| hovered.set(true)
                on:mouseleave=move |_| hovered.set(false)
            >
                <div class="inlay-region__content">
                    {
                        let render = render.clone();
                        let region_value = region_value.clone();
                        move || render.call(region_value())
                    }
                </div>
                {
                    let open_editor = open_editor.clone();
                    let hide_region = hide_region.clone();
                    view! {
                        <Show
                            when={
                                let is_hidden = is_hidden.clone();
                                move || !is_hidden()
                            }
                            fallback={
                                let unhide_region = unhide_region.clone();
                                move || {
                                    view! {
                                        <button
                                            type="button"
                                            class="inlay-region__restore"
                                            on:click=unhide_region.clone()
                                        >
                                            "Show"
                                        </button>
                                    }
                                }
                            }
                        >
                            <button
                                type="button"
                                class=move || {
                                    if hovered.get() {
                                        "inlay-region__overlay inlay-region__overlay--visible"
                                    } else {
                                        "inlay-region__overlay"
                                    }
                                }
                                on:click=open_editor.clone()
                            >
                                <span class="inlay-region__edit-hint">"Edit"</span>
                                <span class="inlay-region__hide" on:click=hide_region.clone()>
                                    "Hide"
                                </span>
                            </button>
                        </Show>
                    }
                }
            </div>
        </Show>
    }
}
