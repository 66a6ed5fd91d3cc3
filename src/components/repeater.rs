//! Repeatable editable region backed by a list value.
//!
//! Renders one [`Editable`] per element addressed `id.N`, plus an append
//! affordance that opens an editing session at the `id.-1` sentinel. A
//! non-list value under the repeater id is a caller error: the repeater
//! renders nothing and logs a warning.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use serde_json::Value;

use crate::content::page_data::PageStore;
use crate::content::types::Field;
use crate::state::mode::EditMode;
use crate::state::session::EditingSession;

use super::editable::{Editable, RegionRender};

/// Render closure from one list item and its index.
#[derive(Clone)]
pub struct RepeatRender(std::sync::Arc<dyn Fn(Value, usize) -> AnyView + Send + Sync>);

impl RepeatRender {
    /// Render one item.
    #[must_use]
    pub fn call(&self, value: Value, index: usize) -> AnyView {
        (self.0)(value, index)
    }
}

impl<F, V> From<F> for RepeatRender
where
    F: Fn(Value, usize) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    fn from(render: F) -> Self {
        Self(std::sync::Arc::new(move |value, index| {
            render(value, index).into_any()
        }))
    }
}

/// List items under a repeater id, or `None` for a non-list value.
fn list_items(store: &PageStore, id: &str) -> Option<Vec<Value>> {
    match store.data.get(id) {
        None => Some(Vec::new()),
        Some(Value::Array(items)) => Some(items.clone()),
        Some(_) => None,
    }
}

/// Repeatable region with add/remove/reorder support via the edit form.
#[component]
pub fn Repeater(
    /// Page-data key holding the list.
    #[prop(into)]
    id: String,
    /// Fields offered for each item.
    fields: Vec<Field>,
    /// Keep the items read-only even in edit mode.
    #[prop(optional)]
    locked: bool,
    /// Renders one item from its value and index.
    #[prop(into)]
    render: RepeatRender,
) -> impl IntoView {
    let page = expect_context::<RwSignal<PageStore>>();
    let session = expect_context::<RwSignal<EditingSession>>();
    let mode = expect_context::<Signal<EditMode>>();

    let items = {
        let id = id.clone();
        move || {
            page.with(|store| {
                let items = list_items(store, &id);
                if items.is_none() {
                    log::warn!("repeater `{id}` expects a list value");
                }
                items.unwrap_or_default()
            })
        }
    };

    let open_append = {
        let id = id.clone();
        let fields = fields.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            session.set(EditingSession::open(format!("{id}.-1"), fields.clone()));
        }
    };

    let plain = {
        let render = render.clone();
        let items = items.clone();
        move || {
            items()
                .into_iter()
                .enumerate()
                .map(|(index, item)| render.call(item, index))
                .collect_view()
        }
    };

    let editing_items = {
        let id = id.clone();
        let fields = fields.clone();
        let render = render.clone();
        let items = items.clone();
        move || {
            (0..items().len())
                .map(|index| {
                    let item_render = {
                        let render = render.clone();
                        RegionRender::from(move |value: Value| render.call(value, index))
                    };
                    let item_id = format!("{id}.{index}");
                    view! {
                        <Editable
                            id=item_id
                            fields=fields.clone()
                            locked=locked
                            render=item_render
                        />
                    }
                })
                .collect_view()
        }
    };

    let ghost = {
        let render = render.clone();
        let items = items.clone();
        move || {
            let list = items();
            list.len().checked_sub(1).map(|last| {
                view! {
                    <div class="inlay-repeater__ghost">
                        {render.call(list[last].clone(), last)}
                    </div>
                }
            })
        }
    };

    view! {
        <Show when=move || mode.get().is_on() && !locked fallback=plain.clone()>
            {editing_items.clone()}
            <div class="inlay-repeater__append" on:click=open_append.clone()>
                {ghost.clone()}
                <button type="button" class="inlay-repeater__add">
                    "Add an item"
                </button>
            </div>
        </Show>
    }
}
