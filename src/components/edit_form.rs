//! Edit form for the active editing session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the side modal while a session is open. The form drafts a
//! field record locally; save commits the record at the session path (append
//! for the `.-1` sentinel) and closes. Existing repeatable items also get
//! delete (behind the confirmation gate) and reorder controls.

#[cfg(test)]
#[path = "edit_form_test.rs"]
mod edit_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use serde_json::{Map, Value};

use crate::content::path::{EntryPath, ItemMove};
use crate::content::page_data::PageStore;
use crate::content::types::{Field, FieldType};
use crate::state::session::EditingSession;
use crate::state::toasts::ToastStack;
use crate::util::{confirm, labels};

use super::asset_picker::AssetPicker;
use super::checkbox::Checkbox;
use super::rich_text::RichText;
use super::url_picker::UrlPicker;

/// Display string for a drafted field value.
fn string_field(record: &Map<String, Value>, id: &str) -> String {
    match record.get(id) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

/// Drafted boolean field value.
fn bool_field(record: &Map<String, Value>, id: &str) -> bool {
    record.get(id).and_then(Value::as_bool).unwrap_or(false)
}

/// Parse numeric input, falling back to the raw string so typing is never
/// lost mid-edit.
fn parse_number_value(text: &str) -> Value {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(text.to_owned())
}

/// Companion key holding a URL field's open-in-new-tab choice.
fn target_key(id: &str) -> String {
    format!("{id}_target")
}

/// Whether the drafted URL field opens in a new tab.
fn new_tab_flag(record: &Map<String, Value>, id: &str) -> bool {
    record.get(&target_key(id)).and_then(Value::as_str) == Some("_blank")
}

/// Stored value for the open-in-new-tab choice.
fn target_value(new_tab: bool) -> Value {
    Value::String(if new_tab { "_blank" } else { "_self" }.to_owned())
}

/// Edit form over the open session. Must only render while a session is open.
#[component]
pub fn EditForm(on_close: Callback<()>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageStore>>();
    let session = expect_context::<RwSignal<EditingSession>>();
    let toasts = expect_context::<RwSignal<ToastStack>>();

    let path = session.with_untracked(|open| open.path().unwrap_or_default().to_owned());
    let fields = session.with_untracked(|open| open.fields.clone());
    if path.is_empty() {
        log::warn!("edit form rendered without an open session");
        return ().into_any();
    }

    let heading = labels::form_heading(&path);
    let is_existing_item = EntryPath::parse(&path).index().is_some();

    let draft = RwSignal::new(page.with_untracked(|store| {
        store
            .data
            .get(&path)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }));

    let on_save = {
        let path = path.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let record = Value::Object(draft.get_untracked());
            let mut write_err = None;
            page.update(|store| write_err = store.data.write(&path, record).err());
            if let Some(err) = write_err {
                log::warn!("could not save `{path}`: {err}");
                toasts.update(|stack| {
                    stack.error("Could not save changes");
                });
                return;
            }
            on_close.run(());
        }
    };

    let on_delete = {
        let path = path.clone();
        move |_| {
            if !confirm::ask("Are you sure you want to delete this item?") {
                return;
            }
            let mut remove_err = None;
            page.update(|store| remove_err = store.data.remove_item(&path).err());
            if let Some(err) = remove_err {
                log::warn!("could not delete `{path}`: {err}");
            }
            on_close.run(());
        }
    };

    let apply_move = {
        let path = path.clone();
        move |movement: ItemMove| {
            let mut shift_err = None;
            page.update(|store| shift_err = store.data.shift_item(&path, movement).err());
            if let Some(err) = shift_err {
                log::warn!("could not reorder `{path}`: {err}");
            }
            on_close.run(());
        }
    };

    let widgets = fields
        .into_iter()
        .map(|field| field_widget(field, draft))
        .collect_view();

    let move_buttons: [(&str, ItemMove); 4] = [
        ("First", ItemMove::ToStart),
        ("Up", ItemMove::Up),
        ("Down", ItemMove::Down),
        ("Last", ItemMove::ToEnd),
    ];

    view! {
        <div class="inlay-editform">
            <div class="inlay-editform__header">
                <h1>{heading}</h1>
                <button
                    type="button"
                    class="inlay-editform__close"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
                <Show when=move || is_existing_item>
                    <button
                        type="button"
                        class="inlay-editform__delete"
                        on:click=on_delete.clone()
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
            <form class="inlay-editform__body" on:submit=on_save>
                {widgets}
                <div class="inlay-editform__footer">
                    <Show when=move || is_existing_item>
                        <div class="inlay-editform__reorder">
                            {move_buttons
                                .iter()
                                .map(|&(label, movement)| {
                                    let apply_move = apply_move.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="inlay-editform__move"
                                            on:click=move |_| apply_move(movement)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                    <button type="submit" class="inlay-editform__save">
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
    .into_any()
}

/// Widget for one field, chosen by its declared type.
fn field_widget(field: Field, draft: RwSignal<Map<String, Value>>) -> AnyView {
    let Field { id, kind, label } = field;
    match kind {
        FieldType::Image | FieldType::Video => {
            let is_video = kind == FieldType::Video;
            let initial = draft.with_untracked(|record| string_field(record, &id));
            let on_selected = Callback::new(move |url: String| {
                draft.update(|record| {
                    record.insert(id.clone(), Value::String(url));
                });
            });
            view! {
                <div class="inlay-editform__field">
                    <label>{label}</label>
                    <AssetPicker video=is_video value=initial on_selected=on_selected />
                </div>
            }
            .into_any()
        }
        FieldType::Boolean => {
            let checked = {
                let id = id.clone();
                Signal::derive(move || draft.with(|record| bool_field(record, &id)))
            };
            let on_change = Callback::new(move |flag: bool| {
                draft.update(|record| {
                    record.insert(id.clone(), Value::Bool(flag));
                });
            });
            view! {
                <div class="inlay-editform__field">
                    <Checkbox label=label checked=checked on_change=on_change />
                </div>
            }
            .into_any()
        }
        FieldType::Url => {
            let initial = draft.with_untracked(|record| string_field(record, &id));
            let initial_new_tab = draft.with_untracked(|record| new_tab_flag(record, &id));
            let on_set_url = {
                let id = id.clone();
                Callback::new(move |url: String| {
                    draft.update(|record| {
                        record.insert(id.clone(), Value::String(url));
                    });
                })
            };
            let on_new_tab = Callback::new(move |new_tab: bool| {
                draft.update(|record| {
                    record.insert(target_key(&id), target_value(new_tab));
                });
            });
            view! {
                <div class="inlay-editform__field">
                    <UrlPicker
                        label=label
                        value=initial
                        new_tab=initial_new_tab
                        on_set_url=on_set_url
                        on_new_tab=on_new_tab
                    />
                </div>
            }
            .into_any()
        }
        FieldType::RichText => {
            let initial = draft.with_untracked(|record| string_field(record, &id));
            let on_change = Callback::new(move |markdown: String| {
                draft.update(|record| {
                    record.insert(id.clone(), Value::String(markdown));
                });
            });
            view! {
                <div class="inlay-editform__field">
                    <label>{label}</label>
                    <RichText value=initial on_change=on_change />
                </div>
            }
            .into_any()
        }
        FieldType::Number => {
            let value = {
                let id = id.clone();
                move || draft.with(|record| string_field(record, &id))
            };
            view! {
                <div class="inlay-editform__field">
                    <label>{label.clone()}</label>
                    <input
                        type="number"
                        placeholder=label.clone()
                        prop:value=value
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            draft.update(|record| {
                                record.insert(id.clone(), parse_number_value(&text));
                            });
                        }
                    />
                </div>
            }
            .into_any()
        }
        FieldType::Text => {
            let value = {
                let id = id.clone();
                move || draft.with(|record| string_field(record, &id))
            };
            view! {
                <div class="inlay-editform__field">
                    <label>{label.clone()}</label>
                    <input
                        type="text"
                        placeholder=label.clone()
                        prop:value=value
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            draft.update(|record| {
                                record.insert(id.clone(), Value::String(text));
                            });
                        }
                    />
                </div>
            }
            .into_any()
        }
    }
}
