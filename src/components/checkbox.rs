//! Labeled checkbox used by boolean fields and the URL picker.

use leptos::prelude::*;

/// Checkbox with a clickable label.
#[component]
pub fn Checkbox(
    label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="inlay-checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
