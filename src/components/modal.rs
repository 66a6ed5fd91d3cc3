//! Side-panel modal hosting the edit and SEO forms.

use leptos::prelude::*;

/// Right-docked modal with a click-away backdrop and escape-to-close.
#[component]
pub fn Modal(on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="inlay-modal">
            <div class="inlay-modal__backdrop" on:click=on_backdrop></div>
            <div class="inlay-modal__panel" tabindex="0" on:keydown=on_keydown>
                {children()}
            </div>
        </div>
    }
}
