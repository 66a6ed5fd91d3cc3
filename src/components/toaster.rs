//! Transient notification rendering.

use leptos::prelude::*;

use crate::state::toasts::{ToastLevel, ToastStack};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_SECS: u64 = 4;

/// Renders the toast stack and expires entries after a few seconds.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastStack>>();

    // Schedule auto-dismiss once per toast id.
    #[cfg(feature = "hydrate")]
    {
        let scheduled = std::rc::Rc::new(std::cell::RefCell::new(
            std::collections::HashSet::<uuid::Uuid>::new(),
        ));
        Effect::new(move || {
            for toast in toasts.get().toasts {
                if scheduled.borrow_mut().insert(toast.id) {
                    let id = toast.id;
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(
                            TOAST_LIFETIME_SECS,
                        ))
                        .await;
                        toasts.update(|stack| stack.dismiss(id));
                    });
                }
            }
        });
    }

    view! {
        <div class="inlay-toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "inlay-toast inlay-toast--success",
                            ToastLevel::Error => "inlay-toast inlay-toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| {
                                toasts.update(|stack| stack.dismiss(id));
                            }>
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
