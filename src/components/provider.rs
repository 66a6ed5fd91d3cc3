//! The provider: owns shared state, renders the editing chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts wrap their page in [`CmsProvider`]. It seeds page data from the
//! caller-supplied initial snapshot (and reseeds when that snapshot
//! changes), provides every state signal and host hook via context, and
//! renders: the editing top bar, the page content (optionally inside the
//! fixed-width preview frame), the edit/SEO form modals, and the toaster.
//! With no identified user it renders the content untouched plus a floating
//! sign-in affordance.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::page_data::{PageData, PageStore};
use crate::content::types::{CmsUser, PageRef};
use crate::host::{AssetSearchHook, AssetSource, HostHooks, PageSearchHook, PublishHook};
use crate::state::mode::{self, EditMode};
use crate::state::session::EditingSession;
use crate::state::toasts::ToastStack;
use crate::state::ui::{ScreenSize, UiState};
use crate::util::{confirm, storage};

use super::edit_form::EditForm;
use super::modal::Modal;
use super::preview_frame::PreviewFrame;
use super::seo_form::SeoForm;
use super::toaster::Toaster;

/// In-page CMS provider. Everything editable must render inside it.
#[component]
pub fn CmsProvider(
    /// The identified user, or `None` for read-only rendering.
    #[prop(into)]
    user: Signal<Option<CmsUser>>,
    /// Last published page data. Reseeds the store whenever it changes.
    #[prop(into)]
    initial: Signal<PageData>,
    /// Publishes the full page-data snapshot.
    on_publish: PublishHook,
    /// Asset library for image/video fields.
    #[prop(optional)]
    asset_source: Option<AssetSource>,
    /// Stock-media search for the asset picker.
    #[prop(optional)]
    asset_search: Option<AssetSearchHook>,
    /// Statically known pages for the URL picker.
    #[prop(optional)]
    pages: Vec<PageRef>,
    /// Live page search for the URL picker.
    #[prop(optional)]
    page_search: Option<PageSearchHook>,
    /// Starts the host's sign-in flow.
    on_sign_in: Callback<()>,
    /// Signs the current user out.
    on_sign_out: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let page = RwSignal::new(PageStore::default());
    let session = RwSignal::new(EditingSession::default());
    let ui = RwSignal::new(UiState {
        screen_size: storage::load_json(storage::keys::SCREEN_SIZE).unwrap_or_default(),
        hidden_ids: storage::load_json(storage::keys::HIDDEN_IDS).unwrap_or_default(),
        ..UiState::default()
    });
    let toasts = RwSignal::new(ToastStack::default());
    let enabled = RwSignal::new(storage::load_json(storage::keys::EDIT_MODE).unwrap_or(false));

    let mode = Signal::derive(move || EditMode::resolve(user.get().is_some(), enabled.get()));
    let touched = Memo::new(move |_| page.with(PageStore::touched));

    let hooks = HostHooks {
        publish: on_publish,
        asset_source,
        asset_search,
        pages,
        page_search,
        on_sign_in,
        on_sign_out,
    };

    provide_context(page);
    provide_context(session);
    provide_context(ui);
    provide_context(toasts);
    provide_context(mode);
    provide_context(hooks.clone());

    // Seed page data on mount and whenever the host hands over a new snapshot.
    Effect::new(move || {
        let snapshot = initial.get();
        page.update(|store| store.seed(snapshot));
    });

    // Persist overlay preferences as they change.
    Effect::new(move || storage::save_json(storage::keys::EDIT_MODE, &enabled.get()));
    Effect::new(move || {
        ui.with(|state| {
            storage::save_json(storage::keys::SCREEN_SIZE, &state.screen_size);
            storage::save_json(storage::keys::HIDDEN_IDS, &state.hidden_ids);
        });
    });

    let on_toggle_mode = move |_| {
        if mode.get_untracked().is_on() && touched.get_untracked() {
            let confirmed =
                confirm::ask("You have unsaved changes. Are you sure you want to leave edit mode?");
            if !mode::exit_allowed(true, confirmed) {
                return;
            }
        }
        page.update(PageStore::discard);
        session.set(EditingSession::closed());
        enabled.update(|flag| *flag = !*flag);
        ui.update(|state| state.screen_size = ScreenSize::Full);
    };

    let on_publish_click = {
        let hooks = hooks.clone();
        move |_| {
            let _ = &hooks;
            if ui.with_untracked(|state| state.publishing) {
                return;
            }
            ui.update(|state| state.publishing = true);
            #[cfg(feature = "hydrate")]
            {
                let publish = hooks.publish.clone();
                let snapshot = page.with_untracked(PageStore::snapshot);
                leptos::task::spawn_local(async move {
                    match publish.run(snapshot).await {
                        Ok(()) => {
                            toasts.update(|stack| {
                                stack.success("Changes published");
                            });
                        }
                        Err(err) => {
                            log::error!("publish failed: {err}");
                            toasts.update(|stack| {
                                stack.error("Publishing failed");
                            });
                        }
                    }
                    ui.update(|state| state.publishing = false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                ui.update(|state| state.publishing = false);
            }
        }
    };

    let on_discard = move |_| page.update(PageStore::discard);

    let close_session = Callback::new(move |()| session.set(EditingSession::closed()));
    let close_seo = Callback::new(move |()| ui.update(|state| state.seo_form_open = false));

    let sign_in = hooks.on_sign_in;
    let sign_out = hooks.on_sign_out;

    let default_children = children.clone();
    let readonly_children = children.clone();
    let frame_children = children;

    view! {
        <div class="inlay-root">
            <Show
                when=move || user.get().is_some()
                fallback={
                    let children = readonly_children.clone();
                    move || {
                        view! {
                            {children()}
                            <button
                                type="button"
                                class="inlay-signin"
                                on:click=move |_| sign_in.run(())
                            >
                                "Sign in"
                            </button>
                        }
                    }
                }
            >
                <div class=move || {
                    if mode.get().is_on() {
                        "inlay-topbar inlay-topbar--editing"
                    } else {
                        "inlay-topbar"
                    }
                }>
                    <div class="inlay-topbar__left">
                        <Show when=move || mode.get().is_on()>
                            <button
                                type="button"
                                class="inlay-topbar__seo"
                                on:click=move |_| ui.update(|state| state.seo_form_open = true)
                            >
                                "Meta & SEO"
                            </button>
                            <div class="inlay-topbar__sizes">
                                {ScreenSize::all()
                                    .into_iter()
                                    .map(|size| {
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if ui.get().screen_size == size {
                                                        "inlay-topbar__size inlay-topbar__size--active"
                                                    } else {
                                                        "inlay-topbar__size"
                                                    }
                                                }
                                                on:click=move |_| {
                                                    ui.update(|state| state.screen_size = size);
                                                }
                                            >
                                                {size.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    </div>
                    <div class="inlay-topbar__right">
                        <button
                            type="button"
                            class="inlay-topbar__toggle"
                            on:click=on_toggle_mode
                        >
                            {move || if mode.get().is_on() { "Exit editing" } else { "Start editing" }}
                        </button>
                        <Show when=move || touched.get()>
                            <button
                                type="button"
                                class="inlay-topbar__publish"
                                disabled=move || ui.get().publishing
                                on:click=on_publish_click.clone()
                            >
                                {move || {
                                    if ui.get().publishing { "Publishing..." } else { "Publish changes" }
                                }}
                            </button>
                            <button
                                type="button"
                                class="inlay-topbar__discard"
                                on:click=on_discard
                            >
                                "Discard"
                            </button>
                        </Show>
                        <Show when=move || mode.get().is_on()>
                            <button
                                type="button"
                                class=move || {
                                    if ui.with(|state| state.hidden_ids.is_empty()) {
                                        "inlay-topbar__hidden"
                                    } else {
                                        "inlay-topbar__hidden inlay-topbar__hidden--some"
                                    }
                                }
                                on:click=move |_| ui.update(UiState::clear_hidden)
                            >
                                {move || format!("Hidden: {}", ui.with(|state| state.hidden_ids.len()))}
                            </button>
                        </Show>
                        <button
                            type="button"
                            class="inlay-topbar__signout"
                            on:click=move |_| sign_out.run(())
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
                <div class="inlay-stage">
                    {
                        let default_children = default_children.clone();
                        let frame_children = frame_children.clone();
                        move || match ui.get().screen_size.frame_width_px() {
                            None => {
                                view! {
                                    <div class="inlay-canvas">{default_children()}</div>
                                }
                                    .into_any()
                            }
                            Some(width) => {
                                view! {
                                    <PreviewFrame
                                        width_px=width
                                        children=frame_children.clone()
                                    />
                                }
                                    .into_any()
                            }
                        }
                    }
                    <Show when=move || session.get().is_open()>
                        <Modal on_close=close_session>
                            <EditForm on_close=close_session />
                        </Modal>
                    </Show>
                    <Show when=move || ui.get().seo_form_open>
                        <Modal on_close=close_seo>
                            <SeoForm on_close=close_seo />
                        </Modal>
                    </Show>
                </div>
                <Toaster />
            </Show>
        </div>
    }
}
