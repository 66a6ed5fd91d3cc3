//! SEO and metadata form writing the reserved `__seo` record.
//!
//! Defaults come from the saved record when one exists, then from the live
//! document's title/meta/link tags, then from sensible constants. Submission
//! replaces the whole record.

#[cfg(test)]
#[path = "seo_form_test.rs"]
mod seo_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use serde_json::{Map, Value};

use crate::content::page_data::PageStore;

/// Drafted SEO form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeoDraft {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_type: String,
    pub og_site_name: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
    pub theme_color: String,
}

/// Record keys, in the order the form renders them.
const RECORD_KEYS: [(&str, fn(&SeoDraft) -> String, fn(&mut SeoDraft, String)); 16] = [
    ("title", |d| d.title.clone(), |d, v| d.title = v),
    ("description", |d| d.description.clone(), |d, v| d.description = v),
    ("keywords", |d| d.keywords.clone(), |d, v| d.keywords = v),
    ("canonicalUrl", |d| d.canonical_url.clone(), |d, v| d.canonical_url = v),
    ("robots", |d| d.robots.clone(), |d, v| d.robots = v),
    ("og:title", |d| d.og_title.clone(), |d, v| d.og_title = v),
    ("og:description", |d| d.og_description.clone(), |d, v| d.og_description = v),
    ("og:image", |d| d.og_image.clone(), |d, v| d.og_image = v),
    ("og:url", |d| d.og_url.clone(), |d, v| d.og_url = v),
    ("og:type", |d| d.og_type.clone(), |d, v| d.og_type = v),
    ("og:site_name", |d| d.og_site_name.clone(), |d, v| d.og_site_name = v),
    ("twitter:card", |d| d.twitter_card.clone(), |d, v| d.twitter_card = v),
    ("twitter:title", |d| d.twitter_title.clone(), |d, v| d.twitter_title = v),
    (
        "twitter:description",
        |d| d.twitter_description.clone(),
        |d, v| d.twitter_description = v,
    ),
    ("twitter:image", |d| d.twitter_image.clone(), |d, v| d.twitter_image = v),
    ("themeColor", |d| d.theme_color.clone(), |d, v| d.theme_color = v),
];

impl SeoDraft {
    /// Rebuild a draft from a previously saved record.
    #[must_use]
    pub fn from_record(record: Option<&Map<String, Value>>) -> Self {
        let mut draft = Self::default();
        if let Some(record) = record {
            for (key, _, set) in RECORD_KEYS {
                if let Some(value) = record.get(key).and_then(Value::as_str) {
                    set(&mut draft, value.to_owned());
                }
            }
        }
        draft
    }

    /// The record written under the reserved SEO key.
    #[must_use]
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        for (key, get, _) in RECORD_KEYS {
            record.insert((*key).to_owned(), Value::String(get(self)));
        }
        record
    }

    /// Fill empty fields from the live document's head.
    #[cfg(feature = "hydrate")]
    pub fn fill_from_document(&mut self) {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let href = window
            .location()
            .href()
            .unwrap_or_default();

        let meta = |selector: &str| -> Option<String> {
            document
                .query_selector(selector)
                .ok()
                .flatten()?
                .dyn_ref::<web_sys::HtmlMetaElement>()
                .map(web_sys::HtmlMetaElement::content)
        };
        let mut fill = |slot: &mut String, value: Option<String>| {
            if slot.is_empty() {
                if let Some(value) = value {
                    *slot = value;
                }
            }
        };

        fill(&mut self.title, Some(document.title()));
        fill(&mut self.description, meta("meta[name=\"description\"]"));
        fill(&mut self.keywords, meta("meta[name=\"keywords\"]"));
        let canonical = document
            .query_selector("link[rel=\"canonical\"]")
            .ok()
            .flatten()
            .and_then(|el| {
                el.dyn_ref::<web_sys::HtmlLinkElement>()
                    .map(web_sys::HtmlLinkElement::href)
            });
        fill(&mut self.canonical_url, canonical.or_else(|| Some(href.clone())));
        fill(&mut self.robots, meta("meta[name=\"robots\"]"));
        fill(&mut self.og_title, meta("meta[property=\"og:title\"]"));
        fill(
            &mut self.og_description,
            meta("meta[property=\"og:description\"]"),
        );
        fill(&mut self.og_image, meta("meta[property=\"og:image\"]"));
        fill(
            &mut self.og_url,
            meta("meta[property=\"og:url\"]").or(Some(href)),
        );
        fill(&mut self.og_type, meta("meta[property=\"og:type\"]"));
        fill(&mut self.og_site_name, meta("meta[property=\"og:site_name\"]"));
        fill(&mut self.twitter_card, meta("meta[name=\"twitter:card\"]"));
        fill(&mut self.twitter_title, meta("meta[name=\"twitter:title\"]"));
        fill(
            &mut self.twitter_description,
            meta("meta[name=\"twitter:description\"]"),
        );
        fill(&mut self.twitter_image, meta("meta[name=\"twitter:image\"]"));
        fill(&mut self.theme_color, meta("meta[name=\"theme-color\"]"));
    }

    /// Constant defaults for fields nothing else filled.
    #[must_use]
    pub fn with_fallbacks(mut self) -> Self {
        if self.robots.is_empty() {
            self.robots = "index, follow".to_owned();
        }
        if self.og_type.is_empty() {
            self.og_type = "website".to_owned();
        }
        if self.twitter_card.is_empty() {
            self.twitter_card = "summary_large_image".to_owned();
        }
        if self.theme_color.is_empty() {
            self.theme_color = "#ffffff".to_owned();
        }
        self
    }
}

const ROBOTS_OPTIONS: [&str; 4] = [
    "index, follow",
    "noindex, follow",
    "index, nofollow",
    "noindex, nofollow",
];

const TWITTER_CARD_OPTIONS: [&str; 2] = ["summary", "summary_large_image"];

/// SEO form rendered in the side modal.
#[component]
pub fn SeoForm(on_close: Callback<()>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageStore>>();

    let draft = RwSignal::new({
        #[allow(unused_mut)]
        let mut initial = page.with_untracked(|store| SeoDraft::from_record(store.data.seo()));
        #[cfg(feature = "hydrate")]
        initial.fill_from_document();
        initial.with_fallbacks()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.update(|store| store.data.set_seo(draft.get_untracked().to_record()));
        on_close.run(());
    };

    let preview_title = move || {
        let value = draft.get().title;
        if value.is_empty() {
            "Example Page Title".to_owned()
        } else {
            value
        }
    };
    let preview_url = move || {
        let value = draft.get().canonical_url;
        if value.is_empty() {
            "https://example.com/page".to_owned()
        } else {
            value
        }
    };
    let preview_description = move || {
        let value = draft.get().description;
        if value.is_empty() {
            "A short description that might appear in search results.".to_owned()
        } else {
            value
        }
    };

    view! {
        <div class="inlay-seoform">
            <div class="inlay-seoform__header">
                <h1>"SEO & Metadata"</h1>
                <button
                    type="button"
                    class="inlay-seoform__close"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>
            <form class="inlay-seoform__body" on:submit=on_submit>
                <section class="inlay-seoform__section">
                    <h2>"Basic Metadata"</h2>
                    {text_row("Title", draft, |d| d.title.clone(), |d, v| d.title = v)}
                    {textarea_row(
                        "Description",
                        draft,
                        |d| d.description.clone(),
                        |d, v| d.description = v,
                    )}
                    {textarea_row(
                        "Keywords",
                        draft,
                        |d| d.keywords.clone(),
                        |d, v| d.keywords = v,
                    )}
                    {text_row(
                        "Canonical URL",
                        draft,
                        |d| d.canonical_url.clone(),
                        |d, v| d.canonical_url = v,
                    )}
                    {select_row(
                        "Robots",
                        draft,
                        &ROBOTS_OPTIONS,
                        |d| d.robots.clone(),
                        |d, v| d.robots = v,
                    )}
                </section>

                <section class="inlay-seoform__section">
                    <h2>"Open Graph"</h2>
                    {text_row("OG Title", draft, |d| d.og_title.clone(), |d, v| d.og_title = v)}
                    {text_row(
                        "OG Description",
                        draft,
                        |d| d.og_description.clone(),
                        |d, v| d.og_description = v,
                    )}
                    {text_row("OG Image URL", draft, |d| d.og_image.clone(), |d, v| d.og_image = v)}
                    {text_row("OG URL", draft, |d| d.og_url.clone(), |d, v| d.og_url = v)}
                    {text_row("OG Type", draft, |d| d.og_type.clone(), |d, v| d.og_type = v)}
                    {text_row(
                        "OG Site Name",
                        draft,
                        |d| d.og_site_name.clone(),
                        |d, v| d.og_site_name = v,
                    )}
                </section>

                <section class="inlay-seoform__section">
                    <h2>"Twitter Card"</h2>
                    {select_row(
                        "Card Type",
                        draft,
                        &TWITTER_CARD_OPTIONS,
                        |d| d.twitter_card.clone(),
                        |d, v| d.twitter_card = v,
                    )}
                    {text_row(
                        "Twitter Title",
                        draft,
                        |d| d.twitter_title.clone(),
                        |d, v| d.twitter_title = v,
                    )}
                    {text_row(
                        "Twitter Description",
                        draft,
                        |d| d.twitter_description.clone(),
                        |d, v| d.twitter_description = v,
                    )}
                    {text_row(
                        "Twitter Image URL",
                        draft,
                        |d| d.twitter_image.clone(),
                        |d, v| d.twitter_image = v,
                    )}
                </section>

                <section class="inlay-seoform__section">
                    <h2>"Advanced"</h2>
                    <div class="inlay-seoform__field">
                        <label>"Theme Color"</label>
                        <input
                            type="color"
                            prop:value=move || draft.get().theme_color
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.theme_color = value);
                            }
                        />
                    </div>
                </section>

                <section class="inlay-seoform__section inlay-seoform__preview">
                    <h2>"Search Preview"</h2>
                    <p class="inlay-seoform__preview-title">{preview_title}</p>
                    <p class="inlay-seoform__preview-url">{preview_url}</p>
                    <p class="inlay-seoform__preview-description">{preview_description}</p>
                </section>

                <button type="submit" class="inlay-seoform__save">
                    "Save SEO Settings"
                </button>
            </form>
        </div>
    }
}

fn text_row(
    label: &'static str,
    draft: RwSignal<SeoDraft>,
    get: fn(&SeoDraft) -> String,
    set: fn(&mut SeoDraft, String),
) -> AnyView {
    view! {
        <div class="inlay-seoform__field">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        </div>
    }
    .into_any()
}

fn textarea_row(
    label: &'static str,
    draft: RwSignal<SeoDraft>,
    get: fn(&SeoDraft) -> String,
    set: fn(&mut SeoDraft, String),
) -> AnyView {
    view! {
        <div class="inlay-seoform__field">
            <label>{label}</label>
            <textarea
                rows="3"
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            ></textarea>
        </div>
    }
    .into_any()
}

fn select_row(
    label: &'static str,
    draft: RwSignal<SeoDraft>,
    options: &'static [&'static str],
    get: fn(&SeoDraft) -> String,
    set: fn(&mut SeoDraft, String),
) -> AnyView {
    view! {
        <div class="inlay-seoform__field">
            <label>{label}</label>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                draft.update(|d| set(d, value));
            }>
                {options
                    .iter()
                    .map(|&option| {
                        view! {
                            <option value=option selected=move || draft.with(get) == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
    .into_any()
}
