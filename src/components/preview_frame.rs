//! Fixed-width preview iframe with parent-style mirroring.
//!
//! TRADE-OFFS
//! ==========
//! The iframe starts empty; on mount the page content node is moved into the
//! frame body and the parent document's stylesheet links and inline styles
//! are copied into the frame head so host styling applies inside. Off the
//! browser the content renders in a plain constrained wrapper instead.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Renders children at a fixed pixel width inside a same-origin iframe.
#[component]
pub fn PreviewFrame(width_px: u32, children: ChildrenFn) -> impl IntoView {
    let frame_ref = NodeRef::<leptos::html::Iframe>::new();
    let content_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if let (Some(frame), Some(content)) = (frame_ref.get(), content_ref.get()) {
                mount_into_frame(&frame, &content);
            }
        });
    }

    let on_load = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let (Some(frame), Some(content)) = (frame_ref.get_untracked(), content_ref.get_untracked()) {
                mount_into_frame(&frame, &content);
            }
        }
    };

    let frame_style = format!("width:{width_px}px;");

    view! {
        <div class="inlay-preview">
            <iframe
                class="inlay-preview__frame"
                style=frame_style
                node_ref=frame_ref
                on:load=on_load
            ></iframe>
            <div class="inlay-preview__staging" node_ref=content_ref>
                {children()}
            </div>
        </div>
    }
}

/// Copy parent styles into the frame head and adopt the content node.
#[cfg(feature = "hydrate")]
fn mount_into_frame(frame: &web_sys::HtmlIFrameElement, content: &web_sys::HtmlDivElement) {
    let Some(frame_doc) = frame.content_document() else {
        return;
    };
    mirror_styles(&frame_doc);
    if let Some(body) = frame_doc.body() {
        let _ = body.append_child(content);
    }
}

/// Rebuild the frame head from the parent document's stylesheet links and
/// inline `<style>` elements.
#[cfg(feature = "hydrate")]
fn mirror_styles(frame_doc: &web_sys::Document) {
    let Some(parent_doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(frame_head) = frame_doc.head() else {
        return;
    };
    frame_head.set_inner_html("");

    let Ok(nodes) = parent_doc.query_selector_all("link[rel=\"stylesheet\"], style") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(source) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        if source.tag_name().eq_ignore_ascii_case("link") {
            let Ok(link) = frame_doc.create_element("link") else {
                continue;
            };
            let attributes = source.attributes();
            for j in 0..attributes.length() {
                if let Some(attr) = attributes.item(j) {
                    let _ = link.set_attribute(&attr.name(), &attr.value());
                }
            }
            let _ = frame_head.append_child(&link);
        } else {
            let Ok(style) = frame_doc.create_element("style") else {
                continue;
            };
            style.set_text_content(source.text_content().as_deref());
            let _ = frame_head.append_child(&style);
        }
    }
}
