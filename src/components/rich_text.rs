//! Markdown editing surface for rich-text fields.
//!
//! DESIGN
//! ======
//! Deliberately thin: a textarea over the markdown source, a small toolbar
//! that splices formatting markers around the current selection, and a live
//! preview through the shared markdown renderer. The value committed into
//! page data is the markdown source string.

#[cfg(test)]
#[path = "rich_text_test.rs"]
mod rich_text_test;

use leptos::prelude::*;

use crate::util::markdown;

/// Toolbar formatting actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkdownAction {
    /// Wrap the selection in `**`.
    Bold,
    /// Wrap the selection in `*`.
    Italic,
    /// Wrap the selection in backticks.
    Code,
    /// Wrap the selection as a link with a placeholder target.
    Link,
    /// Prefix selected lines with `## `.
    Heading,
    /// Prefix selected lines with `- `.
    Bullet,
    /// Prefix selected lines with `> `.
    Quote,
}

impl MarkdownAction {
    /// Toolbar order and button labels.
    #[must_use]
    pub fn toolbar() -> &'static [(Self, &'static str)] {
        &[
            (Self::Bold, "B"),
            (Self::Italic, "I"),
            (Self::Heading, "H2"),
            (Self::Bullet, "List"),
            (Self::Quote, "Quote"),
            (Self::Code, "Code"),
            (Self::Link, "Link"),
        ]
    }
}

/// Apply a toolbar action to `text` over the char range `start..end`.
#[must_use]
pub fn apply_action(action: MarkdownAction, text: &str, start: usize, end: usize) -> String {
    match action {
        MarkdownAction::Bold => surround(text, start, end, "**", "**"),
        MarkdownAction::Italic => surround(text, start, end, "*", "*"),
        MarkdownAction::Code => surround(text, start, end, "`", "`"),
        MarkdownAction::Link => surround(text, start, end, "[", "](https://)"),
        MarkdownAction::Heading => prefix_lines(text, start, end, "## "),
        MarkdownAction::Bullet => prefix_lines(text, start, end, "- "),
        MarkdownAction::Quote => prefix_lines(text, start, end, "> "),
    }
}

/// Insert `before`/`after` around the char range `start..end`.
fn surround(text: &str, start: usize, end: usize, before: &str, after: &str) -> String {
    let (start, end) = clamp_range(text, start, end);
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end);
    let mut out = String::with_capacity(text.len() + before.len() + after.len());
    out.push_str(&text[..start_byte]);
    out.push_str(before);
    out.push_str(&text[start_byte..end_byte]);
    out.push_str(after);
    out.push_str(&text[end_byte..]);
    out
}

/// Prefix every line touched by the char range `start..end`.
fn prefix_lines(text: &str, start: usize, end: usize, prefix: &str) -> String {
    let (start, end) = clamp_range(text, start, end);
    let start_byte = line_start(text, byte_offset(text, start));
    let end_byte = byte_offset(text, end);
    let mut out = String::with_capacity(text.len() + prefix.len());
    out.push_str(&text[..start_byte]);
    let mut any = false;
    for line in text[start_byte..end_byte].split_inclusive('\n') {
        any = true;
        out.push_str(prefix);
        out.push_str(line);
    }
    if !any {
        out.push_str(prefix);
    }
    out.push_str(&text[end_byte..]);
    out
}

fn clamp_range(text: &str, start: usize, end: usize) -> (usize, usize) {
    let chars = text.chars().count();
    let start = start.min(chars);
    let end = end.clamp(start, chars);
    (start, end)
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(byte, _)| byte)
}

fn line_start(text: &str, byte: usize) -> usize {
    text[..byte].rfind('\n').map_or(0, |pos| pos + 1)
}

/// Convert a UTF-16 offset (as reported by the textarea selection) into a
/// char index.
#[must_use]
pub fn char_index_from_utf16(text: &str, unit_offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.chars().enumerate() {
        if units >= unit_offset {
            return index;
        }
        units += ch.len_utf16();
    }
    text.chars().count()
}

/// Markdown editing surface with toolbar and live preview.
#[component]
pub fn RichText(value: String, on_change: Callback<String>) -> impl IntoView {
    let text = RwSignal::new(value);
    let area_ref = NodeRef::<leptos::html::Textarea>::new();

    let on_toolbar = move |action: MarkdownAction| {
        let current = text.get_untracked();
        #[allow(unused_mut)]
        let mut range = {
            let end = current.chars().count();
            (end, end)
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = area_ref.get_untracked() {
                let start = area.selection_start().ok().flatten().unwrap_or(0) as usize;
                let end = area.selection_end().ok().flatten().unwrap_or(0) as usize;
                range = (
                    char_index_from_utf16(&current, start),
                    char_index_from_utf16(&current, end),
                );
            }
        }
        let next = apply_action(action, &current, range.0, range.1);
        text.set(next.clone());
        on_change.run(next);
    };

    let on_input = move |ev| {
        let next = event_target_value(&ev);
        text.set(next.clone());
        on_change.run(next);
    };

    view! {
        <div class="inlay-richtext">
            <div class="inlay-richtext__toolbar">
                {MarkdownAction::toolbar()
                    .iter()
                    .map(|&(action, label)| {
                        view! {
                            <button
                                type="button"
                                class="inlay-richtext__tool"
                                on:click=move |_| on_toolbar(action)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <textarea
                class="inlay-richtext__source"
                rows="8"
                prop:value=move || text.get()
                on:input=on_input
                node_ref=area_ref
            ></textarea>
            <div
                class="inlay-richtext__preview"
                inner_html=move || markdown::render_html(&text.get())
            ></div>
        </div>
    }
}
