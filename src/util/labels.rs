//! Deriving human-readable headings from region keys.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use crate::content::path::{EntryPath, Slot};

/// Start-case a region key: split on separators and camel-case boundaries,
/// capitalize each word. `"heroBanner"` and `"hero_banner"` both become
/// `"Hero Banner"`.
#[must_use]
pub fn start_case(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == '.' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Edit-form heading for a session path: "Add ..." for the append sentinel,
/// "Edit ..." otherwise, with the index segment stripped from the key.
#[must_use]
pub fn form_heading(path: &str) -> String {
    let parsed = EntryPath::parse(path);
    let verb = match parsed.slot {
        Slot::Append => "Add",
        Slot::At(_) | Slot::Entry => "Edit",
    };
    format!("{verb} {}", start_case(&parsed.key))
}
