use super::*;
use serde_json::json;

#[test]
fn submitted_record_contains_the_title() {
    let draft = SeoDraft {
        title: "About us".to_owned(),
        ..SeoDraft::default()
    };
    let record = draft.to_record();
    assert_eq!(record["title"], json!("About us"));
}

#[test]
fn record_uses_original_meta_key_names() {
    let draft = SeoDraft {
        og_title: "Share title".to_owned(),
        twitter_card: "summary".to_owned(),
        canonical_url: "https://example.com".to_owned(),
        theme_color: "#112233".to_owned(),
        ..SeoDraft::default()
    };
    let record = draft.to_record();
    assert_eq!(record["og:title"], json!("Share title"));
    assert_eq!(record["twitter:card"], json!("summary"));
    assert_eq!(record["canonicalUrl"], json!("https://example.com"));
    assert_eq!(record["themeColor"], json!("#112233"));
}

#[test]
fn saved_record_round_trips_into_a_draft() {
    let original = SeoDraft {
        title: "Home".to_owned(),
        description: "Landing page".to_owned(),
        og_site_name: "Acme".to_owned(),
        ..SeoDraft::default()
    };
    let rebuilt = SeoDraft::from_record(Some(&original.to_record()));
    assert_eq!(rebuilt.title, "Home");
    assert_eq!(rebuilt.description, "Landing page");
    assert_eq!(rebuilt.og_site_name, "Acme");
}

#[test]
fn from_record_tolerates_missing_and_non_string_values() {
    let mut record = serde_json::Map::new();
    record.insert("title".to_owned(), json!(42));
    let draft = SeoDraft::from_record(Some(&record));
    assert_eq!(draft.title, "");

    let draft = SeoDraft::from_record(None);
    assert_eq!(draft.title, "");
}

#[test]
fn fallbacks_fill_only_empty_fields() {
    let draft = SeoDraft::default().with_fallbacks();
    assert_eq!(draft.robots, "index, follow");
    assert_eq!(draft.og_type, "website");
    assert_eq!(draft.twitter_card, "summary_large_image");
    assert_eq!(draft.theme_color, "#ffffff");

    let draft = SeoDraft {
        robots: "noindex, nofollow".to_owned(),
        ..SeoDraft::default()
    }
    .with_fallbacks();
    assert_eq!(draft.robots, "noindex, nofollow");
}
