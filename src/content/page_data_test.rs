use super::*;
use serde_json::json;

fn page(value: Value) -> PageData {
    let Value::Object(entries) = value else {
        panic!("test page data must be an object");
    };
    PageData::from_entries(entries)
}

// =============================================================
// PageData
// =============================================================

#[test]
fn get_resolves_dotted_paths() {
    let data = page(json!({
        "hero": {"headline": "Hi"},
        "cards": [{"n": 0}, {"n": 1}],
    }));
    assert_eq!(data.get("hero"), Some(&json!({"headline": "Hi"})));
    assert_eq!(data.get("cards.1"), Some(&json!({"n": 1})));
    assert_eq!(data.get("cards.9"), None);
}

#[test]
fn seo_record_round_trips() {
    let mut data = PageData::new();
    assert!(data.seo().is_none());

    let mut record = serde_json::Map::new();
    record.insert("title".to_owned(), json!("About us"));
    data.set_seo(record);

    assert_eq!(data.seo().unwrap()["title"], json!("About us"));
    assert_eq!(data.get(SEO_KEY).unwrap()["title"], json!("About us"));
}

#[test]
fn deserializes_from_plain_object() {
    let data: PageData = serde_json::from_value(json!({
        "hero": {"headline": "Hi"},
    }))
    .unwrap();
    assert_eq!(data.get("hero.headline"), None); // interior dots are keys
    assert_eq!(data.get("hero"), Some(&json!({"headline": "Hi"})));
}

// =============================================================
// PageStore touched / seed / discard
// =============================================================

#[test]
fn untouched_after_seed() {
    let mut store = PageStore::default();
    store.seed(page(json!({"hero": {"headline": "Hi"}})));
    assert!(!store.touched());
}

#[test]
fn touched_after_any_edit() {
    let mut store = PageStore::default();
    store.seed(page(json!({"hero": {"headline": "Hi"}})));
    store
        .data
        .write("hero", json!({"headline": "Changed"}))
        .unwrap();
    assert!(store.touched());
}

#[test]
fn equal_edit_is_not_touched() {
    let mut store = PageStore::default();
    store.seed(page(json!({"hero": {"headline": "Hi"}})));
    store
        .data
        .write("hero", json!({"headline": "Hi"}))
        .unwrap();
    assert!(!store.touched());
}

#[test]
fn discard_restores_baseline() {
    let mut store = PageStore::default();
    store.seed(page(json!({"cards": [{"n": 0}]})));
    store.data.write("cards.-1", json!({"n": 1})).unwrap();
    assert!(store.touched());

    store.discard();
    assert!(!store.touched());
    assert_eq!(store.data.get("cards"), Some(&json!([{"n": 0}])));
}

#[test]
fn reseed_replaces_baseline() {
    let mut store = PageStore::default();
    store.seed(page(json!({"hero": {"headline": "Hi"}})));
    store
        .data
        .write("hero", json!({"headline": "Changed"}))
        .unwrap();

    store.seed(page(json!({"hero": {"headline": "Fresh"}})));
    assert!(!store.touched());
    assert_eq!(store.data.get("hero"), Some(&json!({"headline": "Fresh"})));
}

#[test]
fn snapshot_is_a_copy_of_live_data() {
    let mut store = PageStore::default();
    store.seed(page(json!({"hero": {"headline": "Hi"}})));
    let snapshot = store.snapshot();
    store
        .data
        .write("hero", json!({"headline": "Changed"}))
        .unwrap();
    assert_eq!(snapshot.get("hero"), Some(&json!({"headline": "Hi"})));
}
