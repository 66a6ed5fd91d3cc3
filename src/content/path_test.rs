use super::*;
use serde_json::json;

fn root_with(key: &str, value: Value) -> Map<String, Value> {
    let mut root = Map::new();
    root.insert(key.to_owned(), value);
    root
}

// =============================================================
// EntryPath::parse
// =============================================================

#[test]
fn parse_plain_key() {
    let parsed = EntryPath::parse("hero");
    assert_eq!(parsed.key, "hero");
    assert_eq!(parsed.slot, Slot::Entry);
}

#[test]
fn parse_trailing_index() {
    let parsed = EntryPath::parse("cards.2");
    assert_eq!(parsed.key, "cards");
    assert_eq!(parsed.slot, Slot::At(2));
    assert_eq!(parsed.index(), Some(2));
}

#[test]
fn parse_append_sentinel() {
    let parsed = EntryPath::parse("cards.-1");
    assert_eq!(parsed.key, "cards");
    assert!(parsed.is_append());
    assert_eq!(parsed.index(), None);
}

#[test]
fn parse_keeps_interior_dots_in_key() {
    let parsed = EntryPath::parse("footer.links");
    assert_eq!(parsed.key, "footer.links");
    assert_eq!(parsed.slot, Slot::Entry);

    let parsed = EntryPath::parse("footer.links.0");
    assert_eq!(parsed.key, "footer.links");
    assert_eq!(parsed.slot, Slot::At(0));
}

#[test]
fn parse_rejects_non_numeric_and_negative_tails() {
    assert_eq!(EntryPath::parse("cards.two").slot, Slot::Entry);
    assert_eq!(EntryPath::parse("cards.-2").slot, Slot::Entry);
    assert_eq!(EntryPath::parse("cards.+2").slot, Slot::Entry);
    assert_eq!(EntryPath::parse(".2").slot, Slot::Entry);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_plain_entry() {
    let root = root_with("hero", json!({"headline": "Hi"}));
    assert_eq!(resolve(&root, "hero"), Some(&json!({"headline": "Hi"})));
    assert_eq!(resolve(&root, "missing"), None);
}

#[test]
fn resolve_indexed_entry() {
    let root = root_with("cards", json!([{"n": 0}, {"n": 1}]));
    assert_eq!(resolve(&root, "cards.1"), Some(&json!({"n": 1})));
    assert_eq!(resolve(&root, "cards.5"), None);
    assert_eq!(resolve(&root, "cards.-1"), None);
}

// =============================================================
// write
// =============================================================

#[test]
fn write_plain_entry_replaces_value() {
    let mut root = Map::new();
    write(&mut root, "hero", json!({"headline": "Hi"})).unwrap();
    assert_eq!(root["hero"], json!({"headline": "Hi"}));
}

#[test]
fn append_grows_list_by_one_preserving_order() {
    let mut root = root_with("cards", json!([{"n": 0}, {"n": 1}]));
    write(&mut root, "cards.-1", json!({"n": 2})).unwrap();
    assert_eq!(root["cards"], json!([{"n": 0}, {"n": 1}, {"n": 2}]));
}

#[test]
fn append_creates_missing_list() {
    let mut root = Map::new();
    write(&mut root, "cards.-1", json!({"n": 0})).unwrap();
    assert_eq!(root["cards"], json!([{"n": 0}]));
}

#[test]
fn write_indexed_replaces_in_place() {
    let mut root = root_with("cards", json!([{"n": 0}, {"n": 1}]));
    write(&mut root, "cards.0", json!({"n": 9})).unwrap();
    assert_eq!(root["cards"], json!([{"n": 9}, {"n": 1}]));
}

#[test]
fn write_past_end_is_out_of_range() {
    let mut root = root_with("cards", json!([{"n": 0}]));
    let err = write(&mut root, "cards.3", json!({})).unwrap_err();
    assert_eq!(
        err,
        PathError::IndexOutOfRange {
            path: "cards.3".to_owned(),
            index: 3,
            len: 1,
        }
    );
}

#[test]
fn write_into_non_list_fails() {
    let mut root = root_with("hero", json!({"headline": "Hi"}));
    let err = write(&mut root, "hero.-1", json!({})).unwrap_err();
    assert_eq!(
        err,
        PathError::NotAList {
            path: "hero.-1".to_owned()
        }
    );
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_returns_the_item() {
    let mut root = root_with("cards", json!([{"n": 0}, {"n": 1}]));
    let removed = remove(&mut root, "cards.0").unwrap();
    assert_eq!(removed, json!({"n": 0}));
    assert_eq!(root["cards"], json!([{"n": 1}]));
}

#[test]
fn remove_requires_an_index() {
    let mut root = root_with("cards", json!([]));
    let err = remove(&mut root, "cards").unwrap_err();
    assert_eq!(
        err,
        PathError::MissingIndex {
            path: "cards".to_owned()
        }
    );
}

// =============================================================
// shift
// =============================================================

fn numbered(n: usize) -> Value {
    json!(n)
}

#[test]
fn shift_up_at_first_index_is_noop() {
    let mut root = root_with("cards", json!([0, 1, 2]));
    assert!(!shift(&mut root, "cards.0", ItemMove::Up).unwrap());
    assert!(!shift(&mut root, "cards.0", ItemMove::ToStart).unwrap());
    assert_eq!(root["cards"], json!([0, 1, 2]));
}

#[test]
fn shift_down_at_last_index_is_noop() {
    let mut root = root_with("cards", json!([0, 1, 2]));
    assert!(!shift(&mut root, "cards.2", ItemMove::Down).unwrap());
    assert!(!shift(&mut root, "cards.2", ItemMove::ToEnd).unwrap());
    assert_eq!(root["cards"], json!([0, 1, 2]));
}

#[test]
fn shift_up_swaps_with_previous() {
    let mut root = root_with("cards", json!([0, 1, 2]));
    assert!(shift(&mut root, "cards.2", ItemMove::Up).unwrap());
    assert_eq!(root["cards"], json!([0, 2, 1]));
}

#[test]
fn shift_down_swaps_with_next() {
    let mut root = root_with("cards", json!([0, 1, 2]));
    assert!(shift(&mut root, "cards.0", ItemMove::Down).unwrap());
    assert_eq!(root["cards"], json!([1, 0, 2]));
}

#[test]
fn shift_to_start_and_end() {
    let mut root = root_with("cards", json!([0, 1, 2, 3]));
    assert!(shift(&mut root, "cards.2", ItemMove::ToStart).unwrap());
    assert_eq!(root["cards"], json!([2, 0, 1, 3]));

    let mut root = root_with("cards", json!([0, 1, 2, 3]));
    assert!(shift(&mut root, "cards.1", ItemMove::ToEnd).unwrap());
    assert_eq!(root["cards"], json!([0, 2, 3, 1]));
}

#[test]
fn shift_out_of_range_index_fails() {
    let mut root = root_with("cards", json!([numbered(0)]));
    let err = shift(&mut root, "cards.4", ItemMove::Up).unwrap_err();
    assert_eq!(
        err,
        PathError::IndexOutOfRange {
            path: "cards.4".to_owned(),
            index: 4,
            len: 1,
        }
    );
}
