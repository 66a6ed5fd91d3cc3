#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_returns_none_without_a_browser() {
    assert_eq!(load_json::<bool>(keys::EDIT_MODE), None);
    assert_eq!(load_json::<Vec<String>>(keys::HIDDEN_IDS), None);
}

#[test]
fn save_is_noop_but_callable() {
    save_json(keys::EDIT_MODE, &true);
    save_json(keys::HIDDEN_IDS, &vec!["hero".to_owned()]);
}

#[test]
fn keys_are_distinct() {
    assert_ne!(keys::EDIT_MODE, keys::SCREEN_SIZE);
    assert_ne!(keys::SCREEN_SIZE, keys::HIDDEN_IDS);
}
