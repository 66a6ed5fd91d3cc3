use super::*;

#[test]
fn default_size_is_full_width() {
    assert_eq!(ScreenSize::default(), ScreenSize::Full);
    assert_eq!(ScreenSize::Full.frame_width_px(), None);
}

#[test]
fn fixed_sizes_have_frame_widths() {
    assert_eq!(ScreenSize::Phone.frame_width_px(), Some(640));
    assert_eq!(ScreenSize::Tablet.frame_width_px(), Some(1280));
    assert_eq!(ScreenSize::Desktop.frame_width_px(), Some(1536));
}

#[test]
fn screen_size_serializes_to_storage_names() {
    assert_eq!(
        serde_json::to_string(&ScreenSize::Full).unwrap(),
        "\"default\""
    );
    assert_eq!(
        serde_json::to_string(&ScreenSize::Phone).unwrap(),
        "\"phone\""
    );
    let size: ScreenSize = serde_json::from_str("\"tablet\"").unwrap();
    assert_eq!(size, ScreenSize::Tablet);
}

#[test]
fn default_ui_state_is_clean() {
    let ui = UiState::default();
    assert!(ui.hovered_id.is_none());
    assert!(ui.hidden_ids.is_empty());
    assert!(!ui.seo_form_open);
    assert!(!ui.publishing);
}

#[test]
fn hide_is_idempotent() {
    let mut ui = UiState::default();
    ui.hide("hero");
    ui.hide("hero");
    assert_eq!(ui.hidden_ids, vec!["hero".to_owned()]);
    assert!(ui.is_hidden("hero"));
    assert!(!ui.is_hidden("cards"));
}

#[test]
fn unhide_removes_only_the_named_region() {
    let mut ui = UiState::default();
    ui.hide("hero");
    ui.hide("cards");
    ui.unhide("hero");
    assert_eq!(ui.hidden_ids, vec!["cards".to_owned()]);
}

#[test]
fn clear_hidden_empties_the_list() {
    let mut ui = UiState::default();
    ui.hide("hero");
    ui.hide("cards");
    ui.clear_hidden();
    assert!(ui.hidden_ids.is_empty());
}
