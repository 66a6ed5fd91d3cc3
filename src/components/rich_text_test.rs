use super::*;

#[test]
fn bold_wraps_selection() {
    assert_eq!(apply_action(MarkdownAction::Bold, "hello world", 0, 5), "**hello** world");
}

#[test]
fn italic_and_code_wrap_selection() {
    assert_eq!(apply_action(MarkdownAction::Italic, "hello", 0, 5), "*hello*");
    assert_eq!(apply_action(MarkdownAction::Code, "x = 1", 0, 5), "`x = 1`");
}

#[test]
fn link_leaves_a_placeholder_target() {
    assert_eq!(
        apply_action(MarkdownAction::Link, "docs", 0, 4),
        "[docs](https://)"
    );
}

#[test]
fn empty_selection_inserts_markers_at_cursor() {
    assert_eq!(apply_action(MarkdownAction::Bold, "hello", 5, 5), "hello****");
    assert_eq!(apply_action(MarkdownAction::Bullet, "hello", 5, 5), "- hello");
}

#[test]
fn heading_prefixes_from_line_start() {
    assert_eq!(
        apply_action(MarkdownAction::Heading, "intro\nbody", 8, 10),
        "intro\n## body"
    );
}

#[test]
fn bullet_prefixes_every_selected_line() {
    assert_eq!(
        apply_action(MarkdownAction::Bullet, "one\ntwo\nthree", 0, 13),
        "- one\n- two\n- three"
    );
}

#[test]
fn quote_prefix_on_single_line() {
    assert_eq!(apply_action(MarkdownAction::Quote, "said so", 0, 7), "> said so");
}

#[test]
fn out_of_range_selection_is_clamped() {
    assert_eq!(apply_action(MarkdownAction::Bold, "hi", 0, 99), "**hi**");
    assert_eq!(apply_action(MarkdownAction::Bold, "hi", 99, 99), "hi****");
}

#[test]
fn multibyte_text_keeps_char_boundaries() {
    assert_eq!(apply_action(MarkdownAction::Bold, "héllo", 0, 5), "**héllo**");
}

#[test]
fn utf16_offsets_map_to_char_indices() {
    assert_eq!(char_index_from_utf16("abc", 2), 2);
    // '𝄞' is two UTF-16 units but one char.
    assert_eq!(char_index_from_utf16("𝄞abc", 2), 1);
    assert_eq!(char_index_from_utf16("𝄞abc", 3), 2);
    assert_eq!(char_index_from_utf16("abc", 99), 3);
}
