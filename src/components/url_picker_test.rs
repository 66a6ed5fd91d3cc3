use super::*;

fn page(path: &str, title: &str) -> PageRef {
    PageRef {
        path: path.to_owned(),
        title: title.to_owned(),
    }
}

#[test]
fn static_pages_come_first() {
    let merged = merge_suggestions(
        &[page("/about", "About")],
        &[page("/pricing", "Pricing")],
    );
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].path, "/about");
    assert_eq!(merged[1].path, "/pricing");
}

#[test]
fn fetched_duplicates_are_dropped() {
    let merged = merge_suggestions(
        &[page("/about", "About")],
        &[page("/about", "About us"), page("/team", "Team")],
    );
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].title, "About");
    assert_eq!(merged[1].path, "/team");
}

#[test]
fn empty_inputs_merge_to_empty() {
    assert!(merge_suggestions(&[], &[]).is_empty());
}

#[test]
fn duplicate_static_pages_are_deduplicated_too() {
    let merged = merge_suggestions(&[page("/a", "A"), page("/a", "A again")], &[]);
    assert_eq!(merged.len(), 1);
}
