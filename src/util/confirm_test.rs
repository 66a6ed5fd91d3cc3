#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn declines_without_a_browser() {
    assert!(!ask("Delete this item?"));
}
