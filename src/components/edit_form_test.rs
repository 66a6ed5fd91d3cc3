use super::*;
use serde_json::json;

fn record(value: Value) -> Map<String, Value> {
    let Value::Object(map) = value else {
        panic!("test record must be an object");
    };
    map
}

#[test]
fn string_field_renders_scalars() {
    let rec = record(json!({"title": "Hello", "count": 3, "flag": true}));
    assert_eq!(string_field(&rec, "title"), "Hello");
    assert_eq!(string_field(&rec, "count"), "3");
    assert_eq!(string_field(&rec, "flag"), "true");
    assert_eq!(string_field(&rec, "missing"), "");
}

#[test]
fn bool_field_defaults_false() {
    let rec = record(json!({"flag": true, "title": "x"}));
    assert!(bool_field(&rec, "flag"));
    assert!(!bool_field(&rec, "title"));
    assert!(!bool_field(&rec, "missing"));
}

#[test]
fn number_parsing_prefers_integers() {
    assert_eq!(parse_number_value("42"), json!(42));
    assert_eq!(parse_number_value(" 7 "), json!(7));
    assert_eq!(parse_number_value("1.5"), json!(1.5));
}

#[test]
fn unparsable_number_keeps_raw_text() {
    assert_eq!(parse_number_value("abc"), json!("abc"));
    assert_eq!(parse_number_value("1.2.3"), json!("1.2.3"));
}

#[test]
fn url_target_companion_key() {
    assert_eq!(target_key("cta"), "cta_target");
    assert_eq!(target_value(true), json!("_blank"));
    assert_eq!(target_value(false), json!("_self"));
}

#[test]
fn new_tab_flag_reads_companion_value() {
    let rec = record(json!({"cta": "/pricing", "cta_target": "_blank"}));
    assert!(new_tab_flag(&rec, "cta"));

    let rec = record(json!({"cta": "/pricing", "cta_target": "_self"}));
    assert!(!new_tab_flag(&rec, "cta"));

    let rec = record(json!({"cta": "/pricing"}));
    assert!(!new_tab_flag(&rec, "cta"));
}
