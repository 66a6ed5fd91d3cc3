use super::*;

#[test]
fn field_type_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&FieldType::RichText).unwrap(),
        "\"rich-text\""
    );
    assert_eq!(serde_json::to_string(&FieldType::Text).unwrap(), "\"text\"");
}

#[test]
fn field_type_deserializes_kebab_case() {
    let kind: FieldType = serde_json::from_str("\"rich-text\"").unwrap();
    assert_eq!(kind, FieldType::RichText);
    let kind: FieldType = serde_json::from_str("\"boolean\"").unwrap();
    assert_eq!(kind, FieldType::Boolean);
}

#[test]
fn field_serializes_kind_as_type() {
    let field = Field::new("headline", FieldType::Text, "Headline");
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["id"], "headline");
}

#[test]
fn media_field_types() {
    assert!(FieldType::Image.is_media());
    assert!(FieldType::Video.is_media());
    assert!(!FieldType::Url.is_media());
    assert!(!FieldType::RichText.is_media());
}

#[test]
fn asset_descriptor_hit_prefers_thumb() {
    let asset = AssetDescriptor {
        id: "a1".to_owned(),
        url: "https://cdn/full.jpg".to_owned(),
        name: None,
        thumb_url: Some("https://cdn/thumb.jpg".to_owned()),
    };
    let hit = asset.hit();
    assert_eq!(hit.thumb, "https://cdn/thumb.jpg");
    assert_eq!(hit.full, "https://cdn/full.jpg");
}

#[test]
fn asset_descriptor_hit_falls_back_to_url() {
    let asset = AssetDescriptor {
        id: "a1".to_owned(),
        url: "https://cdn/full.jpg".to_owned(),
        name: None,
        thumb_url: None,
    };
    assert_eq!(asset.hit().thumb, "https://cdn/full.jpg");
}
