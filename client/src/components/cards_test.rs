use super::*;

#[test]
fn theme_byline_names_author() {
    let theme = ThemeDescriptor::parse(r#"{"meta":{"name":"Dusk","author":"kai"}}"#).unwrap();
    assert_eq!(theme_byline(&theme).as_deref(), Some("by kai"));
}

#[test]
fn theme_byline_absent_without_author() {
    let theme = ThemeDescriptor::parse(r#"{"meta":{"author":" "}}"#).unwrap();
    assert_eq!(theme_byline(&theme), None);
}

#[test]
fn pack_summary_pluralizes() {
    let mut pack: EmojiPackInfo = serde_json::from_value(serde_json::json!({
        "name": "Blobs",
        "emojis": [{"shortcode": "blob", "imageURL": "b.png"}]
    }))
    .unwrap();
    assert_eq!(pack_summary(&pack), "1 emoji");
    pack.emojis.push(pack.emojis[0].clone());
    assert_eq!(pack_summary(&pack), "2 emojis");
    pack.emojis.clear();
    assert_eq!(pack_summary(&pack), "0 emojis");
}
