use super::*;

#[test]
fn storage_keys_are_namespaced() {
    assert_eq!(storage_key(EMOJI_PACKS_KEY), "richtext_emoji_packs");
}

#[test]
fn add_emoji_pack_source_dedupes() {
    let mut sources = vec!["https://a.example/pack.json".to_owned()];
    assert!(!add_emoji_pack_source(&mut sources, "https://a.example/pack.json"));
    assert!(add_emoji_pack_source(&mut sources, " https://b.example/pack.json "));
    assert_eq!(
        sources,
        vec!["https://a.example/pack.json", "https://b.example/pack.json"]
    );
}

#[test]
fn add_emoji_pack_source_rejects_blank() {
    let mut sources = Vec::new();
    assert!(!add_emoji_pack_source(&mut sources, "   "));
    assert!(sources.is_empty());
}

#[test]
fn load_json_is_empty_off_browser() {
    assert_eq!(load_json::<Vec<String>>(EMOJI_PACKS_KEY), None);
}
