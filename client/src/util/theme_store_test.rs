use super::*;

fn theme(raw: &str) -> ThemeDescriptor {
    ThemeDescriptor::parse(raw).unwrap()
}

#[test]
fn merge_theme_keys_by_display_name() {
    let mut themes = CustomThemes::new();
    let name = merge_theme(&mut themes, &theme(r##"{"meta":{"name":"Dusk"},"palette":{"bg":"#000"}}"##));
    assert_eq!(name, "Dusk");
    assert!(themes.contains_key("Dusk"));
}

#[test]
fn merge_theme_replaces_same_name() {
    let mut themes = CustomThemes::new();
    merge_theme(&mut themes, &theme(r##"{"meta":{"name":"Dusk"},"palette":{"bg":"#000"}}"##));
    merge_theme(&mut themes, &theme(r##"{"meta":{"name":"Dusk"},"palette":{"bg":"#111"}}"##));
    assert_eq!(themes.len(), 1);
    assert_eq!(themes["Dusk"].preview_colors(), vec!["#111"]);
}

#[test]
fn unnamed_theme_is_stored_as_untitled() {
    let mut themes = CustomThemes::new();
    assert_eq!(merge_theme(&mut themes, &theme("{}")), "Untitled theme");
}

#[test]
fn import_off_browser_returns_name_without_side_effects() {
    assert_eq!(import_theme(&theme(r#"{"meta":{"name":"Dawn"}}"#)), "Dawn");
    assert_eq!(read_preference(), None);
}
