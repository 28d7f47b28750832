use super::*;

#[test]
fn user_chip_shows_raw_id_while_unresolved() {
    assert_eq!(user_chip_label("con1abc", None), "con1abc");
}

#[test]
fn user_chip_prefers_username() {
    let profile = UserProfile {
        username: Some("alice".to_owned()),
        avatar: None,
    };
    assert_eq!(user_chip_label("con1abc", Some(&profile)), "alice");
}

#[test]
fn user_chip_ignores_blank_username() {
    let profile = UserProfile {
        username: Some(String::new()),
        avatar: None,
    };
    assert_eq!(user_chip_label("con1abc", Some(&profile)), "con1abc");
}

#[test]
fn timeline_chip_placeholder_uses_local_part() {
    assert_eq!(timeline_chip_label("t0abc@host.example", None), "t0abc");
    assert_eq!(timeline_chip_label("not-qualified", None), "not-qualified");
}

#[test]
fn timeline_chip_prefers_resolved_name() {
    let info = TimelineInfo {
        name: Some("Rust".to_owned()),
        description: None,
    };
    assert_eq!(timeline_chip_label("t0abc@host.example", Some(&info)), "Rust");
}

#[test]
fn swatch_style_sets_background() {
    assert_eq!(swatch_style("#1a2b3c"), "background-color: #1a2b3c");
}
