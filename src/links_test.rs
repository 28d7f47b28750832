use super::*;

#[test]
fn github_profile_captures_handle() {
    let link = classify_profile_url("https://github.com/octocat").unwrap();
    assert_eq!(link.service, WellKnownService::GitHub);
    assert_eq!(link.handle, "octocat");
    assert_eq!(link.href, "https://github.com/octocat");
}

#[test]
fn trailing_slash_is_accepted() {
    let link = classify_profile_url("https://x.com/someone/").unwrap();
    assert_eq!(link.service, WellKnownService::X);
    assert_eq!(link.handle, "someone");
}

#[test]
fn extra_path_segment_is_not_a_profile() {
    assert_eq!(classify_profile_url("https://github.com/octocat/repo"), None);
    assert_eq!(classify_profile_url("https://twitter.com/a/status/1"), None);
}

#[test]
fn each_service_is_recognized() {
    let cases = [
        ("https://twitter.com/tw", WellKnownService::Twitter, "tw"),
        ("https://x.com/xx", WellKnownService::X, "xx"),
        ("https://www.youtube.com/@chan", WellKnownService::YouTube, "@chan"),
        ("https://github.com/gh", WellKnownService::GitHub, "gh"),
        ("https://soundcloud.com/sc", WellKnownService::SoundCloud, "sc"),
        ("https://www.instagram.com/ig", WellKnownService::Instagram, "ig"),
        ("https://www.twitch.tv/tv", WellKnownService::Twitch, "tv"),
        ("https://band.bandcamp.com", WellKnownService::Bandcamp, "band"),
    ];
    for (url, service, handle) in cases {
        let link = classify_profile_url(url).unwrap_or_else(|| panic!("{url} not matched"));
        assert_eq!(link.service, service, "{url}");
        assert_eq!(link.handle, handle, "{url}");
    }
}

#[test]
fn no_url_matches_two_services() {
    let urls = [
        "https://twitter.com/a",
        "https://x.com/a",
        "https://youtube.com/@a",
        "https://github.com/a",
        "https://soundcloud.com/a",
        "https://instagram.com/a",
        "https://twitch.tv/a",
        "https://a.bandcamp.com/",
    ];
    for url in urls {
        let hits = PROFILE_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(url))
            .count();
        assert_eq!(hits, 1, "{url}");
    }
}

#[test]
fn plain_http_and_unknown_hosts_fall_through() {
    assert_eq!(classify_profile_url("http://github.com/octocat"), None);
    assert_eq!(classify_profile_url("https://example.com/octocat"), None);
}

#[test]
fn tag_color_requires_exactly_six_trailing_hex_digits() {
    assert_eq!(tag_color("color1a2b3c").as_deref(), Some("#1a2b3c"));
    assert_eq!(tag_color("ff00ff").as_deref(), Some("#ff00ff"));
    assert_eq!(tag_color("MixABCDEF").as_deref(), Some("#ABCDEF"));
    assert_eq!(tag_color("x1a2b3"), None);
    assert_eq!(tag_color("a1b2c3d"), None);
    assert_eq!(tag_color("rust"), None);
}

#[test]
fn ccid_is_prefix_plus_length() {
    let ccid = format!("con1{}", "x".repeat(38));
    assert_eq!(ccid.len(), 42);
    assert!(is_ccid(&ccid));
    assert!(!is_ccid(&ccid[..41]));
    assert!(!is_ccid(&format!("con2{}", "x".repeat(38))));
    assert!(!is_ccid("alice@example.com"));
}

#[test]
fn ccid_rejects_non_ascii_of_same_char_count() {
    let body = format!("con1{}é", "x".repeat(37));
    assert_eq!(body.chars().count(), 42);
    assert!(!is_ccid(&body));
    let body = format!("con1{}あ", "x".repeat(36));
    assert_eq!(body.len(), 43);
    assert!(!is_ccid(&body));
}

#[test]
fn split_timeline_id_requires_both_parts() {
    assert_eq!(
        split_timeline_id("t123@ariake.concrnt.net"),
        Some(("t123", "ariake.concrnt.net"))
    );
    assert_eq!(split_timeline_id("t123"), None);
    assert_eq!(split_timeline_id("@domain"), None);
    assert_eq!(split_timeline_id("local@"), None);
}
