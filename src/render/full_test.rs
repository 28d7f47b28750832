use cfm::AstNode;
use serde_json::json;

use super::*;
use crate::config::RenderConfig;
use crate::emoji::{Emoji, EmojiDictionary};
use crate::links::WellKnownService;
use crate::render::render_document;

fn render(value: serde_json::Value) -> Fragment {
    render_with(value, &RenderConfig::default())
}

fn render_with(value: serde_json::Value, config: &RenderConfig) -> Fragment {
    let nodes = cfm::document_from_json(&value).unwrap();
    render_document(&FullRenderer, &nodes, config).fragment
}

fn only(fragment: &Fragment) -> &ViewNode {
    assert_eq!(fragment.len(), 1, "{fragment:?}");
    &fragment.nodes()[0]
}

#[test]
fn line_appends_break_after_content() {
    let out = render(json!([{"type": "Line", "body": [{"type": "Text", "body": "hi"}]}]));
    assert_eq!(
        out.nodes(),
        &[ViewNode::Text("hi".to_owned()), ViewNode::LineBreak]
    );
}

#[test]
fn text_is_rendered_verbatim() {
    let out = render(json!([{"type": "Text", "body": "<b>&amp;</b>"}]));
    assert_eq!(only(&out), &ViewNode::Text("<b>&amp;</b>".to_owned()));
}

#[test]
fn emphasis_wrappers_recurse() {
    let out = render(json!([{"type": "Italic", "body": [
        {"type": "Strike", "body": [{"type": "Text", "body": "x"}]}
    ]}]));
    assert_eq!(
        only(&out),
        &ViewNode::Italic(Fragment::single(ViewNode::Strike(Fragment::text("x"))))
    );
}

#[test]
fn url_uses_alt_as_label() {
    let out = render(json!([{"type": "URL", "body": "https://example.com/a", "alt": "site"}]));
    assert_eq!(
        only(&out),
        &ViewNode::Link {
            href: "https://example.com/a".to_owned(),
            label: "site".to_owned(),
        }
    );
}

#[test]
fn url_without_alt_uses_raw_url() {
    let out = render(json!([{"type": "URL", "body": "https://example.com/a"}]));
    assert_eq!(
        only(&out),
        &ViewNode::Link {
            href: "https://example.com/a".to_owned(),
            label: "https://example.com/a".to_owned(),
        }
    );
}

#[test]
fn profile_url_renders_service_chip() {
    let out = render(json!([{"type": "URL", "body": "https://github.com/octocat"}]));
    let ViewNode::ServiceChip(link) = only(&out) else {
        panic!("expected service chip, got {out:?}");
    };
    assert_eq!(link.service, WellKnownService::GitHub);
    assert_eq!(link.handle, "octocat");
}

#[test]
fn repository_url_falls_through_to_generic_link() {
    let out = render(json!([{"type": "URL", "body": "https://github.com/octocat/repo"}]));
    assert!(matches!(only(&out), ViewNode::Link { .. }));
}

#[test]
fn timeline_passes_identifier_through() {
    let out = render(json!([{"type": "Timeline", "body": "t0abc@ariake.example"}]));
    assert_eq!(
        only(&out),
        &ViewNode::TimelineChip {
            timeline_id: "t0abc@ariake.example".to_owned(),
        }
    );
}

#[test]
fn color_tag_renders_swatch() {
    let out = render(json!([{"type": "Tag", "body": "color1a2b3c"}]));
    assert_eq!(
        only(&out),
        &ViewNode::ColorTag {
            tag: "#color1a2b3c".to_owned(),
            hex: "#1a2b3c".to_owned(),
        }
    );
}

#[test]
fn plain_tag_renders_hash_text() {
    let out = render(json!([{"type": "Tag", "body": "rust"}]));
    assert_eq!(only(&out), &ViewNode::Text("#rust".to_owned()));
}

#[test]
fn ccid_mention_renders_user_chip() {
    let ccid = format!("con1{}", "q".repeat(38));
    let out = render(json!([{"type": "Mention", "body": ccid}]));
    assert_eq!(only(&out), &ViewNode::UserChip { ccid });
}

#[test]
fn short_mention_renders_plain_handle() {
    let body = format!("con1{}", "q".repeat(37));
    let out = render(json!([{"type": "Mention", "body": body}]));
    assert_eq!(only(&out), &ViewNode::Text(format!("@{body}")));
}

#[test]
fn emoji_hit_renders_image_with_preview() {
    let dict: EmojiDictionary = [("smile", Emoji::new("a.png"))].into_iter().collect();
    let config = RenderConfig::default().emoji_dict(dict);
    let out = render_with(json!([{"type": "Emoji", "body": "smile"}]), &config);
    assert_eq!(
        only(&out),
        &ViewNode::Emoji {
            shortcode: "smile".to_owned(),
            image_url: "a.png".to_owned(),
            preview: true,
        }
    );
}

#[test]
fn emoji_miss_renders_shortcode_literal() {
    let dict: EmojiDictionary = [("smile", Emoji::new("a.png"))].into_iter().collect();
    let config = RenderConfig::default().emoji_dict(dict);
    let out = render_with(json!([{"type": "Emoji", "body": "missing"}]), &config);
    assert_eq!(only(&out), &ViewNode::Text(":missing:".to_owned()));
}

#[test]
fn image_renders_full_size() {
    let out = render(json!([{"type": "Image", "url": "a.png", "alt": "cat"}]));
    assert_eq!(
        only(&out),
        &ViewNode::Image {
            url: "a.png".to_owned(),
            alt: "cat".to_owned(),
            thumbnail: false,
        }
    );
}

#[test]
fn code_block_keeps_language() {
    let out = render(json!([{"type": "CodeBlock", "lang": "rust", "body": "let x = 1;"}]));
    let ViewNode::CodeBlock {
        lang,
        code,
        highlighted,
    } = only(&out)
    else {
        panic!("expected code block, got {out:?}");
    };
    assert_eq!(lang, "rust");
    assert_eq!(code, "let x = 1;");
    let spans = highlighted.as_ref().expect("rust is highlighted");
    let text: String = spans.iter().map(|span| span.text.as_str()).collect();
    assert_eq!(text, "let x = 1;");
    assert!(spans.len() > 1);
}

#[test]
fn unknown_code_language_stays_plain() {
    let out = render(json!([{"type": "CodeBlock", "lang": "no-such-language", "body": "a b"}]));
    assert_eq!(
        only(&out),
        &ViewNode::CodeBlock {
            lang: "no-such-language".to_owned(),
            code: "a b".to_owned(),
            highlighted: None,
        }
    );
}

#[test]
fn theme_code_block_renders_theme_card() {
    let out = render(json!([{
        "type": "CodeBlock",
        "lang": "theme",
        "body": "{\"meta\":{\"name\":\"Dusk\"},\"palette\":{}}"
    }]));
    let ViewNode::ThemeCard(theme) = only(&out) else {
        panic!("expected theme card, got {out:?}");
    };
    assert_eq!(theme.display_name(), "Dusk");
}

#[test]
fn malformed_theme_falls_back_to_code_block() {
    let out = render(json!([{"type": "CodeBlock", "lang": "theme", "body": "{nope"}]));
    let ViewNode::CodeBlock { lang, code, .. } = only(&out) else {
        panic!("expected code block, got {out:?}");
    };
    assert_eq!(lang, "theme");
    assert_eq!(code, "{nope");
}

#[test]
fn emoji_pack_renders_card() {
    let out = render(json!([{"type": "EmojiPack", "body": "https://pack.example/p.json"}]));
    assert_eq!(
        only(&out),
        &ViewNode::EmojiPackCard {
            src: "https://pack.example/p.json".to_owned(),
        }
    );
}

#[test]
fn heading_keeps_level() {
    let out = render(json!([{"type": "Heading", "level": 3, "body": [{"type": "Text", "body": "H"}]}]));
    assert_eq!(
        only(&out),
        &ViewNode::Heading {
            level: 3,
            content: Fragment::text("H"),
        }
    );
}

#[test]
fn marquee_and_quote_wrap_content() {
    let out = render(json!([
        {"type": "Marquee", "body": [{"type": "Text", "body": "m"}]},
        {"type": "Quote", "body": [{"type": "Text", "body": "q"}]}
    ]));
    assert_eq!(
        out.nodes(),
        &[
            ViewNode::Marquee(Fragment::text("m")),
            ViewNode::Quote(Fragment::text("q")),
        ]
    );
}

#[test]
fn details_renders_summary_and_body() {
    let out = render(json!([{
        "type": "Details",
        "summary": {"type": "Text", "body": "more"},
        "body": [{"type": "Bold", "body": [{"type": "Text", "body": "hidden"}]}]
    }]));
    assert_eq!(
        only(&out),
        &ViewNode::Details {
            id: crate::view::DetailsId(0),
            summary: Fragment::text("more"),
            body: Fragment::single(ViewNode::Bold(Fragment::text("hidden"))),
        }
    );
}

#[test]
fn spoiler_wraps_content() {
    let out = render(json!([{"type": "Spoiler", "body": [{"type": "Text", "body": "s"}]}]));
    assert_eq!(only(&out), &ViewNode::Spoiler(Fragment::text("s")));
}

#[test]
fn inline_code_is_kept_as_code() {
    let out = render(json!([{"type": "InlineCode", "body": "a < b"}]));
    assert_eq!(only(&out), &ViewNode::InlineCode("a < b".to_owned()));
}

#[test]
fn full_ignores_line_limit() {
    let config = RenderConfig::default().line_limit(Some(1));
    let nodes = vec![
        AstNode::Line(vec![AstNode::text("1")]),
        AstNode::Line(vec![AstNode::text("2")]),
    ];
    let out = render_document(&FullRenderer, &nodes, &config).fragment;
    assert_eq!(out.len(), 4);
}
