use cfm::AstNode;
use serde_json::json;

use super::*;
use crate::config::RenderConfig;
use crate::emoji::{Emoji, EmojiDictionary};
use crate::render::render_document;

fn render_with(value: serde_json::Value, config: &RenderConfig) -> Fragment {
    let nodes = cfm::document_from_json(&value).unwrap();
    render_document(&LiteRenderer, &nodes, config).fragment
}

fn render(value: serde_json::Value) -> Fragment {
    render_with(value, &RenderConfig::default())
}

fn oneline() -> RenderConfig {
    RenderConfig::default().force_oneline(true)
}

fn count_breaks(fragment: &Fragment) -> usize {
    let mut count = 0;
    fragment.walk(&mut |node| {
        if matches!(node, ViewNode::LineBreak) {
            count += 1;
        }
    });
    count
}

fn nested_lines() -> serde_json::Value {
    json!([{"type": "Line", "body": [
        {"type": "Text", "body": "a"},
        {"type": "Line", "body": [
            {"type": "Text", "body": "b"},
            {"type": "Line", "body": [{"type": "Text", "body": "c"}]}
        ]},
        {"type": "Bold", "body": [{"type": "Line", "body": [{"type": "Text", "body": "d"}]}]}
    ]}])
}

#[test]
fn oneline_suppresses_breaks_at_every_depth() {
    let out = render_with(nested_lines(), &oneline());
    assert_eq!(count_breaks(&out), 0);
}

#[test]
fn multiline_emits_one_break_per_line() {
    let out = render(nested_lines());
    assert_eq!(count_breaks(&out), 4);
}

#[test]
fn oneline_drops_newline_nodes() {
    let out = render_with(json!([{"type": "Text", "body": "a"}, {"type": "newline"}]), &oneline());
    assert_eq!(out, Fragment::text("a"));
}

#[test]
fn codeblock_emoji_pack_and_details_become_placeholders() {
    let out = render(json!([
        {"type": "CodeBlock", "lang": "theme", "body": "{\"meta\":{}}"},
        {"type": "EmojiPack", "body": "https://pack.example/p.json"},
        {"type": "Details", "summary": {"type": "Text", "body": "s"}, "body": []}
    ]));
    assert_eq!(
        out.nodes(),
        &[
            ViewNode::Text(CODEBLOCK_PLACEHOLDER.to_owned()),
            ViewNode::Text(EMOJIPACK_PLACEHOLDER.to_owned()),
            ViewNode::Text(DETAILS_PLACEHOLDER.to_owned()),
        ]
    );
}

#[test]
fn heading_and_marquee_render_inline() {
    let out = render(json!([
        {"type": "Heading", "level": 1, "body": [{"type": "Text", "body": "H"}]},
        {"type": "Marquee", "body": [{"type": "Text", "body": "M"}]}
    ]));
    assert_eq!(
        out.nodes(),
        &[ViewNode::Text("H".to_owned()), ViewNode::Text("M".to_owned())]
    );
}

#[test]
fn oneline_quote_becomes_quoted_text() {
    let out = render_with(
        json!([{"type": "Quote", "body": [{"type": "Text", "body": "said"}]}]),
        &oneline(),
    );
    assert_eq!(
        out.nodes(),
        &[
            ViewNode::Text("\"".to_owned()),
            ViewNode::Text("said".to_owned()),
            ViewNode::Text("\"".to_owned()),
        ]
    );
}

#[test]
fn multiline_quote_keeps_block() {
    let out = render(json!([{"type": "Quote", "body": [{"type": "Text", "body": "said"}]}]));
    assert_eq!(out.nodes(), &[ViewNode::Quote(Fragment::text("said"))]);
}

#[test]
fn oneline_image_becomes_alt_placeholder() {
    let out = render_with(json!([{"type": "Image", "url": "a.png", "alt": "cat"}]), &oneline());
    assert_eq!(out, Fragment::text("[Image: cat]"));
}

#[test]
fn multiline_image_renders_thumbnail() {
    let out = render(json!([{"type": "Image", "url": "a.png", "alt": "cat"}]));
    assert_eq!(
        out.nodes(),
        &[ViewNode::Image {
            url: "a.png".to_owned(),
            alt: "cat".to_owned(),
            thumbnail: true,
        }]
    );
}

#[test]
fn emoji_lookup_matches_full_without_preview() {
    let dict: EmojiDictionary = [("smile", Emoji::new("a.png").with_anim("a.gif"))]
        .into_iter()
        .collect();
    let config = RenderConfig::default().emoji_dict(dict);
    let out = render_with(
        json!([{"type": "Emoji", "body": "smile"}, {"type": "Emoji", "body": "missing"}]),
        &config,
    );
    assert_eq!(
        out.nodes(),
        &[
            ViewNode::Emoji {
                shortcode: "smile".to_owned(),
                image_url: "a.gif".to_owned(),
                preview: false,
            },
            ViewNode::Text(":missing:".to_owned()),
        ]
    );
}

#[test]
fn spoiler_and_mentions_are_kept() {
    let ccid = format!("con1{}", "z".repeat(38));
    let out = render(json!([
        {"type": "Spoiler", "body": [{"type": "Text", "body": "s"}]},
        {"type": "Mention", "body": ccid},
        {"type": "Timeline", "body": "t@d"}
    ]));
    assert_eq!(
        out.nodes(),
        &[
            ViewNode::Spoiler(Fragment::text("s")),
            ViewNode::UserChip { ccid },
            ViewNode::TimelineChip {
                timeline_id: "t@d".to_owned(),
            },
        ]
    );
}

#[test]
fn line_limit_truncates_with_single_mark() {
    let config = RenderConfig::default().line_limit(Some(2));
    let nodes: Vec<AstNode> = (1..=4)
        .map(|n| AstNode::Line(vec![AstNode::Text(n.to_string())]))
        .collect();
    let rendered = render_document(&LiteRenderer, &nodes, &config);
    assert_eq!(
        rendered.fragment.nodes(),
        &[
            ViewNode::Text("1".to_owned()),
            ViewNode::LineBreak,
            ViewNode::Text("2".to_owned()),
            ViewNode::LineBreak,
            ViewNode::Text(TRUNCATION_MARK.to_owned()),
        ]
    );
    assert_eq!(rendered.scan.collapsed(), "1\n2\n…");
}

#[test]
fn line_limit_not_reached_leaves_body_intact() {
    let config = RenderConfig::default().line_limit(Some(5));
    let nodes = vec![AstNode::Line(vec![AstNode::text("only")])];
    let out = render_document(&LiteRenderer, &nodes, &config).fragment;
    assert_eq!(
        out.nodes(),
        &[ViewNode::Text("only".to_owned()), ViewNode::LineBreak]
    );
}

#[test]
fn line_limit_is_ignored_in_oneline_mode() {
    let config = oneline().line_limit(Some(1));
    let nodes = vec![
        AstNode::Line(vec![AstNode::text("a")]),
        AstNode::Line(vec![AstNode::text("b")]),
    ];
    let out = render_document(&LiteRenderer, &nodes, &config).fragment;
    assert_eq!(
        out.nodes(),
        &[ViewNode::Text("a".to_owned()), ViewNode::Text("b".to_owned())]
    );
}
