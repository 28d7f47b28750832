//! Reduced-fidelity renderer for previews, tooltips, and one-line quotes.
//!
//! Anything whose rich form needs a network fetch (theme cards, emoji-pack
//! cards, highlighted code) becomes a bracketed placeholder. Identity chips
//! (mentions, timelines) are kept.

#[cfg(test)]
#[path = "lite_test.rs"]
mod lite_test;

use cfm::AstNode;

use super::{
    RenderPass, Renderer, emoji, image, inline_code, line_break, mention, tag, text, timeline,
    unknown, url, wrap,
};
use crate::view::{Fragment, ViewNode};

pub const CODEBLOCK_PLACEHOLDER: &str = "[Codeblock]";
pub const EMOJIPACK_PLACEHOLDER: &str = "[EmojiPack]";
pub const DETAILS_PLACEHOLDER: &str = "[Details]";
/// Appended once when a line limit cuts the body short.
pub const TRUNCATION_MARK: &str = "…";

#[derive(Clone, Copy, Debug, Default)]
pub struct LiteRenderer;

impl Renderer for LiteRenderer {
    fn render_node(&self, node: &AstNode, pass: &mut RenderPass<'_>) -> Fragment {
        if matches!(node, AstNode::Null) {
            return Fragment::new();
        }
        if pass.line_budget_spent() {
            return if pass.begin_truncation() {
                text(TRUNCATION_MARK, pass)
            } else {
                Fragment::new()
            };
        }

        let oneline = pass.config().force_oneline;
        match node {
            AstNode::Null => Fragment::new(),
            AstNode::Newline if oneline => Fragment::new(),
            AstNode::Newline => line_break(pass),
            AstNode::Line(body) => {
                let mut out = self.render_nodes(body, pass);
                if !oneline {
                    out.append(line_break(pass));
                    pass.note_line();
                }
                out
            }
            AstNode::Text(body) => text(body, pass),
            AstNode::Marquee(body) | AstNode::Heading { body, .. } => {
                self.render_nodes(body, pass)
            }
            AstNode::Italic(body) => wrap(self, body, pass, ViewNode::Italic),
            AstNode::Bold(body) => wrap(self, body, pass, ViewNode::Bold),
            AstNode::Strike(body) => wrap(self, body, pass, ViewNode::Strike),
            AstNode::Url { url: href, alt } => url(href, alt.as_deref(), pass),
            AstNode::Timeline(id) => timeline(id, pass),
            AstNode::Spoiler(body) => wrap(self, body, pass, ViewNode::Spoiler),
            AstNode::Quote(body) if oneline => {
                let mut out = text("\"", pass);
                out.append(self.render_nodes(body, pass));
                out.append(text("\"", pass));
                out
            }
            AstNode::Quote(body) => wrap(self, body, pass, ViewNode::Quote),
            AstNode::Tag(body) => tag(body, pass),
            AstNode::Mention(body) => mention(body, pass),
            AstNode::Emoji(shortcode) => emoji(shortcode, false, pass),
            AstNode::Details { .. } => text(DETAILS_PLACEHOLDER, pass),
            AstNode::InlineCode(code) => inline_code(code, pass),
            AstNode::Image { alt, .. } if oneline => text(&format!("[Image: {alt}]"), pass),
            AstNode::Image { url, alt } => image(url, alt, true, pass),
            AstNode::CodeBlock { .. } => text(CODEBLOCK_PLACEHOLDER, pass),
            AstNode::EmojiPack(_) => text(EMOJIPACK_PLACEHOLDER, pass),
            AstNode::Unknown(kind) => unknown(kind, pass),
        }
    }
}
