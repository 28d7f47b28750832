//! Full-fidelity renderer used for timeline and detail views.

#[cfg(test)]
#[path = "full_test.rs"]
mod full_test;

use cfm::AstNode;

use super::{
    RenderPass, Renderer, emoji, image, inline_code, line_break, mention, tag, text, timeline,
    unknown, url, wrap,
};
use crate::highlight::highlight_code;
use crate::theme::{THEME_LANG, ThemeDescriptor};
use crate::view::{Fragment, ViewNode};

/// Rendered for absent nodes so gaps in the tree stay visible.
pub const NULL_PLACEHOLDER: &str = "null";

/// Renders every node kind at full fidelity: media, theme and emoji-pack
/// cards, headings, and expandable details.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullRenderer;

impl Renderer for FullRenderer {
    fn render_node(&self, node: &AstNode, pass: &mut RenderPass<'_>) -> Fragment {
        match node {
            AstNode::Null => text(NULL_PLACEHOLDER, pass),
            AstNode::Newline => line_break(pass),
            AstNode::Line(body) => {
                let mut out = self.render_nodes(body, pass);
                out.append(line_break(pass));
                out
            }
            AstNode::Text(body) => text(body, pass),
            AstNode::Marquee(body) => wrap(self, body, pass, ViewNode::Marquee),
            AstNode::Italic(body) => wrap(self, body, pass, ViewNode::Italic),
            AstNode::Bold(body) => wrap(self, body, pass, ViewNode::Bold),
            AstNode::Strike(body) => wrap(self, body, pass, ViewNode::Strike),
            AstNode::Url { url: href, alt } => url(href, alt.as_deref(), pass),
            AstNode::Timeline(id) => timeline(id, pass),
            AstNode::Spoiler(body) => wrap(self, body, pass, ViewNode::Spoiler),
            AstNode::Quote(body) => wrap(self, body, pass, ViewNode::Quote),
            AstNode::Tag(body) => tag(body, pass),
            AstNode::Mention(body) => mention(body, pass),
            AstNode::Emoji(shortcode) => emoji(shortcode, true, pass),
            AstNode::Details { summary, body } => {
                let id = pass.open_details();
                let summary = self.render_nodes(summary, pass);
                let body = pass.gated(id, |pass| self.render_nodes(body, pass));
                Fragment::single(ViewNode::Details { id, summary, body })
            }
            AstNode::InlineCode(code) => inline_code(code, pass),
            AstNode::Image { url, alt } => image(url, alt, false, pass),
            AstNode::CodeBlock { lang, body } => code_block(lang, body, pass),
            AstNode::EmojiPack(src) => {
                pass.write(&format!("<emojipack src=\"{src}\"/>"));
                Fragment::single(ViewNode::EmojiPackCard { src: src.clone() })
            }
            AstNode::Heading { level, body } => {
                let content = self.render_nodes(body, pass);
                Fragment::single(ViewNode::Heading {
                    level: *level,
                    content,
                })
            }
            AstNode::Unknown(kind) => unknown(kind, pass),
        }
    }
}

fn code_block(lang: &str, body: &str, pass: &mut RenderPass<'_>) -> Fragment {
    pass.write(&format!("```{lang}\n{body}\n```\n"));
    if lang == THEME_LANG {
        match ThemeDescriptor::parse(body) {
            Ok(theme) => return Fragment::single(ViewNode::ThemeCard(theme)),
            Err(err) => log::debug!("theme code block is not a theme object: {err}"),
        }
    }
    Fragment::single(ViewNode::CodeBlock {
        lang: lang.to_owned(),
        code: body.to_owned(),
        highlighted: highlight_code(body, lang),
    })
}
