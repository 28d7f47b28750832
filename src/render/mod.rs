//! Node visitor shared by the Full and Lite renderers.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Renderer`] maps one [`AstNode`] to a [`Fragment`]; node slices render
//! as the ordered concatenation of their elements at every depth. Both
//! variants thread a [`RenderPass`] through the recursion, which carries the
//! config and collects the scan text read by the auto-link pass.
//!
//! Node kinds whose rendering is identical in both variants are handled by
//! the helpers in this module; the variant modules only spell out where
//! they diverge.

mod full;
mod lite;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::collections::BTreeSet;

use cfm::{AstNode, MarkupParser, parse_or_fallback};

use crate::config::RenderConfig;
use crate::links::{classify_profile_url, is_ccid, tag_color};
use crate::view::{DetailsId, Fragment, ViewNode};

pub use full::FullRenderer;
pub use lite::LiteRenderer;

/// Visitor over CFM nodes.
pub trait Renderer {
    /// Render one node.
    fn render_node(&self, node: &AstNode, pass: &mut RenderPass<'_>) -> Fragment;

    /// Render a node sequence as the concatenation of its elements.
    fn render_nodes(&self, nodes: &[AstNode], pass: &mut RenderPass<'_>) -> Fragment {
        nodes
            .iter()
            .map(|node| self.render_node(node, pass))
            .collect()
    }
}

/// Text the auto-link scanner sees, split by the details sections that
/// hide it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanText {
    segments: Vec<ScanSegment>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ScanSegment {
    /// Enclosing details sections, outermost first.
    gates: Vec<DetailsId>,
    text: String,
}

impl ScanText {
    fn push(&mut self, gates: &[DetailsId], text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.gates == gates => last.text.push_str(text),
            _ => self.segments.push(ScanSegment {
                gates: gates.to_vec(),
                text: text.to_owned(),
            }),
        }
    }

    /// Visible text given the set of open details sections.
    ///
    /// Content nested in several sections is visible only when all of them
    /// are open.
    #[must_use]
    pub fn visible(&self, expanded: &BTreeSet<DetailsId>) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.gates.iter().all(|id| expanded.contains(id)))
            .map(|segment| segment.text.as_str())
            .collect()
    }

    /// Text with every details section closed.
    #[must_use]
    pub fn collapsed(&self) -> String {
        self.visible(&BTreeSet::new())
    }
}

/// Mutable state for one render invocation.
#[derive(Debug)]
pub struct RenderPass<'a> {
    config: &'a RenderConfig,
    scan: ScanText,
    gates: Vec<DetailsId>,
    next_details: u32,
    lines: usize,
    truncated: bool,
}

impl<'a> RenderPass<'a> {
    #[must_use]
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            scan: ScanText::default(),
            gates: Vec::new(),
            next_details: 0,
            lines: 0,
            truncated: false,
        }
    }

    #[must_use]
    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    /// Record visible text for the auto-link scanner.
    pub fn write(&mut self, text: &str) {
        self.scan.push(&self.gates, text);
    }

    /// Allocate the id for the next details section.
    pub fn open_details(&mut self) -> DetailsId {
        let id = DetailsId(self.next_details);
        self.next_details += 1;
        id
    }

    /// Run `f` with its scan text hidden behind details section `id`.
    pub fn gated<R>(&mut self, id: DetailsId, f: impl FnOnce(&mut Self) -> R) -> R {
        self.gates.push(id);
        let out = f(self);
        self.gates.pop();
        out
    }

    fn note_line(&mut self) {
        self.lines += 1;
    }

    fn line_budget_spent(&self) -> bool {
        self.config.line_limit.is_some_and(|limit| self.lines >= limit)
    }

    /// Returns `true` only the first time truncation starts.
    fn begin_truncation(&mut self) -> bool {
        !std::mem::replace(&mut self.truncated, true)
    }

    #[must_use]
    pub fn finish(self) -> ScanText {
        self.scan
    }
}

/// Output of a full render invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendered {
    pub fragment: Fragment,
    pub scan: ScanText,
}

impl Rendered {
    /// Scan text given the open details sections.
    #[must_use]
    pub fn scan_text(&self, expanded: &BTreeSet<DetailsId>) -> String {
        self.scan.visible(expanded)
    }
}

/// Render a parsed document.
pub fn render_document<R>(renderer: &R, document: &[AstNode], config: &RenderConfig) -> Rendered
where
    R: Renderer + ?Sized,
{
    let mut pass = RenderPass::new(config);
    let fragment = renderer.render_nodes(document, &mut pass);
    Rendered {
        fragment,
        scan: pass.finish(),
    }
}

/// Parse a message body and render it. Parse failures render the fallback
/// document instead of erroring.
pub fn render_message<P, R>(parser: &P, renderer: &R, text: &str, config: &RenderConfig) -> Rendered
where
    P: MarkupParser + ?Sized,
    R: Renderer + ?Sized,
{
    let document = parse_or_fallback(parser, text);
    render_document(renderer, &document, config)
}

fn text(body: &str, pass: &mut RenderPass<'_>) -> Fragment {
    pass.write(body);
    Fragment::text(body)
}

fn line_break(pass: &mut RenderPass<'_>) -> Fragment {
    pass.write("\n");
    Fragment::single(ViewNode::LineBreak)
}

fn wrap<R>(
    renderer: &R,
    body: &[AstNode],
    pass: &mut RenderPass<'_>,
    wrapper: fn(Fragment) -> ViewNode,
) -> Fragment
where
    R: Renderer + ?Sized,
{
    Fragment::single(wrapper(renderer.render_nodes(body, pass)))
}

fn url(href: &str, alt: Option<&str>, pass: &mut RenderPass<'_>) -> Fragment {
    if let Some(link) = classify_profile_url(href) {
        pass.write(&link.handle);
        return Fragment::single(ViewNode::ServiceChip(link));
    }
    let label = alt.unwrap_or(href);
    pass.write(label);
    Fragment::single(ViewNode::Link {
        href: href.to_owned(),
        label: label.to_owned(),
    })
}

fn timeline(timeline_id: &str, pass: &mut RenderPass<'_>) -> Fragment {
    pass.write(timeline_id);
    Fragment::single(ViewNode::TimelineChip {
        timeline_id: timeline_id.to_owned(),
    })
}

fn tag(body: &str, pass: &mut RenderPass<'_>) -> Fragment {
    let literal = format!("#{body}");
    pass.write(&literal);
    match tag_color(body) {
        Some(hex) => Fragment::single(ViewNode::ColorTag { tag: literal, hex }),
        None => Fragment::text(literal),
    }
}

fn mention(body: &str, pass: &mut RenderPass<'_>) -> Fragment {
    if is_ccid(body) {
        pass.write(body);
        return Fragment::single(ViewNode::UserChip {
            ccid: body.to_owned(),
        });
    }
    text(&format!("@{body}"), pass)
}

fn emoji(shortcode: &str, preview: bool, pass: &mut RenderPass<'_>) -> Fragment {
    match pass.config().emoji_dict.lookup(shortcode) {
        Some(found) => Fragment::single(ViewNode::Emoji {
            shortcode: shortcode.to_owned(),
            image_url: found.display_url().to_owned(),
            preview,
        }),
        None => text(&format!(":{shortcode}:"), pass),
    }
}

fn inline_code(code: &str, pass: &mut RenderPass<'_>) -> Fragment {
    pass.write(&format!("`{code}`"));
    Fragment::single(ViewNode::InlineCode(code.to_owned()))
}

fn image(url: &str, alt: &str, thumbnail: bool, pass: &mut RenderPass<'_>) -> Fragment {
    pass.write(&format!("![{alt}]({url})"));
    Fragment::single(ViewNode::Image {
        url: url.to_owned(),
        alt: alt.to_owned(),
        thumbnail,
    })
}

fn unknown(kind: &str, pass: &mut RenderPass<'_>) -> Fragment {
    let message = format!("unknown ast type: {kind}");
    pass.write(&message);
    Fragment::single(ViewNode::Diagnostic(message))
}
