//! Rendered view tree handed to a host UI.
//!
//! DESIGN
//! ======
//! The tree is plain data. Stateful widgets (spoilers, details) appear as
//! nodes carrying their content; the host owns their state. A
//! [`Fragment`] is an ordered node list and concatenates without
//! reordering or deduplication.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::highlight::CodeSpan;
use crate::links::ServiceLink;
use crate::theme::ThemeDescriptor;

/// Position of a `Details` node within one render pass, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DetailsId(pub u32);

/// One rendered construct.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewNode {
    Text(String),
    LineBreak,
    Italic(Fragment),
    Bold(Fragment),
    Strike(Fragment),
    /// Looping horizontal scroll of the content.
    Marquee(Fragment),
    Heading {
        level: u8,
        content: Fragment,
    },
    /// Indented block quote.
    Quote(Fragment),
    Link {
        href: String,
        label: String,
    },
    ServiceChip(ServiceLink),
    TimelineChip {
        timeline_id: String,
    },
    /// `#tag` text followed by a copyable color swatch.
    ColorTag {
        tag: String,
        hex: String,
    },
    UserChip {
        ccid: String,
    },
    Emoji {
        shortcode: String,
        image_url: String,
        /// Whether hovering shows an enlarged preview.
        preview: bool,
    },
    InlineCode(String),
    Image {
        url: String,
        alt: String,
        thumbnail: bool,
    },
    CodeBlock {
        lang: String,
        code: String,
        /// Styled runs covering `code`. `None` renders it as plain text.
        highlighted: Option<Vec<CodeSpan>>,
    },
    ThemeCard(ThemeDescriptor),
    EmojiPackCard {
        src: String,
    },
    /// Collapsible section. Starts closed.
    Details {
        id: DetailsId,
        summary: Fragment,
        body: Fragment,
    },
    /// Click-to-reveal content. Starts hidden.
    Spoiler(Fragment),
    /// Visible note for structure the renderer could not handle.
    Diagnostic(String),
}

/// Ordered sequence of rendered nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fragment {
    nodes: Vec<ViewNode>,
}

impl Fragment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(node: ViewNode) -> Self {
        Self { nodes: vec![node] }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::single(ViewNode::Text(text.into()))
    }

    pub fn push(&mut self, node: ViewNode) {
        self.nodes.push(node);
    }

    /// Append `other` after the current nodes.
    pub fn append(&mut self, other: Fragment) {
        self.nodes.extend(other.nodes);
    }

    #[must_use]
    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<ViewNode> {
        self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Visit every node depth-first, parents before children.
    pub fn walk(&self, visit: &mut impl FnMut(&ViewNode)) {
        for node in &self.nodes {
            visit(node);
            for child in node.children() {
                child.walk(visit);
            }
        }
    }
}

impl ViewNode {
    /// Nested fragments, in render order.
    #[must_use]
    pub fn children(&self) -> Vec<&Fragment> {
        match self {
            Self::Italic(inner)
            | Self::Bold(inner)
            | Self::Strike(inner)
            | Self::Marquee(inner)
            | Self::Quote(inner)
            | Self::Spoiler(inner)
            | Self::Heading { content: inner, .. } => vec![inner],
            Self::Details { summary, body, .. } => vec![summary, body],
            _ => Vec::new(),
        }
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut out = Self::new();
        for fragment in iter {
            out.append(fragment);
        }
        out
    }
}

impl FromIterator<ViewNode> for Fragment {
    fn from_iter<I: IntoIterator<Item = ViewNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Fragment {
    type Item = ViewNode;
    type IntoIter = std::vec::IntoIter<ViewNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
