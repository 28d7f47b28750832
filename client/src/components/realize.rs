//! Turns a `richtext` view tree into Leptos views.
//!
//! DESIGN
//! ======
//! Realization is a plain recursive function returning `AnyView`; widgets
//! with their own state or network enrichment are components, everything
//! else is inline markup. Details expansion is owned by the renderer
//! component and threaded down through [`RealizeContext`].

use std::collections::BTreeSet;

use leptos::prelude::*;
use richtext::{DetailsId, Fragment, ViewNode};

use crate::components::cards::{EmojiPackCard, ThemeCard};
use crate::components::chips::{ColorSwatch, ServiceChip, TimelineChip, UserChip};
use crate::components::details::DetailsBlock;
use crate::components::emoji::EmojiImage;
use crate::components::image::CfmImage;
use crate::components::spoiler::Spoiler;

/// Shared state threaded through one realization.
#[derive(Clone, Copy, Default)]
pub struct RealizeContext {
    /// Open details sections. `None` renders every section closed.
    pub expanded: Option<Signal<BTreeSet<DetailsId>>>,
    /// Called with a section's id when its summary is clicked.
    pub on_details_toggle: Option<Callback<DetailsId>>,
}

impl RealizeContext {
    pub fn is_expanded(&self, id: DetailsId) -> bool {
        self.expanded
            .is_some_and(|expanded| expanded.with(|set| set.contains(&id)))
    }
}

pub fn realize(fragment: &Fragment, ctx: RealizeContext) -> AnyView {
    fragment
        .nodes()
        .iter()
        .map(|node| realize_node(node, ctx))
        .collect_view()
        .into_any()
}

fn realize_node(node: &ViewNode, ctx: RealizeContext) -> AnyView {
    match node {
        ViewNode::Text(text) => text.clone().into_any(),
        ViewNode::LineBreak => view! { <br /> }.into_any(),
        ViewNode::Italic(inner) => view! { <i>{realize(inner, ctx)}</i> }.into_any(),
        ViewNode::Bold(inner) => view! { <b>{realize(inner, ctx)}</b> }.into_any(),
        ViewNode::Strike(inner) => view! { <s>{realize(inner, ctx)}</s> }.into_any(),
        ViewNode::Marquee(inner) => view! {
            <span class="cfm-marquee">
                // Two copies so the scroll loops without a gap.
                <span class="cfm-marquee__track">{realize(inner, ctx)}{realize(inner, ctx)}</span>
            </span>
        }
        .into_any(),
        ViewNode::Heading { level, content } => heading(*level, realize(content, ctx)),
        ViewNode::Quote(inner) => {
            view! { <blockquote class="cfm-quote">{realize(inner, ctx)}</blockquote> }.into_any()
        }
        ViewNode::Link { href, label } => view! {
            <a class="cfm-link" href=href.clone() target="_blank" rel="noopener noreferrer">
                {label.clone()}
            </a>
        }
        .into_any(),
        ViewNode::ServiceChip(link) => view! { <ServiceChip link=link.clone() /> }.into_any(),
        ViewNode::TimelineChip { timeline_id } => {
            view! { <TimelineChip timeline_id=timeline_id.clone() /> }.into_any()
        }
        ViewNode::ColorTag { tag, hex } => view! {
            <span class="cfm-tag">
                {tag.clone()}
                <ColorSwatch hex=hex.clone() />
            </span>
        }
        .into_any(),
        ViewNode::UserChip { ccid } => view! { <UserChip ccid=ccid.clone() /> }.into_any(),
        ViewNode::Emoji {
            shortcode,
            image_url,
            preview,
        } => view! {
            <EmojiImage shortcode=shortcode.clone() image_url=image_url.clone() preview=*preview />
        }
        .into_any(),
        ViewNode::InlineCode(code) => {
            view! { <code class="cfm-inline-code">{code.clone()}</code> }.into_any()
        }
        ViewNode::Image {
            url,
            alt,
            thumbnail,
        } => view! { <CfmImage url=url.clone() alt=alt.clone() thumbnail=*thumbnail /> }.into_any(),
        ViewNode::CodeBlock {
            lang,
            code,
            highlighted,
        } => {
            let body = match highlighted {
                Some(spans) => spans
                    .iter()
                    .map(|span| view! { <span style=span.css()>{span.text.clone()}</span> })
                    .collect_view()
                    .into_any(),
                None => code.clone().into_any(),
            };
            view! {
                <pre class="cfm-code-block">
                    <code class=format!("language-{lang}")>{body}</code>
                </pre>
            }
            .into_any()
        }
        ViewNode::ThemeCard(theme) => view! { <ThemeCard theme=theme.clone() /> }.into_any(),
        ViewNode::EmojiPackCard { src } => view! { <EmojiPackCard src=src.clone() /> }.into_any(),
        ViewNode::Details { id, summary, body } => view! {
            <DetailsBlock id=*id summary=summary.clone() body=body.clone() ctx=ctx />
        }
        .into_any(),
        ViewNode::Spoiler(inner) => view! { <Spoiler content=inner.clone() ctx=ctx /> }.into_any(),
        ViewNode::Diagnostic(message) => {
            view! { <span class="cfm-diagnostic">{message.clone()}</span> }.into_any()
        }
    }
}

fn heading(level: u8, content: AnyView) -> AnyView {
    match level {
        1 => view! { <h1 class="cfm-heading">{content}</h1> }.into_any(),
        2 => view! { <h2 class="cfm-heading">{content}</h2> }.into_any(),
        3 => view! { <h3 class="cfm-heading">{content}</h3> }.into_any(),
        4 => view! { <h4 class="cfm-heading">{content}</h4> }.into_any(),
        5 => view! { <h5 class="cfm-heading">{content}</h5> }.into_any(),
        _ => view! { <h6 class="cfm-heading">{content}</h6> }.into_any(),
    }
}
