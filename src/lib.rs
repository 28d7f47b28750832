//! # richtext
//!
//! Renders parsed CFM message bodies into a UI-framework agnostic view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup parser and the `cfm` crate produce an [`AstNode`] tree; this
//! crate walks it with one of two visitors ([`FullRenderer`] for timelines,
//! [`LiteRenderer`] for previews and quotes) and hands the resulting
//! [`Fragment`] to a host UI. The same pass collects the text the auto-link
//! scanner reads, so embeds can be derived without re-reading a mounted tree.

pub mod autolink;
pub mod config;
pub mod emoji;
pub mod highlight;
pub mod links;
mod pattern;
pub mod render;
pub mod theme;
pub mod view;

pub use cfm::{AstNode, MarkupParser, ParseError};

pub use crate::autolink::{AutoLinkConfig, Embed, SpotifyKind, classify_embed, extract_links};
pub use crate::config::RenderConfig;
pub use crate::emoji::{Emoji, EmojiDictionary};
pub use crate::highlight::{CodeSpan, highlight_code};
pub use crate::links::{ServiceLink, WellKnownService};
pub use crate::render::{
    FullRenderer, LiteRenderer, RenderPass, Rendered, Renderer, ScanText, render_document,
    render_message,
};
pub use crate::theme::ThemeDescriptor;
pub use crate::view::{DetailsId, Fragment, ViewNode};
