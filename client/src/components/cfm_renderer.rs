//! Entry-point components for rendering a CFM message body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts mount `CfmRenderer` in timelines and detail views and
//! `CfmRendererLite` in previews, tooltips, and one-line quotes. Both parse
//! with the context parser and render with the matching `richtext` visitor.
//!
//! DESIGN
//! ======
//! The render is a memo over the body and emoji dictionary, so it re-runs
//! only when the message changes. Details expansion lives beside it: a
//! toggle updates the expanded set, which re-derives the scan text and
//! therefore the auto-link list, without re-rendering the body.

#[cfg(test)]
#[path = "cfm_renderer_test.rs"]
mod cfm_renderer_test;

use std::collections::BTreeSet;

use leptos::prelude::*;
use richtext::{DetailsId, EmojiDictionary, FullRenderer, LiteRenderer, RenderConfig, render_message};

use crate::components::auto_links::AutoLinks;
use crate::components::realize::{RealizeContext, realize};
use crate::state::capabilities::use_capabilities;

/// Flip `id` in the expanded set. Returns the new open state.
pub fn toggle_details(expanded: &mut BTreeSet<DetailsId>, id: DetailsId) -> bool {
    if expanded.remove(&id) {
        false
    } else {
        expanded.insert(id);
        true
    }
}

/// Full-fidelity message body with auto-link embeds underneath.
#[component]
pub fn CfmRenderer(
    #[prop(into)] body: Signal<String>,
    #[prop(into, optional)] emoji_dict: MaybeProp<EmojiDictionary>,
    /// Maximum number of auto-link embeds. Unlimited when unset.
    #[prop(into, optional)]
    limit: MaybeProp<usize>,
) -> impl IntoView {
    let parser = use_capabilities().parser;
    let rendered = Memo::new(move |_| {
        let config = RenderConfig::new().emoji_dict(emoji_dict.get().unwrap_or_default());
        body.with(|text| render_message(parser.as_ref(), &FullRenderer, text, &config))
    });

    let expanded = RwSignal::new(BTreeSet::<DetailsId>::new());
    // Details ids are positional; a new body starts fully collapsed.
    Effect::watch(
        move || body.track(),
        move |_, _, _| expanded.set(BTreeSet::new()),
        false,
    );
    let on_toggle = Callback::new(move |id: DetailsId| {
        expanded.update(|set| {
            toggle_details(set, id);
        });
    });
    let scan_text = Memo::new(move |_| rendered.with(|r| expanded.with(|set| r.scan_text(set))));

    let ctx = RealizeContext {
        expanded: Some(expanded.into()),
        on_details_toggle: Some(on_toggle),
    };

    view! {
        <div class="cfm cfm--full">
            <div class="cfm__body">{move || rendered.with(|r| realize(&r.fragment, ctx))}</div>
            <AutoLinks text=scan_text limit=limit />
        </div>
    }
}

/// Degraded message body for previews. No embeds, no details, no cards.
#[component]
pub fn CfmRendererLite(
    #[prop(into)] body: Signal<String>,
    #[prop(into, optional)] emoji_dict: MaybeProp<EmojiDictionary>,
    /// Collapse the body onto one line.
    #[prop(optional)]
    force_oneline: bool,
    /// Truncate after this many lines. Ignored with `force_oneline`.
    #[prop(optional)]
    line_limit: Option<usize>,
) -> impl IntoView {
    let parser = use_capabilities().parser;
    let rendered = Memo::new(move |_| {
        let config = RenderConfig::new()
            .force_oneline(force_oneline)
            .line_limit(line_limit)
            .emoji_dict(emoji_dict.get().unwrap_or_default());
        body.with(|text| render_message(parser.as_ref(), &LiteRenderer, text, &config))
    });
    let class = if force_oneline {
        "cfm cfm--lite cfm--oneline"
    } else {
        "cfm cfm--lite"
    };

    view! {
        <span class=class>
            {move || rendered.with(|r| realize(&r.fragment, RealizeContext::default()))}
        </span>
    }
}
