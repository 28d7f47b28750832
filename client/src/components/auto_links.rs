//! Embeds and summary cards for URLs found in a message body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted under the Full renderer's body and fed its scan text. Each scan
//! re-derives the URL list; embeds are keyed by position so a details
//! toggle that reveals more links appends rather than remounting.

#[cfg(test)]
#[path = "auto_links_test.rs"]
mod auto_links_test;

use leptos::prelude::*;
use richtext::{Embed, classify_embed, extract_links};

use crate::net::types::LinkSummary;
use crate::state::capabilities::use_capabilities;

const SUMMARY_THUMBNAIL_HEIGHT: u32 = 120;

/// Inline style for an embedded player frame.
pub fn frame_style(embed: &Embed) -> String {
    match embed.frame_height() {
        Some(height) => format!("width: 100%; height: {height}px; border: 0"),
        None => "width: 100%; aspect-ratio: 16 / 9; border: 0".to_owned(),
    }
}

#[component]
pub fn AutoLinks(
    #[prop(into)] text: Signal<String>,
    #[prop(into, optional)] limit: MaybeProp<usize>,
) -> impl IntoView {
    let links = Memo::new(move |_| text.with(|t| extract_links(t, limit.get())));

    view! {
        <div class="cfm-autolinks">
            {move || {
                links
                    .get()
                    .into_iter()
                    .map(|url| view! { <LinkEmbed url=url /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Player frame for known media hosts, summary card for everything else.
#[component]
pub fn LinkEmbed(url: String) -> impl IntoView {
    let embed = classify_embed(&url);
    match embed.player_url() {
        Some(player) => {
            let style = frame_style(&embed);
            view! {
                <iframe
                    class="cfm-embed"
                    src=player
                    style=style
                    allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                    {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                ></iframe>
            }
            .into_any()
        }
        None => view! { <SummaryCard url=url /> }.into_any(),
    }
}

/// Link preview card. Renders nothing until (and unless) the summary
/// service answers with something presentable.
#[component]
pub fn SummaryCard(url: String) -> impl IntoView {
    let caps = use_capabilities();
    let summary = RwSignal::new(None::<LinkSummary>);

    #[cfg(feature = "hydrate")]
    {
        let config = crate::state::config::use_client_config();
        let url = url.clone();
        leptos::task::spawn_local(async move {
            if let Some(found) = crate::net::api::fetch_summary(&config, &url).await {
                if found.is_presentable() {
                    summary.set(Some(found));
                }
            }
        });
    }

    move || {
        summary.get().map(|found| {
            let thumbnail = found
                .thumbnail
                .as_deref()
                .map(|src| caps.image.transform(src, SUMMARY_THUMBNAIL_HEIGHT));
            view! {
                <a class="cfm-summary-card" href=url.clone() target="_blank" rel="noopener noreferrer">
                    {thumbnail.map(|src| view! { <img class="cfm-summary-card__thumbnail" src=src alt="" /> })}
                    <span class="cfm-summary-card__text">
                        <span class="cfm-summary-card__title">{found.title.clone()}</span>
                        {found.description.clone().map(|d| view! { <span class="cfm-summary-card__description">{d}</span> })}
                        {found.site_name.clone().map(|s| view! { <span class="cfm-summary-card__site">{s}</span> })}
                    </span>
                </a>
            }
        })
    }
}
