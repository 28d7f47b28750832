//! Inline chips for mentions, timelines, service profiles, and color tags.
//!
//! DESIGN
//! ======
//! User and timeline chips render from the identifier alone and upgrade in
//! place once the REST lookup resolves. A failed lookup leaves the
//! placeholder; the chip never shows an error state.

#[cfg(test)]
#[path = "chips_test.rs"]
mod chips_test;

use leptos::prelude::*;
use richtext::ServiceLink;
use richtext::links::split_timeline_id;

use crate::net::types::{TimelineInfo, UserProfile};
use crate::state::capabilities::use_capabilities;

/// Label for a user chip: the username once known, else the raw id.
pub fn user_chip_label(ccid: &str, profile: Option<&UserProfile>) -> String {
    profile
        .and_then(UserProfile::display_name)
        .map_or_else(|| ccid.to_owned(), str::to_owned)
}

/// Label for a timeline chip: the timeline name once known, else the local
/// part of the fully-qualified id.
pub fn timeline_chip_label(timeline_id: &str, info: Option<&TimelineInfo>) -> String {
    if let Some(name) = info
        .and_then(|info| info.name.as_deref())
        .filter(|name| !name.trim().is_empty())
    {
        return name.to_owned();
    }
    split_timeline_id(timeline_id).map_or_else(|| timeline_id.to_owned(), |(local, _)| local.to_owned())
}

pub fn swatch_style(hex: &str) -> String {
    format!("background-color: {hex}")
}

#[component]
pub fn UserChip(ccid: String) -> impl IntoView {
    let profile = RwSignal::new(None::<UserProfile>);

    #[cfg(feature = "hydrate")]
    {
        let config = crate::state::config::use_client_config();
        let ccid = ccid.clone();
        leptos::task::spawn_local(async move {
            if let Some(found) = crate::net::api::fetch_profile(&config, &ccid).await {
                profile.set(Some(found));
            }
        });
    }

    let label = {
        let ccid = ccid.clone();
        move || profile.with(|p| user_chip_label(&ccid, p.as_ref()))
    };
    let avatar = move || {
        profile.with(|p| p.as_ref().and_then(|p| p.avatar.clone())).map(|src| {
            view! { <img class="cfm-chip__avatar" src=src alt="" /> }
        })
    };

    view! {
        <span class="cfm-chip cfm-chip--user" title=ccid>
            {avatar}
            <span class="cfm-chip__label">{label}</span>
        </span>
    }
}

#[component]
pub fn TimelineChip(timeline_id: String) -> impl IntoView {
    let info = RwSignal::new(None::<TimelineInfo>);

    #[cfg(feature = "hydrate")]
    {
        let config = crate::state::config::use_client_config();
        let timeline_id = timeline_id.clone();
        leptos::task::spawn_local(async move {
            if let Some(found) = crate::net::api::fetch_timeline(&config, &timeline_id).await {
                info.set(Some(found));
            }
        });
    }

    let label = {
        let timeline_id = timeline_id.clone();
        move || info.with(|i| timeline_chip_label(&timeline_id, i.as_ref()))
    };

    view! {
        <span class="cfm-chip cfm-chip--timeline" title=timeline_id>
            "#"
            <span class="cfm-chip__label">{label}</span>
        </span>
    }
}

#[component]
pub fn ServiceChip(link: ServiceLink) -> impl IntoView {
    let service = link.service.label();
    view! {
        <a
            class="cfm-chip cfm-chip--service"
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
        >
            <span class="cfm-chip__service">{service}</span>
            <span class="cfm-chip__label">{link.handle}</span>
        </a>
    }
}

/// Color swatch next to a hex tag. Click copies the `#hex` code.
#[component]
pub fn ColorSwatch(hex: String) -> impl IntoView {
    let caps = use_capabilities();
    let style = swatch_style(&hex);
    let title = format!("Copy {hex}");
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        (caps.copy_text)(&hex);
    };

    view! {
        <span class="cfm-swatch" style=style title=title role="button" on:click=on_click></span>
    }
}
