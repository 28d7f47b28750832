//! Theme and emoji-pack cards from Full-renderer code blocks and pack nodes.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use leptos::prelude::*;
use richtext::ThemeDescriptor;

use crate::components::chips::swatch_style;
use crate::net::types::EmojiPackInfo;
use crate::state::capabilities::use_capabilities;
use crate::util::theme_store;

const PACK_ICON_HEIGHT: u32 = 48;

/// Byline under a theme card's title.
pub fn theme_byline(theme: &ThemeDescriptor) -> Option<String> {
    theme
        .meta
        .author
        .as_deref()
        .filter(|author| !author.trim().is_empty())
        .map(|author| format!("by {author}"))
}

/// Count line under an emoji-pack card's title.
pub fn pack_summary(pack: &EmojiPackInfo) -> String {
    match pack.emojis.len() {
        1 => "1 emoji".to_owned(),
        n => format!("{n} emojis"),
    }
}

/// Preview of a theme object with an import button that stores and
/// activates it.
#[component]
pub fn ThemeCard(theme: ThemeDescriptor) -> impl IntoView {
    let imported = RwSignal::new(false);
    let name = theme.display_name().to_owned();
    let byline = theme_byline(&theme);
    let swatches = theme
        .preview_colors()
        .into_iter()
        .map(|color| view! { <span class="cfm-theme-card__swatch" style=swatch_style(&color)></span> })
        .collect_view();
    let on_import = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        theme_store::import_theme(&theme);
        imported.set(true);
    };

    view! {
        <div class="cfm-theme-card">
            <div class="cfm-theme-card__swatches">{swatches}</div>
            <div class="cfm-theme-card__title">{name}</div>
            {byline.map(|b| view! { <div class="cfm-theme-card__byline">{b}</div> })}
            <button class="btn cfm-theme-card__import" on:click=on_import disabled=move || imported.get()>
                {move || if imported.get() { "Applied" } else { "Apply theme" }}
            </button>
        </div>
    }
}

/// Card for an emoji pack URL. Shows the URL until the manifest loads;
/// import is delegated to the host capability.
#[component]
pub fn EmojiPackCard(src: String) -> impl IntoView {
    let caps = use_capabilities();
    let pack = RwSignal::new(None::<EmojiPackInfo>);
    let imported = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let src = src.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_emoji_pack(&src).await {
                Ok(found) => pack.set(Some(found)),
                Err(err) => log::debug!("emoji pack {src} unavailable: {err}"),
            }
        });
    }

    let title = {
        let src = src.clone();
        move || {
            pack.with(|p| {
                p.as_ref()
                    .map(|p| p.name.clone())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| src.clone())
            })
        }
    };
    let icon = {
        let image = caps.image.clone();
        move || {
            pack.with(|p| p.as_ref().and_then(|p| p.icon_url.clone()))
                .map(|url| {
                    let src = image.transform(&url, PACK_ICON_HEIGHT);
                    view! { <img class="cfm-emoji-pack-card__icon" src=src alt="" /> }
                })
        }
    };
    let summary = move || pack.with(|p| p.as_ref().map(pack_summary));
    let on_import = {
        let src = src.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            (caps.import_emoji_pack)(&src);
            imported.set(true);
        }
    };

    view! {
        <div class="cfm-emoji-pack-card" title=src>
            {icon}
            <div class="cfm-emoji-pack-card__text">
                <div class="cfm-emoji-pack-card__title">{title}</div>
                <div class="cfm-emoji-pack-card__summary">{summary}</div>
            </div>
            <button class="btn cfm-emoji-pack-card__import" on:click=on_import disabled=move || imported.get()>
                {move || if imported.get() { "Imported" } else { "Import" }}
            </button>
        </div>
    }
}
