//! Custom emoji image with optional hover preview.

use leptos::prelude::*;

use crate::state::capabilities::use_capabilities;

const INLINE_HEIGHT: u32 = 24;
const PREVIEW_HEIGHT: u32 = 128;

/// Emoji image. With `preview` set (Full renderer), hovering shows an
/// enlarged copy and the `:shortcode:`.
#[component]
pub fn EmojiImage(shortcode: String, image_url: String, preview: bool) -> impl IntoView {
    let caps = use_capabilities();
    let hovered = RwSignal::new(false);
    let code = format!(":{shortcode}:");
    let inline_src = caps.image.transform(&image_url, INLINE_HEIGHT);
    let preview_src = caps.image.transform(&image_url, PREVIEW_HEIGHT);

    let on_enter = move |_| {
        if preview {
            hovered.set(true);
        }
    };
    let on_leave = move |_| hovered.set(false);
    let preview_code = code.clone();

    view! {
        <span class="cfm-emoji" on:mouseenter=on_enter on:mouseleave=on_leave>
            <img class="cfm-emoji__image" src=inline_src alt=code.clone() title=code />
            <Show when=move || hovered.get()>
                <span class="cfm-emoji__preview">
                    <img class="cfm-emoji__preview-image" src=preview_src.clone() alt="" />
                    <span class="cfm-emoji__preview-code">{preview_code.clone()}</span>
                </span>
            </Show>
        </span>
    }
}
