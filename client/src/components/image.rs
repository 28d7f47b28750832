//! Inline message image.

use leptos::prelude::*;

use crate::state::capabilities::use_capabilities;
use crate::util::image::image_max_height;

/// Image capped to the Full or thumbnail height. Click opens the media
/// viewer on the original URL.
#[component]
pub fn CfmImage(url: String, alt: String, thumbnail: bool) -> impl IntoView {
    let caps = use_capabilities();
    let max_height = image_max_height(thumbnail);
    let src = caps.image.transform(&url, max_height);
    let style = format!("max-height: {max_height}px");
    let class = if thumbnail {
        "cfm-image cfm-image--thumbnail"
    } else {
        "cfm-image"
    };
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        (caps.open_media)(&url);
    };

    view! {
        <img class=class src=src alt=alt style=style loading="lazy" on:click=on_click />
    }
}
