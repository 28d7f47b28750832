//! Spoiler: content hidden until clicked.

#[cfg(test)]
#[path = "spoiler_test.rs"]
mod spoiler_test;

use leptos::prelude::*;
use richtext::Fragment;

use crate::components::realize::{RealizeContext, realize};

pub fn spoiler_class(revealed: bool) -> &'static str {
    if revealed {
        "cfm-spoiler cfm-spoiler--revealed"
    } else {
        "cfm-spoiler"
    }
}

/// Hidden content with a per-instance reveal flag. Clicks toggle the flag
/// and do not reach enclosing click handlers (a post card opening, say).
#[component]
pub fn Spoiler(content: Fragment, ctx: RealizeContext) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        revealed.update(|r| *r = !*r);
    };

    view! {
        <span
            class=move || spoiler_class(revealed.get())
            on:click=on_click
            role="button"
            aria-expanded=move || if revealed.get() { "true" } else { "false" }
        >
            {realize(&content, ctx)}
        </span>
    }
}
