//! Expandable details section.
//!
//! The `open` state is controlled by the owning renderer so a toggle can
//! re-run the link scan over the newly visible text.

use leptos::prelude::*;
use richtext::{DetailsId, Fragment};

use crate::components::realize::{RealizeContext, realize};

#[component]
pub fn DetailsBlock(id: DetailsId, summary: Fragment, body: Fragment, ctx: RealizeContext) -> impl IntoView {
    let is_open = move || ctx.is_expanded(id);
    let on_summary_click = move |ev: leptos::ev::MouseEvent| {
        // Suppress the native toggle; the owner flips the state instead.
        ev.prevent_default();
        if let Some(on_toggle) = ctx.on_details_toggle {
            on_toggle.run(id);
        }
    };

    view! {
        <details class="cfm-details" prop:open=is_open>
            <summary class="cfm-details__summary" on:click=on_summary_click>
                {realize(&summary, ctx)}
            </summary>
            <div class="cfm-details__body">{realize(&body, ctx)}</div>
        </details>
    }
}
