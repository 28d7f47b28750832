//! # client
//!
//! Leptos + WASM realization of CFM message bodies.
//!
//! The `richtext` crate turns a parsed body into a framework-agnostic view
//! tree. This crate mounts that tree as DOM, owns the per-instance widget
//! state (spoiler reveal, details expansion), and wires the network-backed
//! enrichments: profile and timeline chips, emoji-pack cards, link embeds,
//! and summary cards.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and the console logger.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
}
