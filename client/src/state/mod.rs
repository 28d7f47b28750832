//! Context-provided client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts provide a `ClientConfig` and a `RichTextCapabilities` through Leptos
//! context; components fall back to the defaults when neither is provided.

pub mod capabilities;
pub mod config;
