//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cfm_renderer` is the entry point hosts mount. `realize` walks the view
//! tree and hands each node kind to the widget that owns its behavior.

pub mod auto_links;
pub mod cards;
pub mod cfm_renderer;
pub mod chips;
pub mod details;
pub mod emoji;
pub mod image;
pub mod realize;
pub mod spoiler;
