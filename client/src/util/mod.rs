//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic to improve reuse and testability.

pub mod clipboard;
pub mod image;
pub mod js_parser;
pub mod theme_store;
pub mod ui_persistence;
