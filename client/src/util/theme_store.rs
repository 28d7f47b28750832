//! Custom theme store and activation.
//!
//! Imported themes live in `localStorage` keyed by display name; the active
//! theme name is written to a separate key and applied as a `data-theme`
//! attribute on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use std::collections::BTreeMap;

use richtext::ThemeDescriptor;

use crate::util::ui_persistence::{load_json, save_json};

const CUSTOM_THEMES_KEY: &str = "custom_themes";
const THEME_NAME_KEY: &str = "theme_name";

pub type CustomThemes = BTreeMap<String, ThemeDescriptor>;

/// Insert `theme` under its display name, replacing an earlier import of the
/// same name. Returns the name it was stored under.
pub fn merge_theme(themes: &mut CustomThemes, theme: &ThemeDescriptor) -> String {
    let name = theme.display_name().to_owned();
    themes.insert(name.clone(), theme.clone());
    name
}

/// Read the active theme name.
pub fn read_preference() -> Option<String> {
    load_json(THEME_NAME_KEY)
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", name);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

/// Store `theme`, make it the active theme, and apply it.
pub fn import_theme(theme: &ThemeDescriptor) -> String {
    let mut themes: CustomThemes = load_json(CUSTOM_THEMES_KEY).unwrap_or_default();
    let name = merge_theme(&mut themes, theme);
    save_json(CUSTOM_THEMES_KEY, &themes);
    save_json(THEME_NAME_KEY, &name);
    apply(&name);
    log::info!("activated theme {name}");
    name
}
