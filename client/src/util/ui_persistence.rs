//! Browser localStorage helpers for persisted rich-text preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the theme
//! store and emoji-pack import share one namespaced key space without
//! repeating web-sys glue.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

const KEY_PREFIX: &str = "richtext_";

/// Key for the list of imported emoji-pack source URLs.
pub const EMOJI_PACKS_KEY: &str = "emoji_packs";

fn storage_key(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&storage_key(key)).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding unreadable preference {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = storage_key(key);
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(&storage_key(key), &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Append `src` unless already present. Returns whether the list changed.
pub fn add_emoji_pack_source(sources: &mut Vec<String>, src: &str) -> bool {
    let src = src.trim();
    if src.is_empty() || sources.iter().any(|known| known == src) {
        return false;
    }
    sources.push(src.to_owned());
    true
}

/// Persist an imported emoji pack. Returns whether it was new.
pub fn import_emoji_pack(src: &str) -> bool {
    let mut sources: Vec<String> = load_json(EMOJI_PACKS_KEY).unwrap_or_default();
    let added = add_emoji_pack_source(&mut sources, src);
    if added {
        save_json(EMOJI_PACKS_KEY, &sources);
        log::info!("imported emoji pack {src}");
    }
    added
}
