//! Custom emoji descriptors and the per-message shortcode dictionary.

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Image sources for one custom emoji.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "animURL", default, skip_serializing_if = "Option::is_none")]
    pub anim_url: Option<String>,
}

impl Emoji {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            anim_url: None,
        }
    }

    #[must_use]
    pub fn with_anim(mut self, anim_url: impl Into<String>) -> Self {
        self.anim_url = Some(anim_url.into());
        self
    }

    /// URL to display: the animated variant when present, else the static one.
    #[must_use]
    pub fn display_url(&self) -> &str {
        match self.anim_url.as_deref() {
            Some(anim) if !anim.is_empty() => anim,
            _ => &self.image_url,
        }
    }
}

/// Shortcode to emoji mapping. Keys are unique; lookup is exact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiDictionary(BTreeMap<String, Emoji>);

impl EmojiDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the emoji for `shortcode`.
    pub fn insert(&mut self, shortcode: impl Into<String>, emoji: Emoji) {
        self.0.insert(shortcode.into(), emoji);
    }

    #[must_use]
    pub fn lookup(&self, shortcode: &str) -> Option<&Emoji> {
        self.0.get(shortcode)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Emoji)> for EmojiDictionary {
    fn from_iter<I: IntoIterator<Item = (K, Emoji)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
