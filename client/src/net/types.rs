//! Wire DTOs for the federation API, the summary service, and emoji packs.
//!
//! DESIGN
//! ======
//! Fields the renderer never displays are not modeled. Everything optional on
//! the wire defaults so a sparse record still decodes into a usable chip.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use richtext::{Emoji, EmojiDictionary};
use serde::{Deserialize, Serialize};

/// Standard `{ status, content }` envelope of federation API responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: String,
    pub content: T,
}

/// Signed document wrapper; only the parsed body is read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Record<T> {
    #[serde(rename = "parsedDoc")]
    pub parsed_doc: Document<T>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Document<T> {
    pub body: T,
}

/// Display profile for a user chip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Username when present and non-blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Display metadata for a timeline chip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Link preview returned by the summary service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "sitename")]
    pub site_name: Option<String>,
}

impl LinkSummary {
    /// A summary without a title has nothing worth a card.
    #[must_use]
    pub fn is_presentable(&self) -> bool {
        self.title.as_deref().is_some_and(|title| !title.trim().is_empty())
    }
}

/// One emoji entry inside a pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedEmoji {
    pub shortcode: String,
    #[serde(flatten)]
    pub emoji: Emoji,
}

/// Emoji pack manifest fetched from an `EmojiPack` node's URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiPackInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default, rename = "iconURL")]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub emojis: Vec<PackedEmoji>,
}

impl EmojiPackInfo {
    /// Pack contents as a shortcode dictionary.
    #[must_use]
    pub fn dictionary(&self) -> EmojiDictionary {
        self.emojis
            .iter()
            .map(|packed| (packed.shortcode.clone(), packed.emoji.clone()))
            .collect()
    }
}
