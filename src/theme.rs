//! Theme objects embedded in `theme` code blocks.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Code block language that marks a body as a theme object.
pub const THEME_LANG: &str = "theme";

const UNTITLED: &str = "Untitled theme";

/// Display metadata carried in a theme's `meta` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A visual theme decoded from a code block body.
///
/// Only `meta` is interpreted here. Every other key is kept verbatim so an
/// imported theme round-trips into the preference store unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    #[serde(default)]
    pub meta: ThemeMeta,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl ThemeDescriptor {
    /// Decode a theme from JSON text. The text must hold a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or a non-object.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.meta
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNTITLED)
    }

    /// String values of the `palette` object, for swatch previews.
    #[must_use]
    pub fn preview_colors(&self) -> Vec<String> {
        let Some(Value::Object(palette)) = self.properties.get("palette") else {
            return Vec::new();
        };
        palette
            .values()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }
}
