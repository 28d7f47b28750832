//! Per-invocation render settings.

use crate::emoji::EmojiDictionary;

/// Settings for one render pass. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Collapse all line structure onto one line. Honored by the Lite renderer.
    pub force_oneline: bool,
    /// Stop after this many lines, ending with `…`. Honored by the Lite
    /// renderer when `force_oneline` is off.
    pub line_limit: Option<usize>,
    pub emoji_dict: EmojiDictionary,
}

impl RenderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn force_oneline(mut self, enabled: bool) -> Self {
        self.force_oneline = enabled;
        self
    }

    #[must_use]
    pub fn line_limit(mut self, limit: Option<usize>) -> Self {
        self.line_limit = limit;
        self
    }

    #[must_use]
    pub fn emoji_dict(mut self, dict: EmojiDictionary) -> Self {
        self.emoji_dict = dict;
        self
    }
}
