//! Image URL rewriting through an optional resize proxy.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Display cap for inline images in the Full renderer, in CSS pixels.
pub const FULL_MAX_HEIGHT: u32 = 250;
/// Display cap for Lite thumbnails, in CSS pixels.
pub const THUMBNAIL_MAX_HEIGHT: u32 = 80;

/// Rewrites image URLs to a resize proxy when one is configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageProxy {
    base: Option<String>,
}

impl ImageProxy {
    #[must_use]
    pub fn new(base: Option<String>) -> Self {
        Self { base }
    }

    /// Source URL for displaying `url` at most `max_height` pixels tall.
    ///
    /// Inline `data:` URLs and URLs already under the proxy pass through.
    #[must_use]
    pub fn transform(&self, url: &str, max_height: u32) -> String {
        match &self.base {
            Some(base) if !url.starts_with("data:") && !url.starts_with(base.as_str()) => {
                // Request twice the CSS height for high-density screens.
                format!("{base}/{}x/{url}", max_height * 2)
            }
            _ => url.to_owned(),
        }
    }
}

pub fn image_max_height(thumbnail: bool) -> u32 {
    if thumbnail {
        THUMBNAIL_MAX_HEIGHT
    } else {
        FULL_MAX_HEIGHT
    }
}
