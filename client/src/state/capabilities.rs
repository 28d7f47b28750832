//! Side-effecting capabilities injected into the renderer.
//!
//! DESIGN
//! ======
//! Clipboard writes, the media viewer, emoji-pack import, image URL rewriting,
//! and the markup parser are host concerns. Components read them from context
//! instead of reaching for browser globals, so a host can swap any of them
//! (tests, native shells, a worker-side parser) without touching views.

use std::fmt;
use std::sync::Arc;

use cfm::MarkupParser;
use leptos::prelude::use_context;

use crate::util::image::ImageProxy;
use crate::util::js_parser::JsCfmParser;
use crate::util::{clipboard, ui_persistence};

/// A fire-and-forget action keyed by a string (URL, text, pack source).
pub type Action = Arc<dyn Fn(&str) + Send + Sync>;

/// Parser shared by every renderer instance under a context.
pub type SharedParser = Arc<dyn MarkupParser + Send + Sync>;

#[derive(Clone)]
pub struct RichTextCapabilities {
    pub parser: SharedParser,
    /// Open the media viewer on an image's original URL.
    pub open_media: Action,
    pub copy_text: Action,
    /// Import an emoji pack by its source URL.
    pub import_emoji_pack: Action,
    pub image: ImageProxy,
}

impl RichTextCapabilities {
    /// Browser defaults with images routed through `image`.
    #[must_use]
    pub fn with_image_proxy(image: ImageProxy) -> Self {
        Self {
            parser: Arc::new(JsCfmParser),
            open_media: Arc::new(open_in_new_tab),
            copy_text: Arc::new(clipboard::copy_in_background),
            import_emoji_pack: Arc::new(|src: &str| {
                ui_persistence::import_emoji_pack(src);
            }),
            image,
        }
    }
}

impl Default for RichTextCapabilities {
    fn default() -> Self {
        Self::with_image_proxy(ImageProxy::default())
    }
}

impl fmt::Debug for RichTextCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextCapabilities")
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("failed to open media viewer: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Capabilities from context, or the browser defaults with the configured
/// image proxy.
pub fn use_capabilities() -> RichTextCapabilities {
    use_context::<RichTextCapabilities>().unwrap_or_else(|| {
        let config = crate::state::config::use_client_config();
        RichTextCapabilities::with_image_proxy(ImageProxy::new(config.image_proxy))
    })
}
