//! Clipboard writes. Browser-only; SSR reports failure.
//!
//! The browser API is promise based, so a write only counts once the
//! promise settles.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// Write `text` to the system clipboard and wait for the browser to accept it.
///
/// # Errors
///
/// Returns a message when no clipboard is reachable or the write is rejected
/// (permission denied, document not focused).
pub async fn copy_text(text: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window
            .navigator()
            .clipboard()
            .ok_or_else(|| "clipboard unavailable".to_owned())?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .map(|_| ())
            .map_err(|err| format!("clipboard write rejected: {err:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available on server".to_owned())
    }
}

/// Start a clipboard write from a sync handler. Failures are logged once the
/// browser answers.
pub fn copy_in_background(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let text = text.to_owned();
        leptos::task::spawn_local(async move {
            match copy_text(text).await {
                Ok(()) => log::debug!("copied to clipboard"),
                Err(err) => log::warn!("copy failed: {err}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        log::debug!("clipboard unavailable");
    }
}
