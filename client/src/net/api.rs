//! REST helpers for chip, card, and summary enrichment.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since enrichment is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a failed
//! lookup leaves the placeholder in place without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{EmojiPackInfo, LinkSummary, TimelineInfo, UserProfile};
#[cfg(feature = "hydrate")]
use super::types::{ApiResponse, Record};
use crate::state::config::ClientConfig;

/// Semantic id under which users publish their display profile.
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_SEMANTIC_ID: &str = "world.concrnt.p";

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(config: &ClientConfig, ccid: &str) -> String {
    format!("{}/profile/{ccid}/{PROFILE_SEMANTIC_ID}", config.api_base)
}

#[cfg(any(test, feature = "hydrate"))]
fn timeline_endpoint(config: &ClientConfig, timeline_id: &str) -> String {
    format!("{}/timeline/{timeline_id}", config.api_base)
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_endpoint(config: &ClientConfig, url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    format!("{}?url={encoded}", config.summary_endpoint)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the display profile for `ccid`.
/// Returns `None` on failure or on the server.
pub async fn fetch_profile(config: &ClientConfig, ccid: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let url = profile_endpoint(config, ccid);
        match get_json::<ApiResponse<Record<UserProfile>>>(&url, "profile").await {
            Ok(resp) => Some(resp.content.parsed_doc.body),
            Err(err) => {
                log::debug!("profile {ccid} unresolved: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, ccid);
        None
    }
}

/// Fetch timeline metadata for a fully-qualified timeline id.
pub async fn fetch_timeline(config: &ClientConfig, timeline_id: &str) -> Option<TimelineInfo> {
    #[cfg(feature = "hydrate")]
    {
        let url = timeline_endpoint(config, timeline_id);
        match get_json::<ApiResponse<Record<TimelineInfo>>>(&url, "timeline").await {
            Ok(resp) => Some(resp.content.parsed_doc.body),
            Err(err) => {
                log::debug!("timeline {timeline_id} unresolved: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, timeline_id);
        None
    }
}

/// Fetch a link preview from the summary service.
pub async fn fetch_summary(config: &ClientConfig, url: &str) -> Option<LinkSummary> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = summary_endpoint(config, url);
        match get_json::<LinkSummary>(&endpoint, "summary").await {
            Ok(summary) => Some(summary),
            Err(err) => {
                log::debug!("no summary for {url}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, url);
        None
    }
}

/// Fetch an emoji pack manifest from its source URL.
///
/// # Errors
///
/// Returns an error string if the request fails or the manifest is not JSON.
pub async fn fetch_emoji_pack(src: &str) -> Result<EmojiPackInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<EmojiPackInfo>(src, "emoji pack").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = src;
        Err("not available on server".to_owned())
    }
}
