//! Endpoint settings for network-backed enrichments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;

pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const DEFAULT_SUMMARY_ENDPOINT: &str = "https://ariadne.concrnt.net/summary";

/// Where chips, cards, and summaries fetch from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path of the federation REST API, without a trailing slash.
    pub api_base: String,
    /// Link-summary service; receives the target as a `url` query parameter.
    pub summary_endpoint: String,
    /// Image resize proxy base. `None` loads images directly.
    pub image_proxy: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            summary_endpoint: DEFAULT_SUMMARY_ENDPOINT.to_owned(),
            image_proxy: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = trim_base(base.into());
        self
    }

    #[must_use]
    pub fn with_image_proxy(mut self, base: impl Into<String>) -> Self {
        self.image_proxy = Some(trim_base(base.into()));
        self
    }
}

fn trim_base(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

/// Config from context, or the defaults.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}
