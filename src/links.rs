//! Classification helpers for inline nodes: profile links, color tags,
//! mentions, and timeline ids.
//!
//! DESIGN
//! ======
//! Pattern tables are ordered and first-match-wins. Entries are keyed by
//! distinct hosts, so no URL is expected to match two of them.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::compile;

/// Prefix of an in-network content identifier.
pub const CCID_PREFIX: &str = "con1";
/// Length of an in-network content identifier, prefix included.
pub const CCID_LEN: usize = 42;

/// Services whose profile URLs render as labeled chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WellKnownService {
    Twitter,
    X,
    YouTube,
    GitHub,
    SoundCloud,
    Instagram,
    Twitch,
    Bandcamp,
}

impl WellKnownService {
    /// Match order for profile URL classification.
    pub const ALL: [Self; 8] = [
        Self::Twitter,
        Self::X,
        Self::YouTube,
        Self::GitHub,
        Self::SoundCloud,
        Self::Instagram,
        Self::Twitch,
        Self::Bandcamp,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::X => "X",
            Self::YouTube => "YouTube",
            Self::GitHub => "GitHub",
            Self::SoundCloud => "SoundCloud",
            Self::Instagram => "Instagram",
            Self::Twitch => "Twitch",
            Self::Bandcamp => "Bandcamp",
        }
    }

    /// Profile URL pattern; capture group 1 is the handle.
    fn pattern(self) -> &'static str {
        match self {
            Self::Twitter => r"^https://twitter\.com/([^/?#]+)/?$",
            Self::X => r"^https://x\.com/([^/?#]+)/?$",
            Self::YouTube => r"^https://(?:www\.)?youtube\.com/(@[^/?#]+)/?$",
            Self::GitHub => r"^https://github\.com/([^/?#]+)/?$",
            Self::SoundCloud => r"^https://soundcloud\.com/([^/?#]+)/?$",
            Self::Instagram => r"^https://(?:www\.)?instagram\.com/([^/?#]+)/?$",
            Self::Twitch => r"^https://(?:www\.)?twitch\.tv/([^/?#]+)/?$",
            Self::Bandcamp => r"^https://([^./?#]+)\.bandcamp\.com/?$",
        }
    }
}

/// A URL recognized as a profile on a [`WellKnownService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceLink {
    pub service: WellKnownService,
    pub handle: String,
    pub href: String,
}

static PROFILE_PATTERNS: LazyLock<Vec<(WellKnownService, Regex)>> = LazyLock::new(|| {
    WellKnownService::ALL
        .into_iter()
        .filter_map(|service| compile(service.pattern()).map(|re| (service, re)))
        .collect()
});

static TAG_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?:^|[^0-9A-Fa-f])([0-9A-Fa-f]{6})$"));

/// Classify `url` as a well-known profile link.
#[must_use]
pub fn classify_profile_url(url: &str) -> Option<ServiceLink> {
    PROFILE_PATTERNS.iter().find_map(|(service, re)| {
        let handle = re.captures(url)?.get(1)?.as_str();
        Some(ServiceLink {
            service: *service,
            handle: handle.to_owned(),
            href: url.to_owned(),
        })
    })
}

/// Swatch color for a tag whose body ends in exactly six hex digits.
///
/// Returns `#rrggbb` with the digits as written.
#[must_use]
pub fn tag_color(body: &str) -> Option<String> {
    let re = TAG_COLOR.as_ref()?;
    let hex = re.captures(body)?.get(1)?.as_str();
    Some(format!("#{hex}"))
}

/// Whether a mention body has the shape of an in-network content id.
///
/// Prefix and length are the whole test; there is no checksum. Ids are
/// ASCII, so the length is in bytes.
#[must_use]
pub fn is_ccid(body: &str) -> bool {
    body.len() == CCID_LEN && body.is_ascii() && body.starts_with(CCID_PREFIX)
}

/// Split `<localID>@<domain>` into its parts.
#[must_use]
pub fn split_timeline_id(fqid: &str) -> Option<(&str, &str)> {
    let (local, domain) = fqid.split_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some((local, domain))
}
