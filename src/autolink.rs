//! Auto-link extraction over rendered scan text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs after the visitor, over the text it collected. Bare URLs found there
//! become embedded players (known media hosts) or link summary cards under
//! the message body. Code, images, and emoji packs are stripped first so
//! URLs inside them are not surfaced twice.

#[cfg(test)]
#[path = "autolink_test.rs"]
mod autolink_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::compile;

/// Preprocessing rules applied in order before URL extraction.
const STRIP_RULES: [(&str, &str); 8] = [
    // Markdown images.
    (r"!\[[^\]]*\]\([^)]*\)", ""),
    // Fenced code blocks.
    (r"(?s)```.*?```", ""),
    // Inline code spans.
    (r"`[^`\n]*`", ""),
    // Raw image tags.
    (r"(?i)<img\b[^>]*>", ""),
    // Social pseudo-tags, contents included.
    (r"(?is)<social\b[^>]*>.*?</social>", ""),
    // Self-closing emoji pack tags.
    (r"(?i)<emojipack\b[^>]*/>", ""),
    // Markdown links keep only their target.
    (r"\[[^\]]*\]\(([^)\s]*)\)", "${1}"),
    // Anchor attributes go; anchor text stays.
    (r"(?i)<a\s[^>]*>", "<a>"),
];

static STRIP_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    STRIP_RULES
        .iter()
        .filter_map(|(pattern, replacement)| compile(pattern).map(|re| (re, *replacement)))
        .collect()
});

// Character classes are spelled out in ASCII. `\w` is Unicode-aware and
// would run a URL into CJK text that follows it without a space.
static BARE_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"https?://[A-Za-z0-9_/:%#$&?()~.=+\-]+"));

static YOUTUBE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"^https?://(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^#\s]*&)?v=|shorts/|live/)|youtu\.be/)([A-Za-z0-9_-]+)",
    )
});

static SPOTIFY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(
        r"^https?://open\.spotify\.com/(?:intl-[A-Za-z0-9_-]+/)?(track|album|playlist)/([A-Za-z0-9_]+)",
    )
});

static APPLE_MUSIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^https?://music\.apple\.com/(\S+)$"));

static SOUNDCLOUD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    compile(r"^https?://(?:www\.|m\.)?soundcloud\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_-]+")
});

/// How many links the auto-link pass surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoLinkConfig {
    /// `None` surfaces every link.
    pub limit: Option<usize>,
}

impl AutoLinkConfig {
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<String> {
        extract_links(text, self.limit)
    }
}

/// Apply the preprocessing rules to scan text.
#[must_use]
pub fn strip_for_scan(text: &str) -> String {
    STRIP_PATTERNS
        .iter()
        .fold(text.to_owned(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// Bare URLs in first-appearance order, duplicates kept, up to `limit`.
#[must_use]
pub fn extract_links(text: &str, limit: Option<usize>) -> Vec<String> {
    let Some(re) = BARE_URL.as_ref() else {
        return Vec::new();
    };
    let stripped = strip_for_scan(text);
    re.find_iter(&stripped)
        .map(|found| found.as_str().to_owned())
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotifyKind {
    Track,
    Album,
    Playlist,
}

impl SpotifyKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Playlist => "playlist",
        }
    }

    fn from_path(raw: &str) -> Option<Self> {
        match raw {
            "track" => Some(Self::Track),
            "album" => Some(Self::Album),
            "playlist" => Some(Self::Playlist),
            _ => None,
        }
    }
}

/// What to show under the body for one extracted URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Embed {
    YouTube { video_id: String },
    Spotify { kind: SpotifyKind, id: String },
    AppleMusic { path: String },
    SoundCloud { url: String },
    /// No known player; show a fetched link summary.
    Summary { url: String },
}

impl Embed {
    /// Player iframe source, or `None` for summary cards.
    #[must_use]
    pub fn player_url(&self) -> Option<String> {
        match self {
            Self::YouTube { video_id } => Some(format!("https://www.youtube.com/embed/{video_id}")),
            Self::Spotify { kind, id } => Some(format!(
                "https://open.spotify.com/embed/{}/{id}",
                kind.as_str()
            )),
            Self::AppleMusic { path } => Some(format!("https://embed.music.apple.com/{path}")),
            Self::SoundCloud { url } => {
                let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
                Some(format!("https://w.soundcloud.com/player/?url={encoded}"))
            }
            Self::Summary { .. } => None,
        }
    }

    /// Fixed player height in CSS pixels. `None` means a 16:9 frame.
    #[must_use]
    pub fn frame_height(&self) -> Option<u32> {
        match self {
            Self::YouTube { .. } | Self::Summary { .. } => None,
            Self::Spotify {
                kind: SpotifyKind::Track,
                ..
            } => Some(152),
            Self::Spotify { .. } => Some(352),
            Self::AppleMusic { path } if path.contains("i=") => Some(175),
            Self::AppleMusic { .. } => Some(450),
            Self::SoundCloud { .. } => Some(166),
        }
    }
}

/// Classify `url`. First match wins: YouTube, Spotify, Apple Music,
/// SoundCloud, then a summary card.
#[must_use]
pub fn classify_embed(url: &str) -> Embed {
    if let Some(video_id) = capture(&YOUTUBE, url, 1) {
        return Embed::YouTube { video_id };
    }
    if let Some(caps) = SPOTIFY.as_ref().and_then(|re| re.captures(url)) {
        let kind = caps.get(1).and_then(|m| SpotifyKind::from_path(m.as_str()));
        if let (Some(kind), Some(id)) = (kind, caps.get(2)) {
            return Embed::Spotify {
                kind,
                id: id.as_str().to_owned(),
            };
        }
    }
    if let Some(path) = capture(&APPLE_MUSIC, url, 1) {
        return Embed::AppleMusic { path };
    }
    if SOUNDCLOUD.as_ref().is_some_and(|re| re.is_match(url)) {
        return Embed::SoundCloud {
            url: url.to_owned(),
        };
    }
    Embed::Summary {
        url: url.to_owned(),
    }
}

fn capture(pattern: &LazyLock<Option<Regex>>, url: &str, group: usize) -> Option<String> {
    let re = pattern.as_ref()?;
    Some(re.captures(url)?.get(group)?.as_str().to_owned())
}
