//! Syntax highlighting for fenced code blocks.
//!
//! DESIGN
//! ======
//! Highlighting happens during the render pass so the view tree carries
//! styled spans and the host only paints them. The grammar and theme sets
//! load once per process. A language with no matching grammar yields
//! `None` and the host shows the code as plain text.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Bundled theme the spans are colored with.
pub const THEME_NAME: &str = "InspiredGitHub";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// A run of code sharing one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSpan {
    pub text: String,
    /// Foreground as `#rrggbb`.
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
}

impl CodeSpan {
    fn from_style(style: Style, text: &str) -> Self {
        let fg = style.foreground;
        Self {
            text: text.to_owned(),
            color: (fg.a > 0).then(|| format!("#{:02x}{:02x}{:02x}", fg.r, fg.g, fg.b)),
            bold: style.font_style.contains(FontStyle::BOLD),
            italic: style.font_style.contains(FontStyle::ITALIC),
        }
    }

    fn same_style(&self, other: &Self) -> bool {
        self.color == other.color && self.bold == other.bold && self.italic == other.italic
    }

    /// Inline CSS for the span.
    #[must_use]
    pub fn css(&self) -> String {
        let mut rules = Vec::new();
        if let Some(color) = &self.color {
            rules.push(format!("color: {color}"));
        }
        if self.bold {
            rules.push("font-weight: bold".to_owned());
        }
        if self.italic {
            rules.push("font-style: italic".to_owned());
        }
        rules.join("; ")
    }
}

/// Grammar for a fence language, tried as token, then extension, then name.
fn syntax_for_lang(lang: &str) -> Option<&'static SyntaxReference> {
    let lang = lang.trim();
    if lang.is_empty() {
        return None;
    }
    SYNTAXES
        .find_syntax_by_token(lang)
        .or_else(|| SYNTAXES.find_syntax_by_extension(lang))
        .or_else(|| SYNTAXES.find_syntax_by_name(lang))
}

fn theme() -> Option<&'static Theme> {
    THEMES.themes.get(THEME_NAME)
}

/// Highlight `code` as `lang`. `None` when the language is unknown or the
/// grammar fails partway; the caller falls back to plain text.
#[must_use]
pub fn highlight_code(code: &str, lang: &str) -> Option<Vec<CodeSpan>> {
    let syntax = syntax_for_lang(lang)?;
    let Some(theme) = theme() else {
        log::error!("bundled theme {THEME_NAME} is missing");
        return None;
    };
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut spans: Vec<CodeSpan> = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = match highlighter.highlight_line(line, &SYNTAXES) {
            Ok(ranges) => ranges,
            Err(err) => {
                log::debug!("highlighting {lang} failed: {err}");
                return None;
            }
        };
        for (style, text) in ranges {
            let span = CodeSpan::from_style(style, text);
            match spans.last_mut() {
                Some(last) if last.same_style(&span) => last.text.push_str(&span.text),
                _ => spans.push(span),
            }
        }
    }
    Some(spans)
}
