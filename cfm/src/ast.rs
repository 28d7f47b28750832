//! Node tree produced by the CFM markup parser.
//!
//! DESIGN
//! ======
//! The parser emits loosely-typed JSON objects tagged by a `type` string.
//! Decoding here is deliberately lenient: a tag this build does not know
//! becomes [`AstNode::Unknown`] instead of an error, so a newer parser can
//! feed an older renderer and still get a visible (if degraded) message.

#[cfg(test)]
#[path = "ast_test.rs"]
mod ast_test;

use serde_json::{Map, Value};

/// Error returned when a JSON value cannot be read as a CFM node.
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    /// A node position held something other than an object or `null`.
    #[error("ast node is not an object: {0}")]
    NotAnObject(String),
    /// A node object carried no string `type` tag.
    #[error("ast node has no `type` tag")]
    MissingType,
    /// The input text was not valid JSON.
    #[error("invalid ast json: {0}")]
    Json(#[from] serde_json::Error),
}

/// One node of a parsed CFM document.
///
/// Container bodies are always vectors: a single nested node decodes to a
/// one-element vector and an absent body decodes to `[Null]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    /// Absent node or explicit `null`.
    Null,
    Newline,
    /// One source line; renderers append a break after its content.
    Line(Vec<AstNode>),
    Text(String),
    Marquee(Vec<AstNode>),
    Italic(Vec<AstNode>),
    Bold(Vec<AstNode>),
    Strike(Vec<AstNode>),
    Url {
        url: String,
        /// Display text, if the author supplied one.
        alt: Option<String>,
    },
    /// Fully-qualified timeline id (`<localID>@<domain>`).
    Timeline(String),
    Spoiler(Vec<AstNode>),
    Quote(Vec<AstNode>),
    Tag(String),
    Mention(String),
    /// Emoji shortcode without the surrounding colons.
    Emoji(String),
    Details {
        summary: Vec<AstNode>,
        body: Vec<AstNode>,
    },
    InlineCode(String),
    Image {
        url: String,
        alt: String,
    },
    CodeBlock {
        lang: String,
        body: String,
    },
    /// URL of an emoji pack resource.
    EmojiPack(String),
    Heading {
        /// Always within `1..=6`.
        level: u8,
        body: Vec<AstNode>,
    },
    /// A tag this build does not recognize. Holds the raw tag.
    Unknown(String),
}

impl AstNode {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// The parser's `type` tag for this node.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Newline => "newline",
            Self::Line(_) => "Line",
            Self::Text(_) => "Text",
            Self::Marquee(_) => "Marquee",
            Self::Italic(_) => "Italic",
            Self::Bold(_) => "Bold",
            Self::Strike(_) => "Strike",
            Self::Url { .. } => "URL",
            Self::Timeline(_) => "Timeline",
            Self::Spoiler(_) => "Spoiler",
            Self::Quote(_) => "Quote",
            Self::Tag(_) => "Tag",
            Self::Mention(_) => "Mention",
            Self::Emoji(_) => "Emoji",
            Self::Details { .. } => "Details",
            Self::InlineCode(_) => "InlineCode",
            Self::Image { .. } => "Image",
            Self::CodeBlock { .. } => "CodeBlock",
            Self::EmojiPack(_) => "EmojiPack",
            Self::Heading { .. } => "Heading",
            Self::Unknown(kind) => kind,
        }
    }

    /// Decode one node from the parser's JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::NotAnObject`] for scalars and arrays in a node
    /// position and [`AstError::MissingType`] for objects without a tag.
    pub fn from_json(value: &Value) -> Result<Self, AstError> {
        let object = match value {
            Value::Null => return Ok(Self::Null),
            Value::Object(object) => object,
            other => return Err(AstError::NotAnObject(other.to_string())),
        };
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(AstError::MissingType)?;
        let body = object.get("body");

        let node = match kind {
            "newline" => Self::Newline,
            "Line" => Self::Line(children(body)?),
            "Text" => Self::Text(text(body)),
            "Marquee" => Self::Marquee(children(body)?),
            "Italic" => Self::Italic(children(body)?),
            "Bold" => Self::Bold(children(body)?),
            "Strike" => Self::Strike(children(body)?),
            "URL" => Self::Url {
                url: text(body),
                alt: optional_text(object, "alt"),
            },
            "Timeline" => Self::Timeline(text(body)),
            "Spoiler" => Self::Spoiler(children(body)?),
            "Quote" => Self::Quote(children(body)?),
            "Tag" => Self::Tag(text(body)),
            "Mention" => Self::Mention(text(body)),
            "Emoji" => Self::Emoji(text(body)),
            "Details" => Self::Details {
                summary: children(object.get("summary"))?,
                body: children(body)?,
            },
            "InlineCode" => Self::InlineCode(text(body)),
            "Image" => Self::Image {
                url: optional_text(object, "url").unwrap_or_else(|| text(body)),
                alt: text(object.get("alt")),
            },
            "CodeBlock" => Self::CodeBlock {
                lang: text(object.get("lang")),
                body: text(body),
            },
            "EmojiPack" => Self::EmojiPack(text(body)),
            "Heading" => Self::Heading {
                level: heading_level(object.get("level")),
                body: children(body)?,
            },
            other => Self::Unknown(other.to_owned()),
        };
        Ok(node)
    }
}

/// Decode a whole document. A bare node is treated as a one-node document.
///
/// # Errors
///
/// Propagates the first [`AstError`] met while decoding nodes.
pub fn document_from_json(value: &Value) -> Result<Vec<AstNode>, AstError> {
    match value {
        Value::Array(items) => items.iter().map(AstNode::from_json).collect(),
        other => Ok(vec![AstNode::from_json(other)?]),
    }
}

/// Decode a document from serialized JSON text.
///
/// # Errors
///
/// Returns [`AstError::Json`] for malformed JSON, otherwise as
/// [`document_from_json`].
pub fn document_from_json_str(raw: &str) -> Result<Vec<AstNode>, AstError> {
    let value: Value = serde_json::from_str(raw)?;
    document_from_json(&value)
}

fn children(body: Option<&Value>) -> Result<Vec<AstNode>, AstError> {
    match body {
        None | Some(Value::Null) => Ok(vec![AstNode::Null]),
        Some(Value::Array(items)) => items.iter().map(AstNode::from_json).collect(),
        // Some parser versions inline plain text instead of a Text node.
        Some(Value::String(raw)) => Ok(vec![AstNode::Text(raw.clone())]),
        Some(node) => Ok(vec![AstNode::from_json(node)?]),
    }
}

fn text(body: Option<&Value>) -> String {
    match body {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(raw)) => raw.clone(),
        Some(other) => other.to_string(),
    }
}

fn optional_text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key) {
        Some(Value::String(raw)) if !raw.is_empty() => Some(raw.clone()),
        _ => None,
    }
}

fn heading_level(raw: Option<&Value>) -> u8 {
    let level = raw.and_then(Value::as_u64).unwrap_or(1).clamp(1, 6);
    u8::try_from(level).unwrap_or(1)
}
