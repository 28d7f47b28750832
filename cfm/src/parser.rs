//! Parser boundary and parse-failure recovery.
//!
//! ERROR HANDLING
//! ==============
//! Parsing is the one step in the rendering pipeline that is expected to
//! fail on user input. Failures are caught here and turned into a two-node
//! diagnostic document so callers never have to thread an error into a view.

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;

use crate::ast::{AstError, AstNode, document_from_json_str};

/// Error returned by a [`MarkupParser`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The parser rejected the markup.
    #[error("{0}")]
    Syntax(String),
    /// The parser produced output that is not a CFM node tree.
    #[error(transparent)]
    Ast(#[from] AstError),
}

/// Anything that turns a message body into a CFM document.
pub trait MarkupParser {
    /// Parse `text` into top-level nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the markup cannot be parsed.
    fn parse(&self, text: &str) -> Result<Vec<AstNode>, ParseError>;
}

impl<F> MarkupParser for F
where
    F: Fn(&str) -> Result<Vec<AstNode>, ParseError>,
{
    fn parse(&self, text: &str) -> Result<Vec<AstNode>, ParseError> {
        self(text)
    }
}

/// Reads bodies that already carry a serialized node tree.
///
/// Used when the markup parser runs elsewhere (a worker, the server) and
/// hands over its output as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonAstParser;

impl MarkupParser for JsonAstParser {
    fn parse(&self, text: &str) -> Result<Vec<AstNode>, ParseError> {
        Ok(document_from_json_str(text)?)
    }
}

/// Document shown in place of a body that failed to parse.
#[must_use]
pub fn fallback_document(text: &str, err: &ParseError) -> Vec<AstNode> {
    vec![AstNode::text(text), AstNode::Text(format!("error: {err}"))]
}

/// Parse `text`, substituting [`fallback_document`] on failure.
pub fn parse_or_fallback<P>(parser: &P, text: &str) -> Vec<AstNode>
where
    P: MarkupParser + ?Sized,
{
    match parser.parse(text) {
        Ok(document) => document,
        Err(err) => {
            log::warn!("cfm parse failed, rendering fallback: {err}");
            fallback_document(text, &err)
        }
    }
}
