//! CFM document model shared by the renderer and the browser client.
//!
//! The markup parser itself lives outside this workspace. This crate owns the
//! shape of what it produces (a JSON node tree tagged by `type`) and the
//! recovery path used when parsing fails, so renderers always receive a
//! well-formed document.

mod ast;
mod parser;

pub use ast::{AstError, AstNode, document_from_json, document_from_json_str};
pub use parser::{JsonAstParser, MarkupParser, ParseError, fallback_document, parse_or_fallback};
