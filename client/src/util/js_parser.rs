//! Binding to the JavaScript CFM parser.
//!
//! The page loads the parser as a global `cfm` object. Its `parse` output is
//! serialized to JSON and decoded by `cfm::document_from_json_str`.
//!
//! TRADE-OFFS
//! ==========
//! The JSON round trip costs a copy per message but keeps the decoder shared
//! with the server-rendered path. Without the binding (SSR), the body renders
//! as one plain text node.

use cfm::{AstNode, MarkupParser, ParseError};

#[cfg(feature = "hydrate")]
mod binding {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = cfm, js_name = parse)]
        pub fn parse(text: &str) -> Result<JsValue, JsValue>;
    }
}

/// Parser backed by the page's `cfm.parse` function.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsCfmParser;

impl MarkupParser for JsCfmParser {
    fn parse(&self, text: &str) -> Result<Vec<AstNode>, ParseError> {
        #[cfg(feature = "hydrate")]
        {
            let value = binding::parse(text).map_err(|err| ParseError::Syntax(js_error_message(&err)))?;
            let json = js_sys::JSON::stringify(&value)
                .map_err(|err| ParseError::Syntax(js_error_message(&err)))?;
            Ok(cfm::document_from_json_str(&String::from(json))?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(vec![AstNode::Text(text.to_owned())])
        }
    }
}

#[cfg(feature = "hydrate")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| "parse failed".to_owned())
}
