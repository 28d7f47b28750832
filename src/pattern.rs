//! Shared regex compilation for the classification tables.

use regex::Regex;

/// Compile a built-in pattern, logging instead of panicking on failure.
///
/// A pattern that fails to compile disables only the rule it belongs to.
pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::error!("built-in pattern failed to compile: {pattern}: {err}");
            None
        }
    }
}
