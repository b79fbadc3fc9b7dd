//! Text rendering of the rewritten document.
//!
//! Some fixes must also reach inside string values such as existing `$ref`
//! pointers, so they are applied to the serialized text instead of the tree.

use serde_json::Value;

use crate::error::EnhanceError;
use crate::types::DATA_SUFFIX;

/// Literal substitutions applied before slashes are unescaped.
const BEFORE_UNESCAPE: &[(&str, &str)] = &[("language_reference", "string")];

/// Literal substitutions applied after slashes are unescaped.
const AFTER_UNESCAPE: &[(&str, &str)] = &[
    ("/properties/data", DATA_SUFFIX),
    ("\"type\": \"link_url\"", "\"type\": \"string\""),
];

/// Serialize a document with 2-space indentation.
///
/// # Errors
///
/// Returns `EnhanceError::Serialize` if the tree cannot be rendered.
pub fn serialize(doc: &Value) -> Result<String, EnhanceError> {
    serde_json::to_string_pretty(doc).map_err(|source| EnhanceError::Serialize { source })
}

/// Apply the fixed literal substitutions to serialized document text.
///
/// Escaped slashes (`\/`) are unescaped between the two substitution sets.
pub fn post_process(text: &str) -> String {
    let text = replace_all(text.to_string(), BEFORE_UNESCAPE);
    replace_all(unescape_slashes(&text), AFTER_UNESCAPE)
}

fn replace_all(text: String, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(text, |acc, &(from, to)| acc.replace(from, to))
}

/// Turn `\/` escapes into `/`, leaving escaped backslashes (`\\`) intact.
///
/// A slash is escaped only when an odd number of backslashes precedes it.
fn unescape_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0usize;
    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '/' if backslashes % 2 == 1 => {
                out.extend(std::iter::repeat('\\').take(backslashes - 1));
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
            }
        }
        if c != '\\' {
            out.push(c);
        }
    }
    out.extend(std::iter::repeat('\\').take(backslashes));
    out
}
