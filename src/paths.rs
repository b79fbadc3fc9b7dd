//! Top-level document cleanup: security requirements and unsafe path operations.

use serde_json::{Map, Value};

use crate::error::EnhanceError;
use crate::types::{json_type_name, REMOVED_METHODS};

/// Remove the top-level `security` field, if any.
pub fn strip_security(doc: &mut Value) {
    if let Some(root) = doc.as_object_mut() {
        if root.shift_remove("security").is_some() {
            tracing::debug!("removed top-level security requirements");
        }
    }
}

/// Strip `post`, `patch` and `delete` from every path item, then drop path
/// entries that became empty or whose key does not start with `/`.
///
/// # Errors
///
/// Returns `EnhanceError::MissingSection` if the document has no `paths`,
/// or `EnhanceError::InvalidSection` if `paths` is not an object.
pub fn clean_paths(doc: &mut Value) -> Result<(), EnhanceError> {
    let paths = section_mut(doc, "paths")?;

    let mut doomed = Vec::new();
    for (key, item) in paths.iter_mut() {
        let emptied = match item {
            Value::Object(operations) => {
                for method in REMOVED_METHODS {
                    operations.shift_remove(*method);
                }
                operations.is_empty()
            }
            _ => false,
        };
        if emptied || !key.starts_with('/') {
            doomed.push(key.clone());
        }
    }

    for key in doomed {
        tracing::debug!(path = %key, "removing path");
        paths.shift_remove(&key);
    }

    Ok(())
}

/// Look up a required top-level object section.
pub(crate) fn section_mut<'a>(
    doc: &'a mut Value,
    key: &str,
) -> Result<&'a mut Map<String, Value>, EnhanceError> {
    let root = match doc {
        Value::Object(root) => root,
        other => {
            return Err(EnhanceError::InvalidSection {
                key: "(root)".to_string(),
                actual: json_type_name(other).to_string(),
            })
        }
    };

    match root.get_mut(key) {
        Some(Value::Object(section)) => Ok(section),
        Some(other) => Err(EnhanceError::InvalidSection {
            key: key.to_string(),
            actual: json_type_name(other).to_string(),
        }),
        None => Err(EnhanceError::MissingSection {
            key: key.to_string(),
        }),
    }
}
