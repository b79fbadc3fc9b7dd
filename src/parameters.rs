//! Rewrites applied to `parameters` lists.

use serde_json::{json, Value};

use crate::error::EnhanceError;
use crate::types::{QueryParameter, INCLUDE_PARAM};
use crate::walker::{walk_document, Descend};

const PARAMETERS: &str = "parameters";

/// Give every `array`-typed parameter lacking `items` an `items: {type: string}`.
///
/// Parameters that already declare `items` are left untouched. A `parameters`
/// key whose value is not an array is walked like any other object.
pub fn normalize_parameters(doc: &mut Value) {
    walk_document(doc, &[PARAMETERS], |parent, key| {
        let Some(Value::Array(params)) = parent.get_mut(key) else {
            return Descend::Yes;
        };

        for param in params.iter_mut().filter_map(Value::as_object_mut) {
            let is_array = param.get("type").and_then(Value::as_str) == Some("array");
            if is_array && !param.contains_key("items") {
                let name = param.get("name").and_then(Value::as_str).unwrap_or_default();
                tracing::debug!(name, "adding string items to array parameter");
                param.insert("items".to_string(), json!({ "type": "string" }));
            }
        }
        Descend::No
    });
}

/// Append the `include` and `filter[field_path][value]` query parameters to
/// every parameter list.
///
/// `include` is only added when the list has none. The filter parameter is
/// appended unconditionally, so running this twice duplicates it.
///
/// # Errors
///
/// Returns `EnhanceError::Serialize` if a parameter descriptor cannot be
/// converted into a document node.
pub fn add_query_parameters(doc: &mut Value) -> Result<(), EnhanceError> {
    let include = QueryParameter::include().to_value()?;
    let filter = QueryParameter::filter().to_value()?;

    walk_document(doc, &[PARAMETERS], |parent, key| {
        let Some(Value::Array(params)) = parent.get_mut(key) else {
            return Descend::Yes;
        };

        if !params.iter().any(is_include) {
            params.push(include.clone());
        }
        params.push(filter.clone());
        tracing::debug!(count = params.len(), "augmented parameter list");
        Descend::No
    });
    Ok(())
}

fn is_include(param: &Value) -> bool {
    param.get("name").and_then(Value::as_str) == Some(INCLUDE_PARAM)
}
