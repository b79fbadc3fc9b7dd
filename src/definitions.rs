//! Lifting inline `data` relationship schemas into their own definitions.

use serde_json::{json, Value};

use crate::error::EnhanceError;
use crate::paths::section_mut;
use crate::types::DATA_SUFFIX;

/// Name of the definition a type's inline `data` schema is moved to.
pub fn data_definition_name(type_name: &str) -> String {
    format!("{type_name}{DATA_SUFFIX}")
}

/// For every definition whose `properties.data` is an inline object, move that
/// object to a new `<name>--data` definition and point `properties.data` at it
/// with a `$ref`.
///
/// Only direct children of `definitions` are inspected. Schemas that already
/// are a `$ref` are left alone, which makes the pass idempotent.
///
/// # Errors
///
/// Returns `EnhanceError::MissingSection` if the document has no `definitions`,
/// or `EnhanceError::InvalidSection` if `definitions` is not an object.
pub fn relocate_data_definitions(doc: &mut Value) -> Result<(), EnhanceError> {
    let definitions = section_mut(doc, "definitions")?;

    let mut lifted = Vec::new();
    for (type_name, schema) in definitions.iter_mut() {
        let Some(properties) = schema
            .get_mut("properties")
            .and_then(Value::as_object_mut)
        else {
            continue;
        };
        let Some(data) = properties.get_mut("data") else {
            continue;
        };
        if !data.is_object() || data.get("$ref").is_some() {
            continue;
        }

        let target = data_definition_name(type_name);
        let reference = json!({ "$ref": format!("#/definitions/{target}") });
        lifted.push((target, std::mem::replace(data, reference)));
    }

    for (name, schema) in lifted {
        tracing::debug!(definition = %name, "relocated inline data schema");
        if definitions.insert(name.clone(), schema).is_some() {
            tracing::warn!(definition = %name, "replaced existing definition");
        }
    }

    Ok(())
}
