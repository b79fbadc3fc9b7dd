//! Schema-level corrections for encodings strict generators reject.
//!
//! Every pass here walks the document with the keyed walker and silently
//! skips nodes whose shape does not match what it expects.

use serde_json::{json, Map, Value};

use crate::types::{image_meta_properties, langcode_schema, LEGACY_TIMESTAMP_FORMAT};
use crate::walker::{walk_document, Descend};

/// Remove every `required` key whose value is an empty array.
pub fn prune_empty_required(doc: &mut Value) {
    walk_document(doc, &["required"], |parent, key| {
        // A property that happens to be named `required` is an ordinary schema
        let Some(Value::Array(fields)) = parent.get(key) else {
            return Descend::Yes;
        };
        if fields.is_empty() {
            parent.shift_remove(key);
        }
        Descend::No
    });
}

/// Retype legacy millisecond-epoch timestamps (`format: utc-millisec`) as strings.
pub fn correct_timestamps(doc: &mut Value) {
    walk_document(doc, &["format"], |parent, key| {
        if parent.get(key).and_then(Value::as_str) == Some(LEGACY_TIMESTAMP_FORMAT) {
            parent.insert("type".to_string(), json!("string"));
            return Descend::No;
        }
        Descend::Yes
    });
}

/// Replace every `langcode` schema with `{type: string, title: Language}`.
pub fn correct_langcodes(doc: &mut Value) {
    walk_document(doc, &["langcode"], |parent, key| {
        match parent.get_mut(key) {
            Some(schema) if schema.is_object() => *schema = langcode_schema(),
            _ => return Descend::Yes,
        }
        Descend::No
    });
}

/// Retype `uri`-typed `value` fields as strings and retitle `URI` fields
/// nested under a `uri` key as `File URI`.
pub fn correct_uris(doc: &mut Value) {
    walk_document(doc, &["value", "uri"], |parent, key| {
        let Some(field) = parent.get_mut(key).and_then(Value::as_object_mut) else {
            return Descend::Yes;
        };

        if key == "value" {
            if field.get("type").and_then(Value::as_str) == Some("uri") {
                field.insert("type".to_string(), json!("string"));
            }
            return Descend::No;
        }

        // `uri` objects may hold further uri-shaped children once retitled
        if field.get("title").and_then(Value::as_str) == Some("URI") {
            field.insert("title".to_string(), json!("File URI"));
            return Descend::Yes;
        }
        Descend::No
    });
}

/// Wrap a non-array `breadcrumbs` schema into `{type: array, items: <schema>}`.
pub fn correct_breadcrumbs(doc: &mut Value) {
    walk_document(doc, &["breadcrumbs"], |parent, key| {
        let Some(schema) = parent.get_mut(key).filter(|schema| schema.is_object()) else {
            return Descend::Yes;
        };
        if schema.get("type").and_then(Value::as_str) != Some("array") {
            let items = schema.take();
            *schema = json!({ "type": "array", "items": items });
        }
        Descend::No
    });
}

/// Give the `meta` object of `media--image` a fixed title and `alt`/`title`
/// properties, overwriting whatever was there.
pub fn add_image_meta(doc: &mut Value) {
    walk_document(doc, &["media--image"], |parent, key| {
        let Some(properties) = parent
            .get_mut(key)
            .and_then(|image| image.get_mut("properties"))
            .and_then(Value::as_object_mut)
        else {
            return Descend::No;
        };

        let meta = properties
            .entry("meta")
            .or_insert_with(|| json!({ "type": "object" }));
        if !meta.is_object() {
            *meta = json!({ "type": "object" });
        }
        if let Some(meta) = meta.as_object_mut() {
            set_image_meta(meta);
        }
        Descend::No
    });
}

fn set_image_meta(meta: &mut Map<String, Value>) {
    meta.insert("title".to_string(), json!("Image meta"));
    meta.insert("properties".to_string(), image_meta_properties());
}
