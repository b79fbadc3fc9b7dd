//! Keyed depth-first traversal shared by the document passes.
//!
//! A walk visits every object reachable through object-valued keys, pre-order.
//! When a key matches one of the targets the visitor gets the containing object
//! and the key; otherwise an object value is descended into. Arrays are never
//! walked here: passes that expect an array under their target key handle it
//! themselves.

use serde_json::{Map, Value};

/// What the walk does with a matched key's value after the visitor ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Descend {
    /// Recurse into the value if it is (still) an object.
    Yes,
    /// Leave the value alone.
    No,
}

/// Walk `node`, calling `visit(parent, key)` for every key named in `targets`.
///
/// Keys are snapshotted before each object is scanned, so the visitor may
/// insert or remove entries in `parent` without disturbing the iteration.
/// Keys inserted by the visitor are not visited in the same scan.
pub(crate) fn walk_keyed<F>(node: &mut Map<String, Value>, targets: &[&str], visit: &mut F)
where
    F: FnMut(&mut Map<String, Value>, &str) -> Descend,
{
    let keys: Vec<String> = node.keys().cloned().collect();
    for key in keys {
        let descend = if targets.contains(&key.as_str()) {
            visit(node, &key)
        } else {
            Descend::Yes
        };

        if descend == Descend::Yes {
            if let Some(Value::Object(child)) = node.get_mut(&key) {
                walk_keyed(child, targets, visit);
            }
        }
    }
}

/// Walk an entire document. Non-object roots are left alone.
pub(crate) fn walk_document<F>(doc: &mut Value, targets: &[&str], mut visit: F)
where
    F: FnMut(&mut Map<String, Value>, &str) -> Descend,
{
    if let Value::Object(root) = doc {
        walk_keyed(root, targets, &mut visit);
    }
}
