//! OpenAPI Enhancer
//!
//! Rewrites the OpenAPI v2 (Swagger) document generated by a content-management
//! backend into a form stricter client generators accept.
//!
//! The backend's document carries non-standard types, array parameters without
//! `items`, empty `required` lists, inline `data` relationship schemas and
//! ad-hoc timestamp, URI and langcode encodings. Each defect is fixed by one
//! fixed, named pass over the JSON tree; [`enhance`] runs them all in order.
//!
//! # Example
//!
//! ```
//! use openapi_enhancer::enhance;
//! use serde_json::json;
//!
//! let mut spec = json!({
//!     "swagger": "2.0",
//!     "paths": {
//!         "/node/article": {
//!             "get": { "parameters": [] },
//!             "post": { "parameters": [] }
//!         }
//!     },
//!     "definitions": {
//!         "node--article": {
//!             "type": "object",
//!             "required": [],
//!             "properties": { "data": { "type": "object" } }
//!         }
//!     }
//! });
//!
//! enhance(&mut spec).unwrap();
//!
//! // Only safe operations survive
//! assert!(spec["paths"]["/node/article"].get("post").is_none());
//! // Inline `data` schemas become their own definitions
//! assert_eq!(
//!     spec["definitions"]["node--article"]["properties"]["data"]["$ref"],
//!     "#/definitions/node--article--data"
//! );
//! ```
//!
//! # Passes
//!
//! | Pass | Effect |
//! |------|--------|
//! | [`strip_security`] | Drop the top-level `security` field |
//! | [`clean_paths`] | Drop `post`/`patch`/`delete`, then empty or malformed paths |
//! | [`normalize_parameters`] | `items: {type: string}` on array parameters |
//! | [`prune_empty_required`] | Drop empty `required` lists |
//! | [`add_query_parameters`] | Append `include` and `filter[field_path][value]` |
//! | [`relocate_data_definitions`] | Lift inline `properties.data` into `<name>--data` |
//! | [`correct_timestamps`] | `utc-millisec` fields become strings |
//! | [`correct_langcodes`] | `langcode` becomes a plain string schema |
//! | [`correct_uris`] | `uri` types become strings, `URI` titles become `File URI` |
//! | [`correct_breadcrumbs`] | Non-array `breadcrumbs` are wrapped in an array |
//! | [`add_image_meta`] | `media--image` meta gets `alt` and `title` |
//!
//! [`post_process`] then applies a few literal substitutions to the
//! serialized text.

mod corrections;
mod definitions;
mod error;
mod loader;
mod parameters;
mod paths;
mod pipeline;
mod serializer;
mod types;
mod walker;

pub use corrections::{
    add_image_meta, correct_breadcrumbs, correct_langcodes, correct_timestamps, correct_uris,
    prune_empty_required,
};
pub use definitions::{data_definition_name, relocate_data_definitions};
pub use error::EnhanceError;
pub use loader::{is_url, load_spec, load_spec_auto, load_spec_str};
pub use parameters::{add_query_parameters, normalize_parameters};
pub use paths::{clean_paths, strip_security};
pub use pipeline::{enhance, enhance_to_string, process};
pub use serializer::{post_process, serialize};
pub use types::{
    Credentials, EnhanceOptions, QueryParameter, DATA_SUFFIX, DEFAULT_OUTPUT, FILTER_PARAM,
    INCLUDE_PARAM, LEGACY_TIMESTAMP_FORMAT,
};

#[cfg(feature = "remote")]
pub use loader::load_spec_url;
