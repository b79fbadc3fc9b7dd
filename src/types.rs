//! Core types and fixed constants for document enhancement.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::EnhanceError;

/// Suffix appended to a definition name when its `data` property is lifted out.
pub const DATA_SUFFIX: &str = "--data";

/// HTTP methods stripped from every path item.
pub const REMOVED_METHODS: &[&str] = &["post", "patch", "delete"];

/// Schema `format` marking the legacy millisecond-epoch timestamp encoding.
pub const LEGACY_TIMESTAMP_FORMAT: &str = "utc-millisec";

/// Name of the JSON:API relationship include query parameter.
pub const INCLUDE_PARAM: &str = "include";

/// Name of the JSON:API path filter query parameter.
pub const FILTER_PARAM: &str = "filter[field_path][value]";

/// Output location used when none is configured.
pub const DEFAULT_OUTPUT: &str = "openapi_out.json";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Canonical schema every `langcode` node is replaced with.
pub fn langcode_schema() -> Value {
    json!({ "type": "string", "title": "Language" })
}

/// Property schemas injected into the `meta` object of `media--image`.
pub fn image_meta_properties() -> Value {
    json!({
        "alt": { "type": "string", "title": "Alternative text" },
        "title": { "type": "string", "title": "Title" }
    })
}

/// A Swagger 2.0 query parameter descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    #[serde(rename = "in")]
    pub location: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl QueryParameter {
    /// Optional string parameter in the query string.
    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            location: "query",
            name,
            description,
            required: false,
            kind: "string",
        }
    }

    /// The `include` parameter for pulling related resources.
    pub const fn include() -> Self {
        Self::optional(INCLUDE_PARAM, "include relation data")
    }

    /// The `filter[field_path][value]` parameter.
    pub const fn filter() -> Self {
        Self::optional(FILTER_PARAM, "filter by path")
    }

    /// Converts the descriptor into a document node.
    ///
    /// # Errors
    ///
    /// Returns `EnhanceError::Serialize` if serialization fails.
    pub fn to_value(&self) -> Result<Value, EnhanceError> {
        serde_json::to_value(self).map_err(|source| EnhanceError::Serialize { source })
    }
}

/// HTTP Basic credentials for fetching a remote document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build credentials only when both parts are present and non-blank.
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (username, password) {
            (Some(user), Some(pass)) if !user.trim().is_empty() && !pass.trim().is_empty() => {
                Some(Self::new(user, pass))
            }
            _ => None,
        }
    }
}

/// Options for a full enhancement run.
#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    /// Source document: file path or `http(s)` URL.
    pub input: Option<String>,
    /// Where the rewritten document is written.
    pub output: PathBuf,
    /// Basic-auth credentials, used for URL sources only.
    pub credentials: Option<Credentials>,
}

impl EnhanceOptions {
    /// Create options for the given input, writing to [`DEFAULT_OUTPUT`].
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            output: PathBuf::from(DEFAULT_OUTPUT),
            credentials: None,
        }
    }

    /// Set the output path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set Basic-auth credentials.
    pub fn credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            credentials: None,
        }
    }
}
