//! Error types for OpenAPI document enhancement.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while acquiring, rewriting or writing a document.
///
/// Per-node mismatches inside the keyed passes are never errors; only a
/// missing input, an unobtainable or unparsable document, a missing top-level
/// section, or a failed write end up here.
#[derive(Debug, Error)]
pub enum EnhanceError {
    // Configuration errors (exit code 2)
    #[error("no input spec was provided")]
    MissingInput,

    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot read input spec from {url}: status code {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("cannot fetch {url}: built without the `remote` feature")]
    RemoteDisabled { url: String },

    #[error("cannot write output spec to {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Document errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed spec: missing `{key}` section")]
    MissingSection { key: String },

    #[error("malformed spec: `{key}` must be an object, got {actual}")]
    InvalidSection { key: String, actual: String },

    #[error("cannot serialize spec: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl EnhanceError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EnhanceError::FileNotFound { .. }
            | EnhanceError::ReadError { .. }
            | EnhanceError::HttpStatus { .. }
            | EnhanceError::RemoteDisabled { .. }
            | EnhanceError::WriteError { .. } => 3,
            #[cfg(feature = "remote")]
            EnhanceError::NetworkError { .. } => 3,
            _ => 2,
        }
    }
}
