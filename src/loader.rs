//! Document loading from various sources.
//!
//! Handles loading OpenAPI documents from files, strings, and HTTP URLs.

use std::path::Path;

use serde_json::Value;

use crate::error::EnhanceError;
use crate::types::Credentials;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Timeout for HTTP requests (60 seconds). Backends render the spec on demand.
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Load a document from a file path.
///
/// # Errors
///
/// Returns `EnhanceError::FileNotFound` if the file doesn't exist,
/// or `EnhanceError::InvalidJson` if the file isn't valid JSON.
pub fn load_spec(path: &Path) -> Result<Value, EnhanceError> {
    if !path.exists() {
        return Err(EnhanceError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| EnhanceError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_spec_str(&content)
}

/// Load a document from a JSON string.
///
/// # Errors
///
/// Returns `EnhanceError::InvalidJson` if the string isn't valid JSON.
pub fn load_spec_str(content: &str) -> Result<Value, EnhanceError> {
    serde_json::from_str(content).map_err(|source| EnhanceError::InvalidJson { source })
}

/// Load a document from an HTTP/HTTPS URL.
///
/// Certificate and hostname verification are disabled: the backends this tool
/// talks to commonly run with self-signed certificates. Credentials, when
/// given, are sent as HTTP Basic authentication.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `EnhanceError::NetworkError` if the request fails,
/// `EnhanceError::HttpStatus` for any status other than 200,
/// or `EnhanceError::InvalidJson` if the body isn't valid JSON.
#[cfg(feature = "remote")]
pub fn load_spec_url(url: &str, credentials: Option<&Credentials>) -> Result<Value, EnhanceError> {
    let network_error = |source| EnhanceError::NetworkError {
        url: url.to_string(),
        source,
    };

    tracing::warn!(url, "TLS certificate and hostname verification disabled");
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .map_err(network_error)?;

    let mut request = client.get(url);
    if let Some(creds) = credentials {
        tracing::debug!(user = %creds.username, "using basic authentication");
        request = request.basic_auth(&creds.username, Some(&creds.password));
    }

    let response = request.send().map_err(network_error)?;

    // Anything but 200 is fatal, including other 2xx codes
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(EnhanceError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().map_err(network_error)?;
    load_spec_str(&body)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a document from a file path or URL.
///
/// Automatically detects whether the source is a URL or file path.
/// URL loading requires the `remote` feature; credentials are ignored for files.
///
/// # Errors
///
/// Returns appropriate errors based on the source type.
pub fn load_spec_auto(source: &str, credentials: Option<&Credentials>) -> Result<Value, EnhanceError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_spec_url(source, credentials)
        }
        #[cfg(not(feature = "remote"))]
        {
            let _ = credentials;
            Err(EnhanceError::RemoteDisabled {
                url: source.to_string(),
            })
        }
    } else {
        load_spec(Path::new(source))
    }
}
