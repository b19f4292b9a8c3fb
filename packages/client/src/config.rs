//! Configuration constants and validation functions for the client.

use reqwest::Url;

use crate::error::{GrobidError, Result};

/// Path of the full-text processing endpoint, relative to the service base URL.
pub const PROCESS_FULLTEXT_PATH: &str = "api/processFulltextDocument";

/// HTTP timeout in seconds.
///
/// Full-text analysis of a large PDF can take a while on a busy server.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Default base URL for a locally running GROBID service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8070";

/// Form field name the service expects for the uploaded file.
pub const INPUT_FIELD_NAME: &str = "input";

/// Validate a service base URL.
///
/// # Arguments
/// * `base_url` - The base URL to validate
///
/// # Returns
/// * `Ok(())` if the URL is absolute and uses http or https
/// * `Err(GrobidError::InvalidBaseUrl)` otherwise
///
/// # Examples
/// ```
/// use grobid_client::config::validate_base_url;
///
/// assert!(validate_base_url("http://localhost:8070").is_ok());
/// assert!(validate_base_url("not a url").is_err());
/// ```
pub fn validate_base_url(base_url: &str) -> Result<()> {
    match Url::parse(base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        _ => Err(GrobidError::InvalidBaseUrl(base_url.to_string())),
    }
}

/// Validate a consolidation level (`consolidateHeader` / `consolidateCitations`).
///
/// The service accepts 0 (no consolidation), 1 (full consolidation) or
/// 2 (identifiers only).
///
/// # Examples
/// ```
/// use grobid_client::config::validate_consolidation;
///
/// assert!(validate_consolidation("consolidateHeader", 2).is_ok());
/// assert!(validate_consolidation("consolidateHeader", 3).is_err());
/// ```
pub fn validate_consolidation(name: &str, level: u8) -> Result<()> {
    if level <= 2 {
        Ok(())
    } else {
        Err(GrobidError::InvalidParameter {
            name: name.to_string(),
            value: level.to_string(),
        })
    }
}

/// Build the full-text processing URL for a service base URL.
///
/// # Arguments
/// * `base_url` - The service base URL (should be validated with
///   `validate_base_url` first)
///
/// # Returns
/// URL of the `processFulltextDocument` endpoint.
pub fn process_fulltext_url(base_url: &str) -> String {
    format!("{}/{PROCESS_FULLTEXT_PATH}", base_url.trim_end_matches('/'))
}
