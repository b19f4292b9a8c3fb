//! Error types for the GROBID client.
//!
//! Uses a single library-level error enum: `GrobidError` for library
//! consumers with detailed error context, converted from the underlying
//! crate errors where a `#[from]` conversion is enough.

use thiserror::Error;

/// Main error type for the GROBID client library.
#[derive(Debug, Error)]
pub enum GrobidError {
    /// XML parsing failed (input is not well-formed).
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document root is not the mandatory `<TEI>` element.
    #[error("Not a TEI document: expected <TEI> root element, found <{found}>")]
    MissingRoot {
        /// Tag name of the root element that was found instead.
        found: String,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The GROBID service answered with one of its documented error statuses.
    #[error("GROBID service error {status}: {message}")]
    Service {
        /// HTTP status code returned by the service.
        status: u16,
        /// Documented meaning of the status code.
        message: String,
    },

    /// Invalid service base URL.
    #[error("Invalid base URL: '{0}'. Expected an absolute http(s) URL (e.g. http://localhost:8070)")]
    InvalidBaseUrl(String),

    /// A service parameter has a value outside its accepted range.
    #[error("Invalid value for parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name as sent to the service.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json")]
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for GROBID client operations.
pub type Result<T> = std::result::Result<T, GrobidError>;
