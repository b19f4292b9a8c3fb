//! HTTP client for the GROBID service.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, trace};

use crate::config::{process_fulltext_url, validate_base_url, HTTP_TIMEOUT_SECS};
use crate::error::{GrobidError, Result};
use crate::form::Form;
use crate::tei::parse_article;
use crate::types::Article;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("grobid-client/", env!("CARGO_PKG_VERSION"));

/// Client for a GROBID service instance.
///
/// Requests are synchronous; the service delivers a complete response
/// body (or a terminal error) before any parsing starts. Retry policy,
/// if any, belongs to the caller.
#[derive(Debug, Clone)]
pub struct GrobidClient {
    base_url: String,
    http: Client,
}

impl GrobidClient {
    /// Create a client for the given service base URL.
    ///
    /// # Errors
    /// * `GrobidError::InvalidBaseUrl` if the URL is not absolute http(s)
    /// * `GrobidError::Http` if the underlying client cannot be built
    pub fn new(base_url: &str) -> Result<Self> {
        validate_base_url(base_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The service base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a document for full-text analysis and return the raw TEI
    /// XML bytes.
    ///
    /// GROBID's documented non-success statuses (203, 400, 500, 503)
    /// map to [`GrobidError::Service`] with the documented meaning;
    /// other HTTP failures surface as [`GrobidError::Http`].
    pub fn process_fulltext(&self, form: Form) -> Result<Vec<u8>> {
        let url = process_fulltext_url(&self.base_url);
        debug!(url = %url, "Submitting document for full-text analysis");

        let multipart = form.into_multipart()?;
        let response = self.http.post(&url).multipart(multipart).send()?;

        let status = response.status().as_u16();
        if let Some(message) = service_status_message(status) {
            return Err(GrobidError::Service {
                status,
                message: message.to_string(),
            });
        }

        let response = response.error_for_status()?;
        let bytes = response.bytes()?.to_vec();
        trace!(len = bytes.len(), "Received TEI response");
        Ok(bytes)
    }

    /// Submit a document and parse the TEI response into an [`Article`].
    pub fn fetch_article(&self, form: Form) -> Result<Article> {
        let bytes = self.process_fulltext(form)?;
        parse_article(&String::from_utf8_lossy(&bytes))
    }
}

/// Documented meaning of GROBID's non-success status codes.
fn service_status_message(status: u16) -> Option<&'static str> {
    match status {
        203 => Some("Content couldn't be extracted"),
        400 => Some("Wrong request, missing parameters, missing header"),
        500 => Some("Internal service error"),
        503 => Some("Service not available"),
        _ => None,
    }
}
