//! Multipart form payloads for the GROBID processing endpoints.

use reqwest::blocking::multipart;

use crate::config::{validate_consolidation, INPUT_FIELD_NAME};
use crate::error::{GrobidError, Result};

/// The document file to submit for analysis.
#[derive(Debug, Clone)]
pub struct File {
    /// Raw file bytes.
    pub payload: Vec<u8>,

    /// File name reported to the service.
    pub file_name: Option<String>,

    /// Media type of the payload (e.g. "application/pdf").
    pub mime_type: Option<String>,
}

impl File {
    /// Create a file payload from raw bytes.
    #[must_use]
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            file_name: None,
            mime_type: None,
        }
    }

    /// Set the file name reported to the service.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the media type of the payload.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Form data accepted by GROBID's `processFulltextDocument` endpoint.
///
/// Every parameter besides the file itself is optional; unset
/// parameters are simply not sent, leaving the service defaults in
/// effect. Parameter names and accepted values are the service's API
/// contract, not interpreted here.
#[derive(Debug, Clone)]
pub struct Form {
    /// The document to analyse.
    pub file: File,

    /// Run sentence segmentation on the extracted text.
    pub segment_sentences: Option<bool>,

    /// Header consolidation level (0, 1 or 2).
    pub consolidate_header: Option<u8>,

    /// Citation consolidation level (0, 1 or 2).
    pub consolidate_citations: Option<u8>,

    /// Include raw citation strings in the result.
    pub include_raw_citations: Option<bool>,

    /// Include raw affiliation strings in the result.
    pub include_raw_affiliations: Option<bool>,

    /// Element list for coordinate annotation (e.g. "persName,figure").
    pub tei_coordinates: Option<String>,
}

impl Form {
    /// Create a form carrying only the file payload.
    #[must_use]
    pub fn new(file: File) -> Self {
        Self {
            file,
            segment_sentences: None,
            consolidate_header: None,
            consolidate_citations: None,
            include_raw_citations: None,
            include_raw_affiliations: None,
            tei_coordinates: None,
        }
    }

    /// Enable or disable sentence segmentation.
    #[must_use]
    pub fn with_segment_sentences(mut self, enabled: bool) -> Self {
        self.segment_sentences = Some(enabled);
        self
    }

    /// Set the header consolidation level.
    #[must_use]
    pub fn with_consolidate_header(mut self, level: u8) -> Self {
        self.consolidate_header = Some(level);
        self
    }

    /// Set the citation consolidation level.
    #[must_use]
    pub fn with_consolidate_citations(mut self, level: u8) -> Self {
        self.consolidate_citations = Some(level);
        self
    }

    /// Request raw citation strings in the result.
    #[must_use]
    pub fn with_include_raw_citations(mut self, enabled: bool) -> Self {
        self.include_raw_citations = Some(enabled);
        self
    }

    /// Request raw affiliation strings in the result.
    #[must_use]
    pub fn with_include_raw_affiliations(mut self, enabled: bool) -> Self {
        self.include_raw_affiliations = Some(enabled);
        self
    }

    /// Set the elements to annotate with PDF coordinates.
    #[must_use]
    pub fn with_tei_coordinates(mut self, elements: impl Into<String>) -> Self {
        self.tei_coordinates = Some(elements.into());
        self
    }

    /// Convert into a multipart form for the HTTP request.
    ///
    /// # Errors
    /// * `GrobidError::InvalidParameter` if a consolidation level is
    ///   outside 0..=2 or the mime type is not a valid media type
    pub fn into_multipart(self) -> Result<multipart::Form> {
        let mut part = multipart::Part::bytes(self.file.payload);

        if let Some(file_name) = self.file.file_name {
            part = part.file_name(file_name);
        }
        if let Some(mime_type) = self.file.mime_type {
            part = part
                .mime_str(&mime_type)
                .map_err(|_| GrobidError::InvalidParameter {
                    name: "mime_type".to_string(),
                    value: mime_type,
                })?;
        }

        let mut form = multipart::Form::new().part(INPUT_FIELD_NAME, part);

        if self.segment_sentences == Some(true) {
            form = form.text("segmentSentences", "1");
        }
        if let Some(level) = self.consolidate_header {
            validate_consolidation("consolidateHeader", level)?;
            form = form.text("consolidateHeader", level.to_string());
        }
        if let Some(level) = self.consolidate_citations {
            validate_consolidation("consolidateCitations", level)?;
            form = form.text("consolidateCitations", level.to_string());
        }
        if let Some(enabled) = self.include_raw_citations {
            form = form.text("includeRawCitations", if enabled { "1" } else { "0" });
        }
        if let Some(enabled) = self.include_raw_affiliations {
            form = form.text("includeRawAffiliations", if enabled { "1" } else { "0" });
        }
        if let Some(elements) = self.tei_coordinates {
            form = form.text("teiCoordinates", elements);
        }

        Ok(form)
    }
}
