//! GROBID client - Submit documents to a GROBID service and parse the
//! TEI XML results into a typed article model.
//!
//! This crate talks to a running [GROBID](https://github.com/kermitt2/grobid)
//! instance over HTTP, submits documents for full-text analysis, and
//! turns the returned TEI XML into an [`Article`] with typed authors,
//! sections, figures and bibliography entries. The TEI parser also
//! works standalone on XML already on disk.
//!
//! # Example
//!
//! ```
//! use grobid_client::parse_article;
//!
//! let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
//!   <teiHeader><fileDesc><titleStmt>
//!     <title level="a" type="main">Attention Is All You Need</title>
//!   </titleStmt></fileDesc></teiHeader>
//! </TEI>"#;
//!
//! let article = parse_article(xml).unwrap();
//! assert_eq!(article.title.as_deref(), Some("Attention Is All You Need"));
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Article, Author, Section, etc.)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Namespace-agnostic XML navigation utilities
//! - [`tei`]: TEI field mappers and the document composer
//! - [`form`]: Multipart form payloads for the processing endpoints
//! - [`client`]: HTTP client for the GROBID service
//! - [`json`]: JSON output (feature `json`)
//! - [`cli`]: Command-line interface (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
#[cfg(feature = "json")]
pub mod json;
pub mod tei;
pub mod types;
pub mod xml;

// Re-export main functions
pub use client::GrobidClient;
pub use tei::parse_article;

// Re-export commonly used items
pub use config::{validate_base_url, validate_consolidation};
pub use error::{GrobidError, Result};
pub use form::{File, Form};
pub use types::{Article, Author, BibEntry, Date, Figure, Section};
