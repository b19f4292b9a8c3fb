//! TEI document parsing: field mappers and the document composer.
//!
//! The composer walks the fixed top-level structure of a GROBID TEI
//! document (header, body, back matter) and assembles an [`Article`]
//! from the mapper outputs. Only two things are fatal: input that is
//! not well-formed XML, and a root element other than `<TEI>`. Every
//! missing or individually malformed substructure degrades to an
//! absent field or an empty sequence, so the richest-available partial
//! article is always returned.

pub mod citation;
pub mod fulltext;
pub mod person;

use roxmltree::Document;
use tracing::debug;

use crate::error::{GrobidError, Result};
use crate::tei::citation::{map_bib_entry, map_source_metadata};
use crate::tei::fulltext::{collect_sections, map_abstract, map_figure, map_keywords};
use crate::tei::person::map_authors;
use crate::types::Article;
use crate::xml::{
    descendants_named, find_by_path, find_child, find_children, find_descendant, tag_name,
    text_content_opt,
};

/// Local name of the mandatory root element.
const TEI_ROOT: &str = "TEI";

/// Parse a TEI XML string into an [`Article`].
///
/// The parse is a single synchronous pass over an in-memory buffer:
/// no streaming, no shared state, safe to run concurrently on
/// independent inputs.
///
/// # Errors
/// * [`GrobidError::Xml`] if the input is not well-formed XML
/// * [`GrobidError::MissingRoot`] if the root element is not `<TEI>`
///
/// # Examples
/// ```
/// use grobid_client::tei::parse_article;
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
///   <teiHeader><fileDesc><titleStmt>
///     <title level="a" type="main">A Minimal Document</title>
///   </titleStmt></fileDesc></teiHeader>
/// </TEI>"#;
///
/// let article = parse_article(xml).unwrap();
/// assert_eq!(article.title.as_deref(), Some("A Minimal Document"));
/// assert!(article.sections.is_empty());
/// ```
pub fn parse_article(xml: &str) -> Result<Article> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    if tag_name(root) != TEI_ROOT {
        return Err(GrobidError::MissingRoot {
            found: tag_name(root).to_string(),
        });
    }

    let header = find_child(root, "teiHeader");

    let title = header
        .and_then(|h| find_by_path(h, "fileDesc/titleStmt/title"))
        .and_then(text_content_opt);

    let source_desc = header.and_then(|h| find_by_path(h, "fileDesc/sourceDesc"));

    let authors = source_desc.map(map_authors).unwrap_or_default();

    let source_metadata = source_desc
        .and_then(|sd| find_child(sd, "biblStruct"))
        .map(map_source_metadata);

    let abstract_text = header
        .and_then(|h| find_by_path(h, "profileDesc/abstract"))
        .and_then(map_abstract);

    let keywords = header
        .and_then(|h| find_by_path(h, "profileDesc/textClass/keywords"))
        .map(map_keywords)
        .unwrap_or_default();

    let body = find_by_path(root, "text/body");

    let sections = body.map(collect_sections).unwrap_or_default();

    let figures = body
        .map(|b| descendants_named(b, "figure").filter_map(map_figure).collect())
        .unwrap_or_default();

    let bibliography = find_descendant(root, "listBibl")
        .map(|list| {
            find_children(list, "biblStruct")
                .enumerate()
                .map(|(index, node)| map_bib_entry(index, node))
                .collect()
        })
        .unwrap_or_default();

    let article = Article {
        title,
        authors,
        abstract_text,
        keywords,
        source_metadata,
        sections,
        bibliography,
        figures,
    };

    debug!(
        authors = article.authors.len(),
        sections = article.sections.len(),
        bibliography = article.bibliography.len(),
        figures = article.figures.len(),
        "Parsed TEI document"
    );

    Ok(article)
}
