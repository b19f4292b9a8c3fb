//! End-to-end integration tests for the TEI parsing pipeline.
//!
//! Tests the complete path from TEI XML to the typed article model
//! using fixture data resembling GROBID output for "Attention Is All
//! You Need".

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use grobid_client::error::GrobidError;
use grobid_client::tei::parse_article;
use grobid_client::types::{Article, Date, FigureKind, PageRange};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("attention")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Parse the fixture document.
fn parse_fixture() -> Article {
    let xml = load_fixture("article.tei.xml");
    parse_article(&xml).expect("Fixture should parse")
}

#[test]
fn test_header_title() {
    let article = parse_fixture();
    assert_eq!(article.title.as_deref(), Some("Attention Is All You Need"));
}

#[test]
fn test_header_authors() {
    let article = parse_fixture();
    assert_eq!(article.authors.len(), 2);

    let vaswani = &article.authors[0];
    assert_eq!(vaswani.given_name.as_deref(), Some("Ashish"));
    assert_eq!(vaswani.surname.as_deref(), Some("Vaswani"));
    assert_eq!(vaswani.email.as_deref(), Some("avaswani@google.com"));

    assert_eq!(vaswani.affiliations.len(), 1);
    let affiliation = &vaswani.affiliations[0];
    assert_eq!(affiliation.institution.as_deref(), Some("Google Inc."));
    assert_eq!(affiliation.department.as_deref(), Some("Google Brain"));
    assert_eq!(affiliation.laboratory, None);

    let address = affiliation.address.as_ref().expect("Should have address");
    assert_eq!(address.settlement.as_deref(), Some("Mountain View"));
    assert_eq!(address.region.as_deref(), Some("CA"));
    assert_eq!(address.country.as_deref(), Some("USA"));
    assert_eq!(address.post_code, None);

    // Second author: surname only, everything else absent
    let shazeer = &article.authors[1];
    assert_eq!(shazeer.given_name, None);
    assert_eq!(shazeer.surname.as_deref(), Some("Shazeer"));
    assert_eq!(shazeer.email, None);
    assert!(shazeer.affiliations.is_empty());
}

#[test]
fn test_header_abstract_and_keywords() {
    let article = parse_fixture();

    let abstract_text = article.abstract_text.expect("Should have abstract");
    assert!(abstract_text.starts_with("The dominant sequence transduction models"));
    assert!(
        abstract_text.contains("\n\n"),
        "Paragraphs should be joined with a blank line"
    );
    assert!(abstract_text.contains("the Transformer"));

    assert_eq!(
        article.keywords,
        vec!["Attention", "Transformers", "Sequence transduction"]
    );
}

#[test]
fn test_header_source_metadata() {
    let article = parse_fixture();

    let metadata = article.source_metadata.expect("Should have source metadata");
    assert_eq!(metadata.key, "source");
    assert_eq!(metadata.title.as_deref(), Some("Attention Is All You Need"));
    assert_eq!(metadata.doi.as_deref(), Some("10.48550/arXiv.1706.03762"));
    assert_eq!(
        metadata.date,
        Some(Date {
            year: 2017,
            month: Some(6),
            day: Some(12),
        })
    );
    assert_eq!(metadata.authors.len(), 2);
}

#[test]
fn test_body_sections_order_and_levels() {
    let article = parse_fixture();

    let outline: Vec<(Option<&str>, u32)> = article
        .sections
        .iter()
        .map(|s| (s.heading.as_deref(), s.level))
        .collect();

    assert_eq!(
        outline,
        vec![
            (Some("Introduction"), 1),
            (Some("Motivation"), 2),
            (Some("Model Architecture"), 1),
            (None, 1),
        ]
    );

    // Nested paragraphs stay with their own section
    assert_eq!(article.sections[0].paragraphs.len(), 2);
    assert_eq!(article.sections[1].paragraphs.len(), 1);
    assert!(article.sections[1].paragraphs[0].contains("sequential computation"));
    assert!(article.sections[3].paragraphs[0].contains("Acknowledgements"));
}

#[test]
fn test_body_figures() {
    let article = parse_fixture();
    assert_eq!(article.figures.len(), 2);

    let figure = &article.figures[0];
    assert_eq!(figure.id.as_deref(), Some("fig_0"));
    assert_eq!(figure.kind, FigureKind::Figure);
    assert_eq!(figure.label.as_deref(), Some("1"));
    assert_eq!(
        figure.caption.as_deref(),
        Some("The Transformer model architecture.")
    );
    assert_eq!(figure.graphic_ref.as_deref(), Some("image-1.png"));
    assert!(figure.rows.is_empty());

    let table = &article.figures[1];
    assert_eq!(table.id.as_deref(), Some("tab_0"));
    assert_eq!(table.kind, FigureKind::Table);
    assert_eq!(
        table.caption.as_deref(),
        Some("Maximum path lengths per layer type.")
    );
    assert_eq!(table.graphic_ref, None);
    assert_eq!(
        table.rows,
        vec![
            vec!["Layer Type".to_string(), "Maximum Path Length".to_string()],
            vec!["Self-Attention".to_string(), "O(1)".to_string()],
            vec!["Recurrent".to_string(), "O(n)".to_string()],
        ]
    );
}

#[test]
fn test_bibliography_journal_entry() {
    let article = parse_fixture();
    assert_eq!(article.bibliography.len(), 2);

    let entry = &article.bibliography[0];
    assert_eq!(entry.key, "b0");
    assert_eq!(
        entry.title.as_deref(),
        Some("Neural machine translation by jointly learning to align and translate")
    );
    assert_eq!(entry.authors.len(), 1);
    assert_eq!(entry.authors[0].surname.as_deref(), Some("Bahdanau"));
    assert_eq!(entry.venue.as_deref(), Some("CoRR"));
    assert_eq!(
        entry.date,
        Some(Date {
            year: 2015,
            month: Some(5),
            day: Some(7),
        })
    );
    assert_eq!(entry.doi.as_deref(), Some("10.48550/arXiv.1409.0473"));
    assert_eq!(entry.arxiv_id.as_deref(), Some("arXiv:1409.0473"));
    assert_eq!(
        entry.target.as_deref(),
        Some("https://arxiv.org/abs/1409.0473")
    );
    // Non-numeric volume scope is skipped, pages survive
    assert_eq!(entry.volume, None);
    assert_eq!(
        entry.pages,
        Some(PageRange {
            from_page: 1,
            to_page: 15,
        })
    );
}

#[test]
fn test_bibliography_monograph_entry() {
    let article = parse_fixture();

    let entry = &article.bibliography[1];
    assert_eq!(entry.key, "b1");
    assert_eq!(entry.title.as_deref(), Some("Deep Learning"));
    assert_eq!(entry.venue, None);
    assert_eq!(entry.publisher.as_deref(), Some("MIT Press"));
    assert_eq!(entry.date, Some(Date::year(2016)));

    // Unstructured name string kept whole as the surname
    assert_eq!(entry.authors.len(), 1);
    assert_eq!(entry.authors[0].given_name, None);
    assert_eq!(entry.authors[0].surname.as_deref(), Some("Ian Goodfellow"));
}

#[test]
fn test_malformed_xml_is_fatal() {
    let result = parse_article("<TEI><teiHeader>");
    assert!(matches!(result, Err(GrobidError::Xml(_))));
}

#[test]
fn test_wrong_root_is_fatal() {
    let result = parse_article("<article><front/></article>");
    match result {
        Err(GrobidError::MissingRoot { found }) => assert_eq!(found, "article"),
        other => panic!("Expected MissingRoot, got {other:?}"),
    }
}

#[test]
fn test_damaged_fixture_still_yields_partial_article() {
    // Strip the entire header: body content must still come through
    let xml = load_fixture("article.tei.xml");
    let start = xml.find("<teiHeader").expect("Fixture has a header");
    let end = xml.find("</teiHeader>").expect("Fixture has a header") + "</teiHeader>".len();
    let headerless = format!("{}{}", &xml[..start], &xml[end..]);

    let article = parse_article(&headerless).expect("Headerless document should parse");
    assert_eq!(article.title, None);
    assert!(article.authors.is_empty());
    assert_eq!(article.abstract_text, None);
    assert_eq!(article.source_metadata, None);
    assert_eq!(article.sections.len(), 4);
    assert_eq!(article.bibliography.len(), 2);
}
