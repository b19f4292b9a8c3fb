//! Core data types for parsed documents.
//!
//! These types represent a scholarly article as extracted from GROBID's
//! TEI output. Every field that can be missing in the source is an
//! `Option` (or an empty `Vec` for repeated elements) so that consumers
//! can distinguish "not present in the source" from "present but empty".
//! Nothing is mutated after construction.

use serde::{Deserialize, Serialize};

/// A parsed scholarly article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Main title from the document header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document authors, in source order.
    pub authors: Vec<Author>,

    /// Abstract text; paragraphs joined with blank lines.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    /// Keywords from the header, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,

    /// The document's own publication metadata (DOI, venue, date, ...)
    /// from the header's source description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_metadata: Option<BibEntry>,

    /// Body sections, in source order.
    pub sections: Vec<Section>,

    /// Bibliography entries, in source order.
    pub bibliography: Vec<BibEntry>,

    /// Figures and tables from the body, in source order.
    pub figures: Vec<Figure>,
}

/// An author of the article or of a cited work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Given (first) name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname. Also holds the full name string when the source carries
    /// only an unstructured name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Contact email, when annotated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Affiliations, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub affiliations: Vec<Affiliation>,
}

impl Author {
    /// Whether no name component was extracted at all.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.given_name.is_none() && self.surname.is_none()
    }

    /// Full display name ("Given Surname" when both parts are present).
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.given_name, &self.surname) {
            (Some(given), Some(surname)) => Some(format!("{given} {surname}")),
            (None, Some(surname)) => Some(surname.clone()),
            (Some(given), None) => Some(given.clone()),
            (None, None) => None,
        }
    }
}

/// An author affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,

    /// Department within the institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Laboratory within the department or institution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<String>,

    /// Postal address components.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Affiliation {
    /// Whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.institution.is_none()
            && self.department.is_none()
            && self.laboratory.is_none()
            && self.address.is_none()
    }
}

/// Address components of an affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// City or settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<String>,

    /// Region, state or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
}

impl Address {
    /// Whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settlement.is_none()
            && self.region.is_none()
            && self.country.is_none()
            && self.post_code.is_none()
    }
}

/// A bibliography entry (`<biblStruct>` in the back matter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Entry key: the `xml:id` from the source, or a generated ordinal
    /// (`b0`, `b1`, ...) when the source carries none.
    pub key: String,

    /// Title of the cited work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Authors of the cited work, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub authors: Vec<Author>,

    /// Publication venue (journal, series or collection title).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    /// Publisher name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Publication date, possibly partial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,

    /// DOI identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// arXiv identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,

    /// Link target of the entry (`<ptr target="...">`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Volume number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,

    /// Page range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageRange>,
}

impl BibEntry {
    /// Create an entry holding only its key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            authors: Vec::new(),
            venue: None,
            publisher: None,
            date: None,
            doi: None,
            arxiv_id: None,
            target: None,
            volume: None,
            pages: None,
        }
    }
}

/// Page range of a cited work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    /// First page.
    pub from_page: u32,

    /// Last page (equal to `from_page` for single-page works).
    pub to_page: u32,
}

/// A body section: a `<div>` with an optional `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text; body text may be unheaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Paragraphs as plain text, in source order.
    pub paragraphs: Vec<String>,

    /// Nesting level: 1 for top-level body sections, one more per
    /// enclosing `<div>`.
    pub level: u32,
}

/// Kind of a `<figure>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    /// A plain figure.
    Figure,
    /// A table (`<figure type="table">`).
    Table,
}

impl FigureKind {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Figure => "figure",
            Self::Table => "table",
        }
    }
}

/// A figure or table from the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    /// Source identifier (`xml:id`), used by in-text callouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short label (e.g. "1" for "Figure 1").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Caption text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Whether this is a figure or a table.
    pub kind: FigureKind,

    /// Reference to the associated graphic data (`<graphic url="...">`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphic_ref: Option<String>,

    /// Table content as rows of cell texts; empty for plain figures.
    /// Cells are positional, so an empty cell stays an empty string.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rows: Vec<Vec<String>>,
}

/// A publication date, normalized to at least a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    /// Year.
    pub year: i32,

    /// Month (1-12).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Day of month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl Date {
    /// Create a year-only date.
    #[must_use]
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    /// Parse an ISO-8601-ish date string (`YYYY`, `YYYY-MM` or
    /// `YYYY-MM-DD`, optionally followed by a time part).
    ///
    /// Parsing degrades instead of failing: trailing tokens that do not
    /// form a valid month or calendar day are dropped, and only a
    /// missing or non-numeric year yields `None`. Bibliographic dates in
    /// the wild are frequently partial or malformed.
    ///
    /// # Examples
    /// ```
    /// use grobid_client::types::Date;
    ///
    /// assert_eq!(Date::parse_iso("2015-05-07"), Some(Date { year: 2015, month: Some(5), day: Some(7) }));
    /// assert_eq!(Date::parse_iso("2016"), Some(Date::year(2016)));
    /// assert_eq!(Date::parse_iso("garbage"), None);
    /// ```
    #[must_use]
    pub fn parse_iso(value: &str) -> Option<Self> {
        let date_part = value.trim().split('T').next().unwrap_or_default();
        let mut tokens = date_part.split('-').filter(|t| !t.is_empty());

        let year: i32 = tokens.next()?.parse().ok()?;

        let month = tokens
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .filter(|m| (1..=12).contains(m));

        // A day only makes sense with a valid month; check it forms a
        // real calendar date.
        let day = match month {
            Some(m) => tokens
                .next()
                .and_then(|t| t.parse::<u32>().ok())
                .filter(|d| chrono::NaiveDate::from_ymd_opt(year, m, *d).is_some()),
            None => None,
        };

        Some(Self { year, month, day })
    }
}
