//! Mappers for bibliography entries (`<biblStruct>`) and their parts.

use roxmltree::Node;

use crate::tei::person::map_authors;
use crate::types::{BibEntry, Date, PageRange};
use crate::xml::{attribute, descendants_named, find_descendant, text_content_opt};

/// Map a `<biblStruct>` into a bibliography entry.
///
/// Never fails: an entry with nothing extractable still gets its key so
/// callers can resolve in-text callouts. `index` supplies the ordinal
/// used when the source carries no `xml:id`.
pub fn map_bib_entry(index: usize, node: Node<'_, '_>) -> BibEntry {
    let key = attribute(node, "id")
        .map(str::to_string)
        .unwrap_or_else(|| format!("b{index}"));

    map_entry(key, node)
}

/// Map the header `<biblStruct>` holding the document's own publication
/// metadata (`sourceDesc`). Same fields as a bibliography entry; the key
/// falls back to `"source"` since there is no ordinal to derive one from.
pub fn map_source_metadata(node: Node<'_, '_>) -> BibEntry {
    let key = attribute(node, "id")
        .map(str::to_string)
        .unwrap_or_else(|| "source".to_string());

    map_entry(key, node)
}

fn map_entry(key: String, node: Node<'_, '_>) -> BibEntry {
    let mut entry = BibEntry::new(key);

    entry.title = find_title(node, |n| attribute(n, "type") == Some("main"))
        .or_else(|| find_title(node, |n| attribute(n, "level") == Some("m")));
    entry.authors = map_authors(node);
    entry.venue = map_venue(node, entry.title.as_deref());
    entry.publisher = find_descendant(node, "publisher").and_then(text_content_opt);
    entry.date = map_date(node);
    entry.doi = map_idno(node, "DOI");
    entry.arxiv_id = map_idno(node, "arXiv");
    entry.target = find_descendant(node, "ptr")
        .and_then(|ptr| attribute(ptr, "target"))
        .map(str::to_string);

    let (volume, pages) = map_scope(node);
    entry.volume = volume;
    entry.pages = pages;

    entry
}

/// First `<title>` descendant matching a predicate, as trimmed text.
fn find_title<'a, F>(node: Node<'a, '_>, predicate: F) -> Option<String>
where
    F: Fn(Node<'a, '_>) -> bool,
{
    descendants_named(node, "title")
        .find(|n| predicate(*n))
        .and_then(text_content_opt)
}

/// Publication venue: the journal title, falling back to the series
/// title. A venue identical to the main title is not a venue; the check
/// applies per level, so a journal title that merely repeats the main
/// title still leaves the series fallback in play.
fn map_venue(node: Node<'_, '_>, main_title: Option<&str>) -> Option<String> {
    find_title(node, |n| attribute(n, "level") == Some("j"))
        .filter(|venue| Some(venue.as_str()) != main_title)
        .or_else(|| {
            find_title(node, |n| attribute(n, "level") == Some("s"))
                .filter(|venue| Some(venue.as_str()) != main_title)
        })
}

/// Map the first `<date>` descendant into a possibly partial [`Date`].
///
/// The `when` attribute is authoritative; the element text is a
/// fallback. An unparseable value maps to absent, never to an error.
pub fn map_date(node: Node<'_, '_>) -> Option<Date> {
    let date_node = find_descendant(node, "date")?;

    match attribute(date_node, "when") {
        Some(when) => Date::parse_iso(when),
        None => text_content_opt(date_node).and_then(|text| Date::parse_iso(&text)),
    }
}

/// Text of the first `<idno>` descendant with the given `type` attribute.
pub fn map_idno(node: Node<'_, '_>, idno_type: &str) -> Option<String> {
    descendants_named(node, "idno")
        .find(|n| attribute(*n, "type") == Some(idno_type))
        .and_then(text_content_opt)
}

/// Map `<biblScope>` descendants into `(volume, pages)`.
///
/// A scope with an unparseable value is skipped, not escalated.
fn map_scope(node: Node<'_, '_>) -> (Option<u32>, Option<PageRange>) {
    let mut volume = None;
    let mut pages = None;

    for scope in descendants_named(node, "biblScope") {
        match attribute(scope, "unit") {
            Some("volume") => {
                if let Some(value) = text_content_opt(scope).and_then(|t| t.parse().ok()) {
                    volume = Some(value);
                }
            }
            Some("page") => {
                let from = attribute(scope, "from").and_then(|v| v.parse().ok());
                let to = attribute(scope, "to").and_then(|v| v.parse().ok());
                match (from, to) {
                    (Some(from_page), Some(to_page)) => {
                        pages = Some(PageRange { from_page, to_page });
                    }
                    _ => {
                        // Single page given as element text
                        if let Some(page) = text_content_opt(scope).and_then(|t| t.parse().ok()) {
                            pages = Some(PageRange {
                                from_page: page,
                                to_page: page,
                            });
                        }
                    }
                }
            }
            _ => {}
        }
    }

    (volume, pages)
}
