//! Mappers for full-text structures: sections, abstract, figures, keywords.

use roxmltree::Node;
use tracing::debug;

use crate::types::{Figure, FigureKind, Section};
use crate::xml::{
    attribute, child_text, descendants_named, find_child, find_children, text_content,
    text_content_opt,
};

/// Map an `<abstract>` element into its text, paragraphs joined with
/// blank lines.
///
/// An abstract that holds nothing but whitespace maps to `None`, not to
/// an empty string.
pub fn map_abstract(node: Node<'_, '_>) -> Option<String> {
    let paragraphs: Vec<String> = descendants_named(node, "p")
        .filter_map(text_content_opt)
        .collect();

    if paragraphs.is_empty() {
        // Some documents put the abstract text directly in the element
        text_content_opt(node)
    } else {
        Some(paragraphs.join("\n\n"))
    }
}

/// Collect body sections from `<div>` elements, depth-first in document
/// order.
///
/// A section's paragraphs are its direct `<p>` children; nested `<div>`s
/// become their own sections one level deeper. A `<div>` with neither a
/// heading nor paragraph text contributes no section of its own but its
/// children are still walked.
pub fn collect_sections(body: Node<'_, '_>) -> Vec<Section> {
    let mut sections = Vec::new();
    collect_sections_into(body, 1, &mut sections);
    sections
}

fn collect_sections_into(node: Node<'_, '_>, level: u32, sections: &mut Vec<Section>) {
    for div in find_children(node, "div") {
        let heading = find_child(div, "head").and_then(text_content_opt);
        let paragraphs: Vec<String> = find_children(div, "p")
            .filter_map(text_content_opt)
            .collect();

        if heading.is_none() && paragraphs.is_empty() {
            debug!(level, "Skipping <div> without heading or text");
        } else {
            sections.push(Section {
                heading,
                paragraphs,
                level,
            });
        }

        collect_sections_into(div, level + 1, sections);
    }
}

/// Map a `<figure>` element into a [`Figure`].
///
/// Returns `None` for a figure with nothing extractable.
pub fn map_figure(node: Node<'_, '_>) -> Option<Figure> {
    let kind = if attribute(node, "type") == Some("table") {
        FigureKind::Table
    } else {
        FigureKind::Figure
    };

    let figure = Figure {
        id: attribute(node, "id").map(str::to_string),
        label: child_text(node, "label"),
        caption: find_child(node, "figDesc")
            .and_then(text_content_opt)
            .or_else(|| find_child(node, "head").and_then(text_content_opt)),
        kind,
        graphic_ref: find_child(node, "graphic")
            .and_then(|g| attribute(g, "url").or_else(|| attribute(g, "coords")))
            .map(str::to_string),
        rows: find_child(node, "table").map(map_rows).unwrap_or_default(),
    };

    if figure.id.is_none()
        && figure.label.is_none()
        && figure.caption.is_none()
        && figure.graphic_ref.is_none()
        && figure.rows.is_empty()
    {
        return None;
    }

    Some(figure)
}

/// Map a `<table>` element into rows of cell texts.
///
/// Cells are positional, so an empty `<cell>` stays an empty string
/// rather than being dropped.
fn map_rows(table: Node<'_, '_>) -> Vec<Vec<String>> {
    find_children(table, "row")
        .map(|row| find_children(row, "cell").map(text_content).collect())
        .collect()
}

/// Map a `<keywords>` element into its `<term>` texts, in source order.
///
/// Terms are normalized: leading non-alphabetic characters dropped, the
/// first letter upper-cased, the rest lower-cased. A term with no
/// letters at all is dropped.
pub fn map_keywords(node: Node<'_, '_>) -> Vec<String> {
    descendants_named(node, "term")
        .filter_map(text_content_opt)
        .filter_map(|term| clean_term(&term))
        .collect()
}

fn clean_term(term: &str) -> Option<String> {
    let stripped = term.trim_start_matches(|c: char| !c.is_alphabetic());
    let mut chars = stripped.chars();
    let first = chars.next()?;

    let mut cleaned: String = first.to_uppercase().collect();
    cleaned.extend(chars.flat_map(char::to_lowercase));
    Some(cleaned)
}
