//! Mappers for persons: authors, names, affiliations, addresses.

use roxmltree::Node;
use tracing::warn;

use crate::types::{Address, Affiliation, Author};
use crate::xml::{
    attribute, child_text, descendants_named, find_child, find_children, own_text,
    text_content_opt,
};

/// Map all `<author>` descendants of a node, in source order.
///
/// An author that yields no name at all is skipped; its siblings are
/// unaffected.
pub fn map_authors(scope: Node<'_, '_>) -> Vec<Author> {
    descendants_named(scope, "author")
        .filter_map(|node| {
            let author = map_author(node);
            if author.is_none() {
                warn!("Skipping <author> without an extractable name");
            }
            author
        })
        .collect()
}

/// Map a single `<author>` element.
///
/// Returns `None` when neither a structured name nor a raw name string
/// could be extracted.
pub fn map_author(node: Node<'_, '_>) -> Option<Author> {
    let (given_name, surname) = match find_child(node, "persName") {
        Some(pers_name) => map_person_name(pers_name),
        None => (None, None),
    };

    if given_name.is_none() && surname.is_none() {
        return None;
    }

    Some(Author {
        given_name,
        surname,
        email: child_text(node, "email"),
        affiliations: find_children(node, "affiliation")
            .filter_map(map_affiliation)
            .collect(),
    })
}

/// Map a `<persName>` into `(given_name, surname)`.
///
/// The structured sub-elements win: `<surname>` and the first
/// `<forename type="first">` (any `<forename>` as fallback). When the
/// element carries only an unstructured text node, that text is stored
/// as the surname with the given name absent -- no whitespace-guess
/// splitting is attempted.
pub fn map_person_name(node: Node<'_, '_>) -> (Option<String>, Option<String>) {
    let surname = child_text(node, "surname");
    let given_name = find_children(node, "forename")
        .find(|n| attribute(*n, "type") == Some("first"))
        .and_then(own_text)
        .or_else(|| child_text(node, "forename"));

    if surname.is_none() && given_name.is_none() {
        if let Some(raw) = text_content_opt(node) {
            return (None, Some(raw));
        }
    }

    (given_name, surname)
}

/// Map an `<affiliation>` element.
///
/// Every level of the nested structure defaults to absent on its own;
/// a missing address never suppresses the institution and vice versa.
pub fn map_affiliation(node: Node<'_, '_>) -> Option<Affiliation> {
    let mut affiliation = Affiliation {
        institution: None,
        department: None,
        laboratory: None,
        address: None,
    };

    for org_name in find_children(node, "orgName") {
        match attribute(org_name, "type") {
            Some("institution") => affiliation.institution = own_text(org_name),
            Some("department") => affiliation.department = own_text(org_name),
            Some("laboratory") => affiliation.laboratory = own_text(org_name),
            _ => {}
        }
    }

    affiliation.address = find_child(node, "address").and_then(map_address);

    if affiliation.is_empty() {
        None
    } else {
        Some(affiliation)
    }
}

/// Map an `<address>` element.
pub fn map_address(node: Node<'_, '_>) -> Option<Address> {
    let address = Address {
        settlement: child_text(node, "settlement"),
        region: child_text(node, "region"),
        country: child_text(node, "country"),
        post_code: child_text(node, "postCode"),
    };

    if address.is_empty() {
        None
    } else {
        Some(address)
    }
}
