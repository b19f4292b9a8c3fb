//! XML utility functions for navigating and extracting data from TEI trees.
//!
//! All lookups are by local tag name: GROBID emits its TEI in the default
//! `http://www.tei-c.org/ns/1.0` namespace, and attributes like `xml:id`
//! live in the XML namespace. Matching on local names resolves both without
//! callers ever spelling out a namespace URI. Absence is always an `Option`,
//! never an error.

use roxmltree::Node;

/// The TEI namespace GROBID documents are declared in.
pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use grobid_client::xml::tag_name;
///
/// let xml = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text/></TEI>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(tag_name(doc.root_element()), "TEI");
/// ```
pub fn tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given local tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Local tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use grobid_client::xml::find_child;
///
/// let xml = r#"<author><persName/><email/></author>"#;
/// let doc = Document::parse(xml).unwrap();
/// let author = doc.root_element();
///
/// assert!(find_child(author, "persName").is_some());
/// assert!(find_child(author, "idno").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && tag_name(*child) == tag)
}

/// Find all child elements with the given local tag name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use grobid_client::xml::find_children;
///
/// let xml = r#"<analytic><author/><author/><title/></analytic>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let authors: Vec<_> = find_children(doc.root_element(), "author").collect();
/// assert_eq!(authors.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && tag_name(*child) == tag)
}

/// Find a descendant element matching a path of local tag names.
///
/// # Arguments
/// * `node` - Starting node
/// * `path` - Slash-separated path of tag names (e.g., "fileDesc/titleStmt/title")
///
/// # Returns
/// Matching element, or `None` if any step of the path is missing
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;

    for part in path.split('/') {
        current = find_child(current, part)?;
    }

    Some(current)
}

/// Find the first descendant element with the given local tag name.
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && tag_name(*n) == tag)
}

/// All descendant elements with the given local tag name, in document order.
pub fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && tag_name(*n) == tag)
}

/// Get an attribute value by local name.
///
/// Matches namespaced attributes such as `xml:id` by their local part.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use grobid_client::xml::attribute;
///
/// let xml = r#"<biblStruct xml:id="b0" type="article"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// let bibl = doc.root_element();
///
/// assert_eq!(attribute(bibl, "id"), Some("b0"));
/// assert_eq!(attribute(bibl, "type"), Some("article"));
/// assert_eq!(attribute(bibl, "missing"), None);
/// ```
pub fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}

/// Get the trimmed text of a node, or `None` if there is no text or the
/// text is only whitespace.
///
/// This is the absent-vs-empty boundary: `<title></title>` and
/// `<title>  </title>` both map to `None`, never to `Some("")`.
pub fn own_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Get the trimmed text of the first child with the given tag name.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag).and_then(own_text)
}

/// Deep text extraction from a node, including text held by nested
/// elements and their tails.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use grobid_client::xml::text_content;
///
/// let xml = r##"<p>Hello <ref target="#b0">world</ref>!</p>"##;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(text_content(doc.root_element()), "Hello world!");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    let mut text = String::new();

    if let Some(t) = node.text() {
        text.push_str(t);
    }

    for child in node.children() {
        if child.is_element() {
            text.push_str(&text_content(child));
        }
        if let Some(tail) = child.tail() {
            text.push_str(tail);
        }
    }

    text.trim().to_string()
}

/// Deep text of a node as an optional value: `None` when the node holds
/// nothing but whitespace.
pub fn text_content_opt(node: Node<'_, '_>) -> Option<String> {
    let text = text_content(node);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
