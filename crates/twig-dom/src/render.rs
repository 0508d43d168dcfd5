//! Rendering a tree back to markup.
//!
//! The output is the canonical form of a document: attributes are always
//! double-quoted and appear in source order, and text is written verbatim.
//!
//! Parsing the rendered form again yields an identical tree for trees the
//! parser itself produces from attribute-free markup. Two things fall
//! outside that: attribute values, whose added quotes come back as literal
//! characters, and text that starts with whitespace, which the parser
//! drops after a tag and at the start of input.

use core::fmt;

use crate::{Attribute, Element, Node};

/// Render a node and its subtree.
#[must_use]
pub fn render(node: &Node) -> String {
    match node {
        Node::Element(element) => render_element(element),
        Node::Text(text) => text.clone(),
    }
}

/// Render `<name attrs>children</name>`.
///
/// An element without attributes has no trailing space in its opening tag.
#[must_use]
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(&element.name);
    if !element.attributes.is_empty() {
        out.push(' ');
        out.push_str(&render_attributes(&element.attributes));
    }
    out.push('>');
    for child in &element.children {
        out.push_str(&render(child));
    }
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
    out
}

/// Render attributes as `key="value"` pairs separated by single spaces.
#[must_use]
pub fn render_attributes(attributes: &[Attribute]) -> String {
    attributes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_element(self))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
