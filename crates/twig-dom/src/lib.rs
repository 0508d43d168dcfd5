//! Node tree for the twig parser.
//!
//! # Design
//!
//! The tree is owned top-down: every [`Element`] exclusively owns its
//! children in document order, and there are no parent or sibling links.
//! Nodes are built once by the tree builder and never mutated afterwards,
//! so a plain recursive enum is all that is needed.

use serde::Serialize;

/// Canonical text rendering of a tree.
pub mod render;

pub use render::{render, render_attributes, render_element};

/// Name of the synthetic element wrapping several top-level nodes.
pub const ROOT_ELEMENT_NAME: &str = "Root";

/// A `key=value` pair on an element.
///
/// Attributes keep the order they were written in; that order is used when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    /// Attribute name, as written.
    pub key: String,
    /// Attribute value, as written (no quoting or entity handling).
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name shared by the opening and closing tag.
    pub name: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// Returns the value of the first attribute named `key`.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if this is the synthetic wrapper produced for documents
    /// without a single top-level element.
    #[must_use]
    pub fn is_synthetic_root(&self) -> bool {
        self.name == ROOT_ELEMENT_NAME && self.attributes.is_empty()
    }
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Node {
    /// An element and its subtree.
    Element(Element),
    /// A run of text, exactly as it appeared in the input.
    Text(String),
}

impl Node {
    /// Create an element node.
    #[must_use]
    pub fn element(name: impl Into<String>, attributes: Vec<Attribute>, children: Vec<Self>) -> Self {
        Element::new(name, attributes, children).into()
    }

    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Get the text if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Element(_) => None,
        }
    }

    /// Children of an element; empty for text nodes.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and all its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::element(
            "div",
            vec![Attribute::new("id", "main"), Attribute::new("id", "other")],
            vec![
                Node::element("p", vec![], vec![Node::text("Hello")]),
                Node::text(", "),
                Node::element("p", vec![], vec![Node::text("World")]),
            ],
        )
    }

    #[test]
    fn test_attribute_lookup_returns_first() {
        let node = sample();
        let div = node.as_element().unwrap();
        assert_eq!(div.attribute("id"), Some("main"));
        assert_eq!(div.attribute("class"), None);
    }

    #[test]
    fn test_text_content_is_document_order() {
        assert_eq!(sample().text_content(), "Hello, World");
    }

    #[test]
    fn test_accessors() {
        let text = Node::text("x");
        assert_eq!(text.as_text(), Some("x"));
        assert!(text.as_element().is_none());
        assert!(text.children().is_empty());
        assert_eq!(sample().children().len(), 3);
    }

    #[test]
    fn test_element_constructor_wraps_element() {
        let node = Node::element("br", vec![], vec![]);
        assert_eq!(node, Node::from(Element::new("br", vec![], vec![])));
        assert_eq!(node.as_element().map(|e| e.name.as_str()), Some("br"));
    }

    #[test]
    fn test_synthetic_root_detection() {
        assert!(Element::new(ROOT_ELEMENT_NAME, vec![], vec![]).is_synthetic_root());
        assert!(!Element::new("div", vec![], vec![]).is_synthetic_root());
    }
}
