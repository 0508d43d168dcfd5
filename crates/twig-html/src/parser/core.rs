use tracing::{debug, trace};
use twig_dom::{Attribute, Node, ROOT_ELEMENT_NAME};

use crate::error::StructureError;
use crate::tokenizer::Token;

/// An entry on the build stack.
#[derive(Debug)]
enum PendingItem {
    /// An opening tag still waiting for its closing tag.
    Open {
        name: String,
        attributes: Vec<Attribute>,
        token_index: usize,
    },
    /// Text not yet attached to a parent.
    Text(String),
    /// A finished subtree not yet attached to a parent.
    Node(Node),
}

impl PendingItem {
    fn into_node(self) -> Result<Node, StructureError> {
        match self {
            Self::Open {
                name, token_index, ..
            } => Err(StructureError::UnclosedTag { name, token_index }),
            Self::Text(text) => Ok(Node::Text(text)),
            Self::Node(node) => Ok(node),
        }
    }
}

/// Rebuilds the nested tree from a flat token stream.
///
/// Opening tags and text are pushed onto a stack. A closing tag pops items
/// until the nearest opening tag with the same name, and replaces them with
/// one element holding the popped items as children.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    stack: Vec<PendingItem>,
    root_name: String,
}

impl TreeBuilder {
    /// Create a builder for a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            stack: Vec::new(),
            root_name: ROOT_ELEMENT_NAME.to_owned(),
        }
    }

    /// Name to give the synthetic element that wraps multiple (or zero)
    /// top-level nodes. Defaults to [`ROOT_ELEMENT_NAME`].
    #[must_use]
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Run the builder and return the tree.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnmatchedEndTag`] for a closing tag with no
    /// open element of that name, and [`StructureError::UnclosedTag`] for an
    /// opening tag that is never closed.
    pub fn run(mut self) -> Result<Node, StructureError> {
        let tokens = std::mem::take(&mut self.tokens);
        for (token_index, token) in tokens.into_iter().enumerate() {
            trace!(token_index, kind = token.kind(), "processing token");
            match token {
                Token::PlainText { text } => self.stack.push(PendingItem::Text(text)),
                Token::BeginTag { name, attributes } => self.stack.push(PendingItem::Open {
                    name,
                    attributes,
                    token_index,
                }),
                Token::EndTag { name } => self.close_element(name, token_index)?,
            }
        }
        self.finish()
    }

    /// Pop back to the nearest open `name` and wrap everything above it.
    fn close_element(&mut self, name: String, token_index: usize) -> Result<(), StructureError> {
        let mut popped = Vec::new();
        let attributes = loop {
            match self.stack.pop() {
                Some(PendingItem::Open {
                    name: open_name,
                    attributes,
                    ..
                }) if open_name == name => break attributes,
                Some(item) => popped.push(item),
                None => return Err(StructureError::UnmatchedEndTag { name, token_index }),
            }
        };
        popped.reverse();
        let children = popped
            .into_iter()
            .map(PendingItem::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(%name, children = children.len(), "closed element");
        self.stack
            .push(PendingItem::Node(Node::element(name, attributes, children)));
        Ok(())
    }

    fn finish(self) -> Result<Node, StructureError> {
        let mut nodes = self
            .stack
            .into_iter()
            .map(PendingItem::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        if nodes.len() == 1
            && let Some(node) = nodes.pop()
        {
            return Ok(node);
        }
        debug!(count = nodes.len(), root = %self.root_name, "wrapping top-level nodes");
        Ok(Node::element(self.root_name, Vec::new(), nodes))
    }
}

/// Build a tree from tokens with the default root name.
///
/// # Errors
///
/// See [`TreeBuilder::run`].
pub fn build_tree(tokens: Vec<Token>) -> Result<Node, StructureError> {
    TreeBuilder::new(tokens).run()
}

/// Format a tree for debugging, one node per line.
///
/// Text is quoted with newlines shown as `\n` and spaces as `·`, so that
/// whitespace-only text nodes are visible.
#[must_use]
pub fn format_tree(node: &Node) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, 0);
    out
}

fn write_tree(out: &mut String, node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        Node::Element(element) => {
            if element.attributes.is_empty() {
                out.push_str(&format!("{prefix}<{}>\n", element.name));
            } else {
                let attrs = twig_dom::render_attributes(&element.attributes);
                out.push_str(&format!("{prefix}<{} {attrs}>\n", element.name));
            }
            for child in &element.children {
                write_tree(out, child, indent + 1);
            }
        }
        Node::Text(text) => {
            let display = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
            out.push_str(&format!("{prefix}\"{display}\"\n"));
        }
    }
}

/// Print a tree to stdout, see [`format_tree`].
pub fn print_tree(node: &Node) {
    print!("{}", format_tree(node));
}
