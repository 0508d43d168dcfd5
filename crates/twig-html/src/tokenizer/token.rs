use core::fmt;

use serde::Serialize;
use strum_macros::IntoStaticStr;
use twig_dom::Attribute;

/// A lexical unit of the markup.
///
/// The tokenizer emits these in document order; the tree builder is the
/// only consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum Token {
    /// A run of characters outside any tag.
    PlainText {
        /// The text, verbatim.
        text: String,
    },

    /// An opening tag such as `<a href=x>`.
    BeginTag {
        /// Tag name.
        name: String,
        /// Attributes in source order; empty if the tag has none.
        attributes: Vec<Attribute>,
    },

    /// A closing tag such as `</a>`.
    EndTag {
        /// Tag name, without the leading slash.
        name: String,
    },
}

impl Token {
    /// Create a plain text token.
    #[must_use]
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Create an opening tag token.
    #[must_use]
    pub fn begin_tag(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::BeginTag {
            name: name.into(),
            attributes,
        }
    }

    /// Create a closing tag token.
    #[must_use]
    pub fn end_tag(name: impl Into<String>) -> Self {
        Self::EndTag { name: name.into() }
    }

    /// Variant name, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainText { text } => f.write_str(text),
            Self::BeginTag { name, attributes } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {attr}")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
        }
    }
}
