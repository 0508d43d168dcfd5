//! Tokenizer and tree builder for twig markup.
//!
//! # Scope
//!
//! Twig markup is a small HTML-like language: text, opening tags with
//! `key=value` attributes, and closing tags. Documents must be properly
//! nested.
//!
//! - **Tokenizer** ([`tokenizer`]): grammar rules built from
//!   `twig-combinator`, applied in a loop until the input is consumed.
//! - **Tree builder** ([`parser`]): rebuilds nesting from the flat token
//!   stream with an explicit stack.
//!
//! # Not Supported
//!
//! - Self-closing tags, comments and CDATA
//! - Entity decoding or attribute quoting
//! - Recovery from malformed markup
//! - Streaming input

/// Error types.
pub mod error;
/// Tree construction.
pub mod parser;
/// Tokenization.
pub mod tokenizer;

use tracing::debug;
use twig_common::Position;
use twig_dom::Node;

pub use error::{ParseError, Result, StructureError, TokenizeError};
pub use parser::{TreeBuilder, build_tree, format_tree, print_tree};
pub use tokenizer::{Token, Tokenizer, tokenize};

/// Tokenize and build `input` in one call.
///
/// # Errors
///
/// Returns [`ParseError::Tokenize`] if the input cannot be split into
/// tokens, and [`ParseError::Structure`] if the tags are not properly
/// nested. Structure errors carry the position of the offending tag.
pub fn parse(input: &str) -> Result<Node> {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.run()?;
    let offsets = tokenizer.offsets().to_vec();
    debug!(tokens = offsets.len(), "building tree");
    build_tree(tokenizer.into_tokens()).map_err(|source| {
        let offset = offsets
            .get(source.token_index())
            .copied()
            .unwrap_or(input.len());
        ParseError::Structure {
            source,
            position: Position::from_offset(input, offset),
        }
    })
}
