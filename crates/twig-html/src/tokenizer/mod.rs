//! Tokenizer for twig markup.
//!
//! The grammar is expressed with `twig-combinator`; this module only adds
//! the driving loop and the token type.

/// Tokenization loop.
pub mod core;
/// Grammar rules built from parser combinators.
pub mod grammar;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{Tokenizer, tokenize};
pub use grammar::Rule;
pub use token::Token;
