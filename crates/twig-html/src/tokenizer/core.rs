use std::collections::HashSet;

use strum::IntoEnumIterator;
use tracing::{debug, trace};
use twig_combinator::{Parser, Stream};
use twig_common::warning::warn_once;

use super::grammar::{Rule, whitespace};
use super::token::Token;
use crate::error::TokenizeError;

/// Splits markup into [`Token`]s.
///
/// Whitespace at the very start of the input is skipped, the same way it is
/// skipped after every tag. Each pass over the remaining input then tries
/// every [`Rule`] once, in order, against whatever is left after the
/// previous rule. A pass that consumes nothing means the input cannot be
/// tokenized and is reported as [`TokenizeError::Stalled`].
pub struct Tokenizer<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    /// Byte offset at which each token in `tokens` starts.
    offsets: Vec<usize>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// Tokenize the whole input, replacing the tokens of any earlier run.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::Stalled`] if some part of the input is
    /// neither text nor a well-formed tag, e.g. a stray `>` or an
    /// unterminated `<div`.
    pub fn run(&mut self) -> Result<(), TokenizeError> {
        self.tokens.clear();
        self.offsets.clear();
        let mut remainder = Stream::new(self.input);
        if let Some((skipped, next)) = whitespace().parse(remainder) {
            trace!(len = skipped.len(), "skipped leading whitespace");
            remainder = next;
        }
        while !remainder.is_empty() {
            let before = remainder;
            for rule in Rule::iter() {
                if let Some((token, next)) = rule.parser().parse(remainder) {
                    trace!(%rule, offset = remainder.offset(), %token, "matched");
                    self.emit(remainder.offset(), token);
                    remainder = next;
                }
            }
            if !before.is_behind(&remainder) {
                debug!(offset = remainder.offset(), "tokenizer made no progress");
                return Err(TokenizeError::stalled(self.input, remainder.offset()));
            }
        }
        debug!(count = self.tokens.len(), "tokenization finished");
        Ok(())
    }

    /// Tokens produced so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Byte offset of each token, parallel to [`Self::tokens`].
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after `run()` to get the tokens for the tree builder.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn emit(&mut self, offset: usize, token: Token) {
        if let Token::BeginTag { name, attributes } = &token {
            let mut seen = HashSet::new();
            for attr in attributes {
                if !seen.insert(attr.key.as_str()) {
                    warn_once(
                        "Tokenizer",
                        &format!("duplicate attribute '{}' on <{name}>", attr.key),
                    );
                }
            }
        }
        self.tokens.push(token);
        self.offsets.push(offset);
    }
}

/// Tokenize `input` in one call.
///
/// # Errors
///
/// See [`Tokenizer::run`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.run()?;
    Ok(tokenizer.into_tokens())
}

#[cfg(test)]
mod tests {
    use twig_common::warning::was_warned;
    use twig_dom::Attribute;

    use super::*;

    #[test]
    fn test_offsets_track_token_starts() {
        let mut tokenizer = Tokenizer::new("<p>Hi</p>");
        tokenizer.run().unwrap();
        assert_eq!(tokenizer.offsets(), &[0, 3, 5]);
        assert_eq!(tokenizer.tokens().len(), 3);
    }

    #[test]
    fn test_text_and_tag_in_one_pass() {
        // both rules fire in the same pass: text first, then the tag after it
        let tokens = tokenize("Hello<br>").unwrap();
        assert_eq!(
            tokens,
            vec![Token::plain_text("Hello"), Token::begin_tag("br", vec![])]
        );
    }

    #[test]
    fn test_duplicate_attribute_is_kept_and_warned() {
        let tokens = tokenize("<p dup=1 dup=2>").unwrap();
        assert_eq!(
            tokens,
            vec![Token::begin_tag(
                "p",
                vec![Attribute::new("dup", "1"), Attribute::new("dup", "2")]
            )]
        );
        assert!(was_warned("Tokenizer", "duplicate attribute 'dup' on <p>"));
    }

    #[test]
    fn test_run_twice_replaces_tokens() {
        let mut tokenizer = Tokenizer::new("<p>Hi</p>");
        tokenizer.run().unwrap();
        tokenizer.run().unwrap();
        assert_eq!(tokenizer.tokens().len(), 3);
        assert_eq!(tokenizer.offsets(), &[0, 3, 5]);
    }

    #[test]
    fn test_leading_whitespace_keeps_offsets() {
        let mut tokenizer = Tokenizer::new(" \n<p>");
        tokenizer.run().unwrap();
        assert_eq!(tokenizer.tokens(), &[Token::begin_tag("p", vec![])]);
        assert_eq!(tokenizer.offsets(), &[2]);
    }

    #[test]
    fn test_stall_reports_offset() {
        let err = tokenize("ok>").unwrap_err();
        assert_eq!(err.offset(), 2);
    }
}
