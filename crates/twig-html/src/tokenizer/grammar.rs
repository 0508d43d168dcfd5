//! Grammar rules for twig markup, built from `twig-combinator`.
//!
//! ```text
//! whitespace  = ( "\r\n" | " " | "\t" | "\r" | "\n" ) *
//! plain_text  = ( any - "<" - ">" ) +
//! tag         = "<" name ( whitespace+ attributes ) ? whitespace ">" whitespace
//! name        = ( any - "<" - ">" - "=" - whitespace ) +
//! attributes  = attribute ( whitespace+ attribute ) *
//! attribute   = key "=" value
//! key         = ( any - "<" - ">" - "=" ) +
//! value       = ( any - "<" - ">" - "=" - whitespace ) +
//! ```
//!
//! A tag whose name starts with `/` is a closing tag; its attributes, if
//! any, are dropped.

use std::sync::LazyLock;

use strum_macros::{Display, EnumIter};
use twig_combinator::{
    BoxedParser, Parser, ParserExt, between, character, eat_left, eat_right, many, many1,
    satisfy, separated_list, word,
};
use twig_dom::Attribute;

use super::token::Token;

/// Top-level rules, in the order the tokenizer tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Rule {
    /// Text outside tags.
    PlainText,
    /// An opening or closing tag.
    Tag,
}

impl Rule {
    /// The memoized parser for this rule.
    #[must_use]
    pub fn parser(self) -> &'static BoxedParser<Token> {
        match self {
            Self::PlainText => LazyLock::force(&PLAIN_TEXT),
            Self::Tag => LazyLock::force(&TAG),
        }
    }
}

/// Parser for [`Rule::PlainText`].
pub static PLAIN_TEXT: LazyLock<BoxedParser<Token>> = LazyLock::new(|| plain_text().boxed());

/// Parser for [`Rule::Tag`].
pub static TAG: LazyLock<BoxedParser<Token>> = LazyLock::new(|| tag().boxed());

/// Characters that separate attributes and trail a tag's `>`.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

const fn is_angle_bracket(c: char) -> bool {
    matches!(c, '<' | '>')
}

/// One or more characters accepted by `predicate`, collected into a string.
fn run_of<F>(predicate: F) -> impl Parser<String>
where
    F: Fn(char) -> bool,
{
    many1(satisfy(predicate)).map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

fn whitespace_char() -> impl Parser<String> {
    word("\r\n").or(satisfy(is_whitespace).map(String::from))
}

/// Zero or more whitespace characters.
#[must_use]
pub fn whitespace() -> impl Parser<String> {
    many(whitespace_char()).map(|parts: Vec<String>| parts.concat())
}

/// At least one whitespace character.
fn whitespace1() -> impl Parser<String> {
    many1(whitespace_char()).map(|parts: Vec<String>| parts.concat())
}

/// Text up to the next angle bracket.
#[must_use]
pub fn plain_text() -> impl Parser<Token> {
    run_of(|c| !is_angle_bracket(c)).map(|text: String| Token::PlainText { text })
}

fn tag_name() -> impl Parser<String> {
    run_of(|c| !is_angle_bracket(c) && c != '=' && !is_whitespace(c))
}

fn attribute_key() -> impl Parser<String> {
    run_of(|c| !is_angle_bracket(c) && c != '=')
}

fn attribute_value() -> impl Parser<String> {
    run_of(|c| !is_angle_bracket(c) && c != '=' && !is_whitespace(c))
}

/// A single `key=value` attribute.
#[must_use]
pub fn attribute() -> impl Parser<Attribute> {
    eat_right(attribute_key(), character('='))
        .and(attribute_value())
        .map(|(key, value): (String, String)| Attribute { key, value })
}

/// Whitespace-separated attributes.
#[must_use]
pub fn attribute_list() -> impl Parser<Vec<Attribute>> {
    separated_list(attribute(), whitespace1())
}

/// An opening or closing tag, including whitespace after its `>`.
#[must_use]
pub fn tag() -> impl Parser<Token> {
    let attributes = eat_left(whitespace1(), attribute_list()).optional();
    let body = eat_right(tag_name().and(attributes), whitespace());
    let close = eat_right(character('>'), whitespace());
    between(character('<'), body, close).map(
        |(name, attributes): (String, Option<Vec<Attribute>>)| match name.strip_prefix('/') {
            Some(closing) => Token::EndTag {
                name: closing.to_owned(),
            },
            None => Token::BeginTag {
                name,
                attributes: attributes.unwrap_or_default(),
            },
        },
    )
}
