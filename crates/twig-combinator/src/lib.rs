//! Parser combinators for the twig tokenizer.
//!
//! # Model
//!
//! A parser is anything implementing [`Parser<T>`]: given a [`Stream`] it
//! either produces a value together with the unconsumed remainder, or
//! returns `None`. A `None` is not an error. It is the ordinary signal that
//! drives ordered choice and repetition, so no combinator in this crate ever
//! panics or allocates an error value.
//!
//! Streams are `Copy` views into the original input. Failing parsers simply
//! drop the view they were handed, which means a failed alternative never
//! leaks partial consumption into the next one.
//!
//! # Building blocks
//!
//! - **Primitives**: [`character`], [`word`], [`satisfy`]
//! - **Repetition**: [`many`], [`many1`], [`separated_list`]
//! - **Composition**: [`map`], [`optional`], [`or`], [`choice`], [`and`],
//!   [`between`], [`eat_left`], [`eat_right`]
//!
//! The same combinators are available as methods through [`ParserExt`].
//!
//! ```
//! use twig_combinator::{Parser, ParserExt, Stream, many1, satisfy};
//!
//! let digits = many1(satisfy(|c| c.is_ascii_digit()))
//!     .map(|chars: Vec<char>| chars.into_iter().collect::<String>());
//! let (value, rest) = digits.parse(Stream::new("42px")).unwrap();
//! assert_eq!(value, "42");
//! assert_eq!(rest.rest(), "px");
//! ```

/// Sequencing, alternation and transformation combinators.
pub mod combinator;
/// The `Parser` trait and type-erased parsers.
pub mod parser;
/// Single-character and literal-word primitives.
pub mod primitive;
/// Repetition combinators.
pub mod repeat;
/// The input stream parsers operate on.
pub mod stream;

pub use combinator::{
    And, Between, Choice, EatLeft, EatRight, Map, Optional, Or, and, between, choice, eat_left,
    eat_right, map, optional, or,
};
pub use parser::{BoxedParser, ParseResult, Parser, ParserExt};
pub use primitive::{Character, Satisfy, Word, character, satisfy, word};
pub use repeat::{Many, Many1, SeparatedList, many, many1, separated_list};
pub use stream::Stream;
