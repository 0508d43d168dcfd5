use core::fmt;

use crate::combinator::{And, Map, Optional, Or};
use crate::repeat::{Many, Many1};
use crate::stream::Stream;

/// Outcome of a single parse step: the produced value and the remainder,
/// or `None` when the input does not match.
pub type ParseResult<'a, T> = Option<(T, Stream<'a>)>;

/// A parser producing values of type `T`.
///
/// Implementations must be pure: the same stream always yields the same
/// result, and a `None` result says nothing about how much input was looked
/// at.
pub trait Parser<T> {
    /// Run the parser against `input`.
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T>;
}

/// Plain functions of the right shape are parsers.
impl<T, F> Parser<T> for F
where
    F: for<'a> Fn(Stream<'a>) -> ParseResult<'a, T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        self(input)
    }
}

/// A type-erased parser.
///
/// Used where alternatives of different concrete types have to live in one
/// list (see [`crate::choice`]) and for grammar rules stored in statics.
pub struct BoxedParser<T> {
    inner: Box<dyn Parser<T> + Send + Sync>,
}

impl<T> BoxedParser<T> {
    /// Erase the concrete type of `parser`.
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<T> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(parser),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        self.inner.parse(input)
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

/// Method-style access to the combinators.
pub trait ParserExt<T>: Parser<T> + Sized {
    /// See [`crate::map`].
    fn map<B, F>(self, transform: F) -> Map<Self, F, T>
    where
        F: Fn(T) -> B,
    {
        crate::combinator::map(self, transform)
    }

    /// See [`crate::or`].
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<T>,
    {
        crate::combinator::or(self, other)
    }

    /// See [`crate::and`].
    fn and<U, P>(self, other: P) -> And<Self, P>
    where
        P: Parser<U>,
    {
        crate::combinator::and(self, other)
    }

    /// See [`crate::optional`].
    fn optional(self) -> Optional<Self> {
        crate::combinator::optional(self)
    }

    /// See [`crate::many`].
    fn many(self) -> Many<Self> {
        crate::repeat::many(self)
    }

    /// See [`crate::many1`].
    fn many1(self) -> Many1<Self> {
        crate::repeat::many1(self)
    }

    /// Erase the concrete parser type.
    fn boxed(self) -> BoxedParser<T>
    where
        Self: Send + Sync + 'static,
    {
        BoxedParser::new(self)
    }
}

impl<T, P: Parser<T>> ParserExt<T> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::character;

    fn anything(input: Stream<'_>) -> ParseResult<'_, char> {
        input.next_char()
    }

    #[test]
    fn test_function_is_a_parser() {
        let (c, rest) = anything.parse(Stream::new("xy")).unwrap();
        assert_eq!(c, 'x');
        assert_eq!(rest.rest(), "y");
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let boxed = character('a').boxed();
        assert!(boxed.parse(Stream::new("abc")).is_some());
        assert!(boxed.parse(Stream::new("bc")).is_none());
    }
}
