use core::marker::PhantomData;

use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::stream::Stream;

/// Transforms the output of a parser.
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F, A> {
    parser: P,
    transform: F,
    _input: PhantomData<fn() -> A>,
}

/// Maps a successful result of `parser` through `transform`.
pub const fn map<A, B, P, F>(parser: P, transform: F) -> Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    Map {
        parser,
        transform,
        _input: PhantomData,
    }
}

impl<A, B, P, F> Parser<B> for Map<P, F, A>
where
    P: Parser<A>,
    F: Fn(A) -> B,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, B> {
        let (value, rest) = self.parser.parse(input)?;
        Some(((self.transform)(value), rest))
    }
}

/// Makes a parser optional.
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

/// Always succeeds: `Some(value)` if `parser` matched, otherwise `None`
/// with the input left untouched.
pub const fn optional<P>(parser: P) -> Optional<P> {
    Optional { parser }
}

impl<T, P> Parser<Option<T>> for Optional<P>
where
    P: Parser<T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, Option<T>> {
        match self.parser.parse(input) {
            Some((value, rest)) => Some((Some(value), rest)),
            None => Some((None, input)),
        }
    }
}

/// Ordered choice between two parsers.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

/// Tries `first`, falling back to `second` on the original input.
pub const fn or<T, A, B>(first: A, second: B) -> Or<A, B>
where
    A: Parser<T>,
    B: Parser<T>,
{
    Or { first, second }
}

impl<T, A, B> Parser<T> for Or<A, B>
where
    A: Parser<T>,
    B: Parser<T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        self.first
            .parse(input)
            .or_else(|| self.second.parse(input))
    }
}

/// Ordered choice over a list of parsers.
#[derive(Debug)]
pub struct Choice<T> {
    alternatives: Vec<BoxedParser<T>>,
}

/// Tries each alternative in order and commits to the first success.
///
/// This is not longest-match: an earlier alternative that matches a short
/// prefix wins over a later one that would have consumed more.
#[must_use]
pub const fn choice<T>(alternatives: Vec<BoxedParser<T>>) -> Choice<T> {
    Choice { alternatives }
}

impl<T> Parser<T> for Choice<T> {
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        self.alternatives
            .iter()
            .find_map(|alternative| alternative.parse(input))
    }
}

/// Runs two parsers in sequence.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B> {
    first: A,
    second: B,
}

/// Succeeds if `first` and then `second` both succeed; yields both values.
pub const fn and<X, Y, A, B>(first: A, second: B) -> And<A, B>
where
    A: Parser<X>,
    B: Parser<Y>,
{
    And { first, second }
}

impl<X, Y, A, B> Parser<(X, Y)> for And<A, B>
where
    A: Parser<X>,
    B: Parser<Y>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, (X, Y)> {
        let (x, rest) = self.first.parse(input)?;
        let (y, rest) = self.second.parse(rest)?;
        Some(((x, y), rest))
    }
}

/// A body parser wrapped in delimiters.
#[derive(Debug, Clone, Copy)]
pub struct Between<O, P, C, X, Z> {
    open: O,
    body: P,
    close: C,
    _delimiters: PhantomData<fn() -> (X, Z)>,
}

/// Matches `open`, `body`, `close` in order and keeps only the body.
pub const fn between<X, T, Z, O, P, C>(open: O, body: P, close: C) -> Between<O, P, C, X, Z>
where
    O: Parser<X>,
    P: Parser<T>,
    C: Parser<Z>,
{
    Between {
        open,
        body,
        close,
        _delimiters: PhantomData,
    }
}

impl<X, T, Z, O, P, C> Parser<T> for Between<O, P, C, X, Z>
where
    O: Parser<X>,
    P: Parser<T>,
    C: Parser<Z>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        let (_, rest) = self.open.parse(input)?;
        let (value, rest) = self.body.parse(rest)?;
        let (_, rest) = self.close.parse(rest)?;
        Some((value, rest))
    }
}

/// Sequence that discards the left result.
#[derive(Debug, Clone, Copy)]
pub struct EatLeft<L, R, X> {
    left: L,
    right: R,
    _left: PhantomData<fn() -> X>,
}

/// Matches `left` then `right`, yielding only the right value.
pub const fn eat_left<X, T, L, R>(left: L, right: R) -> EatLeft<L, R, X>
where
    L: Parser<X>,
    R: Parser<T>,
{
    EatLeft {
        left,
        right,
        _left: PhantomData,
    }
}

impl<X, T, L, R> Parser<T> for EatLeft<L, R, X>
where
    L: Parser<X>,
    R: Parser<T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        let (_, rest) = self.left.parse(input)?;
        self.right.parse(rest)
    }
}

/// Sequence that discards the right result.
#[derive(Debug, Clone, Copy)]
pub struct EatRight<L, R, Z> {
    left: L,
    right: R,
    _right: PhantomData<fn() -> Z>,
}

/// Matches `left` then `right`, yielding only the left value.
pub const fn eat_right<T, Z, L, R>(left: L, right: R) -> EatRight<L, R, Z>
where
    L: Parser<T>,
    R: Parser<Z>,
{
    EatRight {
        left,
        right,
        _right: PhantomData,
    }
}

impl<T, Z, L, R> Parser<T> for EatRight<L, R, Z>
where
    L: Parser<T>,
    R: Parser<Z>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, T> {
        let (value, rest) = self.left.parse(input)?;
        let (_, rest) = self.right.parse(rest)?;
        Some((value, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParserExt;
    use crate::primitive::{character, satisfy, word};

    #[test]
    fn test_map_transforms_value() {
        let upper = map(character('a'), |c: char| c.to_ascii_uppercase());
        let (value, _) = upper.parse(Stream::new("ab")).unwrap();
        assert_eq!(value, 'A');
        assert!(upper.parse(Stream::new("b")).is_none());
    }

    #[test]
    fn test_optional_keeps_input_on_failure() {
        let maybe_slash = optional(character('/'));
        let (value, rest) = maybe_slash.parse(Stream::new("p>")).unwrap();
        assert_eq!(value, None);
        assert_eq!(rest.offset(), 0);

        let (value, rest) = maybe_slash.parse(Stream::new("/p>")).unwrap();
        assert_eq!(value, Some('/'));
        assert_eq!(rest.rest(), "p>");
    }

    #[test]
    fn test_or_is_ordered() {
        let short_first = or(word("a"), word("ab"));
        let (value, rest) = short_first.parse(Stream::new("abc")).unwrap();
        assert_eq!(value, "a");
        assert_eq!(rest.rest(), "bc");
    }

    #[test]
    fn test_choice_picks_first_success() {
        let parser = choice(vec![
            word("<!").boxed(),
            word("<").boxed(),
            word("<p").boxed(),
        ]);
        let (value, _) = parser.parse(Stream::new("<p>")).unwrap();
        assert_eq!(value, "<");
        assert!(parser.parse(Stream::new("p")).is_none());
        assert!(choice::<String>(Vec::new()).parse(Stream::new("p")).is_none());
    }

    #[test]
    fn test_and_requires_both() {
        let pair = and(character('<'), character('/'));
        let ((open, slash), rest) = pair.parse(Stream::new("</a>")).unwrap();
        assert_eq!((open, slash), ('<', '/'));
        assert_eq!(rest.rest(), "a>");
        assert!(pair.parse(Stream::new("<a>")).is_none());
    }

    #[test]
    fn test_between_discards_delimiters() {
        let name = satisfy(|c| c != '<' && c != '>').many1();
        let tag = between(character('<'), name, character('>'));
        let (chars, rest) = tag.parse(Stream::new("<div>text")).unwrap();
        assert_eq!(chars.into_iter().collect::<String>(), "div");
        assert_eq!(rest.rest(), "text");

        // missing close delimiter
        assert!(tag.parse(Stream::new("<div")).is_none());
    }

    #[test]
    fn test_eat_left_and_eat_right() {
        let after_eq = eat_left(character('='), character('1'));
        let (value, _) = after_eq.parse(Stream::new("=1")).unwrap();
        assert_eq!(value, '1');

        let before_eq = eat_right(character('k'), character('='));
        let (value, rest) = before_eq.parse(Stream::new("k=v")).unwrap();
        assert_eq!(value, 'k');
        assert_eq!(rest.rest(), "v");
        assert!(before_eq.parse(Stream::new("kv")).is_none());
    }
}
