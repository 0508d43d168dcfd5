use core::marker::PhantomData;

use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;

/// Zero-or-more repetition.
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

/// Applies `parser` until it fails, collecting results in order.
///
/// Always succeeds, possibly with an empty vector. An application that
/// succeeds without consuming anything is kept and then ends the loop, so a
/// parser that can match the empty string never spins forever.
pub const fn many<P>(parser: P) -> Many<P> {
    Many { parser }
}

impl<T, P> Parser<Vec<T>> for Many<P>
where
    P: Parser<T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, Vec<T>> {
        let mut results = Vec::new();
        let mut remainder = input;
        while let Some((value, next)) = self.parser.parse(remainder) {
            results.push(value);
            if !remainder.is_behind(&next) {
                break;
            }
            remainder = next;
        }
        Some((results, remainder))
    }
}

/// One-or-more repetition.
#[derive(Debug, Clone, Copy)]
pub struct Many1<P> {
    parser: P,
}

/// Like [`many`], but fails unless `parser` matches at least once.
pub const fn many1<P>(parser: P) -> Many1<P> {
    Many1 { parser }
}

impl<T, P> Parser<Vec<T>> for Many1<P>
where
    P: Parser<T>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, Vec<T>> {
        let (first, mut remainder) = self.parser.parse(input)?;
        let mut results = vec![first];
        if !input.is_behind(&remainder) {
            return Some((results, remainder));
        }
        while let Some((value, next)) = self.parser.parse(remainder) {
            results.push(value);
            if !remainder.is_behind(&next) {
                break;
            }
            remainder = next;
        }
        Some((results, remainder))
    }
}

/// Items separated by a delimiter.
#[derive(Debug, Clone, Copy)]
pub struct SeparatedList<P, S, X> {
    item: P,
    separator: S,
    _separator: PhantomData<fn() -> X>,
}

/// Matches `item (separator item)*` and yields the items.
///
/// Fails only if the first item fails. A trailing separator that is not
/// followed by an item is left unconsumed.
pub const fn separated_list<T, X, P, S>(item: P, separator: S) -> SeparatedList<P, S, X>
where
    P: Parser<T>,
    S: Parser<X>,
{
    SeparatedList {
        item,
        separator,
        _separator: PhantomData,
    }
}

impl<T, X, P, S> Parser<Vec<T>> for SeparatedList<P, S, X>
where
    P: Parser<T>,
    S: Parser<X>,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, Vec<T>> {
        let (first, mut remainder) = self.item.parse(input)?;
        let mut items = vec![first];
        loop {
            let Some((_, after_separator)) = self.separator.parse(remainder) else {
                break;
            };
            let Some((value, next)) = self.item.parse(after_separator) else {
                break;
            };
            items.push(value);
            if !remainder.is_behind(&next) {
                break;
            }
            remainder = next;
        }
        Some((items, remainder))
    }
}
