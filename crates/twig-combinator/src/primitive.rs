use crate::parser::{ParseResult, Parser};
use crate::stream::Stream;

/// Matches exactly one occurrence of a given character.
#[derive(Debug, Clone, Copy)]
pub struct Character {
    expected: char,
}

/// Succeeds consuming exactly one character equal to `expected`.
#[must_use]
pub const fn character(expected: char) -> Character {
    Character { expected }
}

impl Parser<char> for Character {
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, char> {
        let (c, rest) = input.next_char()?;
        (c == self.expected).then_some((c, rest))
    }
}

/// Matches a literal word.
#[derive(Debug, Clone)]
pub struct Word {
    expected: String,
}

/// Succeeds iff the stream starts with `expected`.
///
/// The word is matched one character at a time; the first mismatch fails the
/// whole parser and the caller keeps its original stream.
#[must_use]
pub fn word(expected: &str) -> Word {
    Word {
        expected: expected.to_owned(),
    }
}

impl Parser<String> for Word {
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, String> {
        let mut remainder = input;
        for expected in self.expected.chars() {
            let (_, next) = character(expected).parse(remainder)?;
            remainder = next;
        }
        Some((self.expected.clone(), remainder))
    }
}

/// Matches one character accepted by a predicate.
#[derive(Debug, Clone, Copy)]
pub struct Satisfy<F> {
    predicate: F,
}

/// Succeeds consuming one character iff `predicate` holds for it.
pub const fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy { predicate }
}

impl<F> Parser<char> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    fn parse<'a>(&self, input: Stream<'a>) -> ParseResult<'a, char> {
        let (c, rest) = input.next_char()?;
        (self.predicate)(c).then_some((c, rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_match() {
        let (c, rest) = character('<').parse(Stream::new("<p>")).unwrap();
        assert_eq!(c, '<');
        assert_eq!(rest.rest(), "p>");
    }

    #[test]
    fn test_character_mismatch_and_empty() {
        assert!(character('<').parse(Stream::new("p>")).is_none());
        assert!(character('<').parse(Stream::new("")).is_none());
    }

    #[test]
    fn test_word_full_match() {
        let (w, rest) = word("\r\n").parse(Stream::new("\r\nabc")).unwrap();
        assert_eq!(w, "\r\n");
        assert_eq!(rest.rest(), "abc");
    }

    #[test]
    fn test_word_partial_match_fails() {
        assert!(word("hello").parse(Stream::new("help")).is_none());
        assert!(word("hello").parse(Stream::new("hell")).is_none());
    }

    #[test]
    fn test_empty_word_always_matches() {
        let (w, rest) = word("").parse(Stream::new("abc")).unwrap();
        assert!(w.is_empty());
        assert_eq!(rest.offset(), 0);
    }

    #[test]
    fn test_satisfy() {
        let not_angle = satisfy(|c| c != '<' && c != '>');
        assert!(not_angle.parse(Stream::new("a")).is_some());
        assert!(not_angle.parse(Stream::new(">")).is_none());
    }
}
