/// An immutable, position-advancing view over the input text.
///
/// Advancing never mutates the stream; it returns a new view sharing the
/// same source. The byte offset is kept so that callers can tell whether a
/// parser made progress and can report where a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stream<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Stream<'a> {
    /// Create a stream positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The complete text this stream was created from.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the current position within [`Self::source`].
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The unconsumed remainder.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Look at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Split off the next character, returning it with the advanced stream.
    #[must_use]
    pub fn next_char(self) -> Option<(char, Self)> {
        let c = self.peek()?;
        Some((
            c,
            Self {
                source: self.source,
                offset: self.offset + c.len_utf8(),
            },
        ))
    }

    /// Returns true if `other` is further along the same input than `self`.
    #[must_use]
    pub const fn is_behind(&self, other: &Self) -> bool {
        self.offset < other.offset
    }
}
