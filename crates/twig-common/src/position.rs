//! Source positions for diagnostics.
//!
//! Parsers track plain byte offsets; they are only turned into human-facing
//! line/column pairs when an error is reported.

use core::fmt;

/// A 1-based line/column location in a source text.
///
/// Columns count characters, not bytes, so multi-byte text lines up with
/// what an editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Compute the position of byte `offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to the end. An offset
    /// that falls inside a multi-byte character is attributed to that
    /// character.
    #[must_use]
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (index, c) in source.char_indices() {
            if index >= offset {
                break;
            }
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_input() {
        assert_eq!(Position::from_offset("abc", 0), Position { line: 1, column: 1 });
    }

    #[test]
    fn test_offset_on_second_line() {
        let source = "<p>\n  <b>";
        // the '<' of <b>
        let offset = source.find("<b>").unwrap();
        assert_eq!(
            Position::from_offset(source, offset),
            Position { line: 2, column: 3 }
        );
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let source = "héllo<";
        let offset = source.find('<').unwrap();
        assert_eq!(Position::from_offset(source, offset).column, 6);
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        assert_eq!(Position::from_offset("ab", 99), Position { line: 1, column: 3 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Position { line: 3, column: 7 }.to_string(), "3:7");
    }
}
