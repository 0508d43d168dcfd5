//! Error types for tokenization and tree construction.
//!
//! Grammar mismatches inside the combinators are not errors; they are the
//! `None` results that drive ordered choice. Only the conditions below ever
//! reach a caller.

use thiserror::Error;
use twig_common::Position;

/// Longest remainder quoted in a [`TokenizeError::Stalled`] message.
const REMAINDER_PREVIEW_CHARS: usize = 24;

/// Tokenization could not make progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// Neither plain text nor a tag matches at `offset`, e.g. a stray `>`
    /// or a tag that is never closed.
    #[error("cannot tokenize input at {position}: {remainder:?}")]
    Stalled {
        /// Byte offset of the offending remainder.
        offset: usize,
        /// Line/column of `offset`.
        position: Position,
        /// The start of the remainder that could not be tokenized.
        remainder: String,
    },
}

impl TokenizeError {
    pub(crate) fn stalled(source: &str, offset: usize) -> Self {
        let remainder = source[offset..]
            .chars()
            .take(REMAINDER_PREVIEW_CHARS)
            .collect();
        Self::Stalled {
            offset,
            position: Position::from_offset(source, offset),
            remainder,
        }
    }

    /// Byte offset at which tokenization stopped.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Stalled { offset, .. } => *offset,
        }
    }
}

/// The token stream does not describe a properly nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A closing tag with no open element of the same name before it.
    #[error("closing tag </{name}> has no matching opening tag")]
    UnmatchedEndTag {
        /// Name of the closing tag.
        name: String,
        /// Index of the closing tag in the token stream.
        token_index: usize,
    },
    /// An opening tag that is never closed, either because input ended or
    /// because an enclosing element was closed first.
    #[error("opening tag <{name}> is never closed")]
    UnclosedTag {
        /// Name of the opening tag.
        name: String,
        /// Index of the opening tag in the token stream.
        token_index: usize,
    },
}

impl StructureError {
    /// Tag name the error is about.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::UnmatchedEndTag { name, .. } | Self::UnclosedTag { name, .. } => name,
        }
    }

    /// Index of the offending token in the token stream.
    #[must_use]
    pub const fn token_index(&self) -> usize {
        match self {
            Self::UnmatchedEndTag { token_index, .. } | Self::UnclosedTag { token_index, .. } => {
                *token_index
            }
        }
    }
}

/// Any failure of [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input could not be split into tokens.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// The tokens could not be assembled into a tree.
    #[error("{source} (at {position})")]
    Structure {
        /// What went wrong.
        #[source]
        source: StructureError,
        /// Where the offending tag starts in the input.
        position: Position,
    },
}

/// Result alias for the top-level parse entry point.
pub type Result<T> = std::result::Result<T, ParseError>;
