//! Boundary to the external query-language parser and committed token stream.
//!
//! This crate never parses the query language itself. It hands hypothetical
//! text to a [`QueryParser`] implemented by the surrounding editor and works
//! from the classified spans that come back. Likewise the committed token
//! stream is owned by the external dispatcher; the focus router only reads
//! the token kinds.

use thiserror::Error;

/// One classified span of parsed query text.
///
/// Only the details the speculative tokenizer inspects are carried: filter
/// spans expose their key text, parens their side, everything else collapses
/// to free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Plain search text
    FreeText(String),
    /// A structured `key:value` clause
    Filter {
        /// Key part of the clause
        key: String,
        /// Full span text exactly as it appears in the input
        text: String,
    },
    /// Grouping `(`
    LeftParen,
    /// Grouping `)`
    RightParen,
}

/// Failure reported by the external parser.
///
/// Never fatal for the editing session: a hypothetical parse that fails is
/// classified as free text and the user keeps typing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed query at byte {offset}: {message}")]
    Malformed { offset: usize, message: String },
}

/// The external query-language parser.
///
/// Implementations must tolerate a trailing `"` appended by the speculative
/// tokenizer (it terminates an in-progress quoted string, see
/// [`classify`](crate::classify::classify)).
pub trait QueryParser {
    fn parse(&self, text: &str) -> Result<Vec<Span>, ParseError>;
}

/// Kind of a committed token in the authoritative stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A free-text editing slot
    FreeText,
    /// A structured filter token
    Filter,
    /// A grouping parenthesis token
    Paren,
}
