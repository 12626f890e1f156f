//! Speculative tokenization of hypothetical slot text.
//!
//! Runs before a keystroke is accepted into local state: the resulting text
//! is parsed as if it were committed, and the classification decides whether
//! the keystroke becomes a structural commit or a plain local update. The
//! classify-before-mutate ordering is load-bearing; it is what keeps an
//! inconsistent intermediate token stream from ever existing.

use tracing::trace;

use crate::parse::{QueryParser, Span};
use crate::text::locate_word;

/// What the hypothetical text would become if committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Still plain search text
    FreeText,
    /// Parses into a filter whose key is the word under the cursor
    FormsFilter(String),
    /// Contains a grouping parenthesis
    FormsParen,
}

/// Classify hypothetical slot text.
///
/// A synthetic closing quote is appended before parsing so an in-progress
/// quoted string does not read as a parse failure. Parse failure itself is
/// never an error here: the user keeps typing free text.
pub fn classify(parser: &dyn QueryParser, text: &str, cursor: usize) -> Classification {
    let mut probe = String::with_capacity(text.len() + 1);
    probe.push_str(text);
    probe.push('"');

    let spans = match parser.parse(&probe) {
        Ok(spans) => spans,
        Err(err) => {
            trace!(target: "classify", %err, "hypothetical parse failed, staying free text");
            return Classification::FreeText;
        }
    };

    if spans
        .iter()
        .any(|span| matches!(span, Span::LeftParen | Span::RightParen))
    {
        return Classification::FormsParen;
    }

    let word = locate_word(text, cursor);
    let forms_filter = spans
        .iter()
        .any(|span| matches!(span, Span::Filter { text, .. } if text == word));
    if forms_filter {
        return Classification::FormsFilter(word.to_string());
    }

    Classification::FreeText
}
