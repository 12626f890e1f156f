//! Focus routing after a structural edit.
//!
//! When a free-text slot turns into a filter or a grouping paren, the slot
//! the user was typing in ceases to exist and focus must land somewhere
//! sensible in the re-tokenized stream. Both rules are pure functions of
//! the pre-commit stream and the edited slot's index; the override names the
//! post-commit target by ordinal among tokens of its kind, since the target
//! token does not exist yet.

use crate::parse::TokenKind;

/// Which sub-part of a token receives focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPart {
    /// The editable value of a filter token
    Value,
}

/// Names a post-commit token by its ordinal among tokens of the same kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRef {
    /// The Nth filter token (0-indexed)
    Filter(usize),
    /// The Nth free-text slot (0-indexed)
    FreeText(usize),
}

/// Focus target consumed by the external dispatcher alongside a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusOverride {
    pub token: TokenRef,
    /// `None` focuses the whole token
    pub part: Option<FocusPart>,
}

/// Focus target after the edited slot commits as a new filter.
///
/// The new filter takes the ordinal position equal to the number of filter
/// tokens preceding the slot, regardless of surrounding free-text or paren
/// tokens, and its value part receives focus.
pub fn next_focus_for_filter(stream: &[TokenKind], slot_index: usize) -> FocusOverride {
    let end = slot_index.min(stream.len());
    let filters_before = stream[..end]
        .iter()
        .filter(|kind| **kind == TokenKind::Filter)
        .count();
    FocusOverride {
        token: TokenRef::Filter(filters_before),
        part: Some(FocusPart::Value),
    }
}

/// Focus target after the edited slot commits a grouping parenthesis.
///
/// Typing `(` or `)` splits the slot into paren + free-text continuation;
/// focus follows to the continuation, which is the next free-text ordinal
/// after the slot's own.
pub fn next_focus_for_paren(stream: &[TokenKind], slot_index: usize) -> FocusOverride {
    let end = slot_index.min(stream.len());
    let slot_ordinal = stream[..end]
        .iter()
        .filter(|kind| **kind == TokenKind::FreeText)
        .count();
    FocusOverride {
        token: TokenRef::FreeText(slot_ordinal + 1),
        part: None,
    }
}
