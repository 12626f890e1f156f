//! Edit session state for one free-text slot.
//!
//! The slot owns a local editable string that may diverge from the
//! authoritative committed text while the user types. An external commit is
//! an explicit transition that snaps local state back to the committed text
//! (with the cursor clamped), rather than implicit diffing on every render.

use crate::catalog::KeyCatalog;
use crate::rank::{rank, Candidate};
use crate::text::{clamp_cursor, locate_word};

/// Identifier of a slot within the committed token stream, assigned by the
/// external dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

/// Whether local text currently mirrors or diverges from committed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Local text mirrors committed text
    Idle,
    /// Local text diverges, the user is typing
    Editing,
}

/// State of one free-text editing slot.
///
/// Created when a free-text position appears in the committed stream and
/// dropped when that position is removed or merged by an external edit.
#[derive(Debug, Clone)]
pub struct SlotSession {
    /// This slot's identifier in the committed stream
    pub slot_id: SlotId,
    /// This slot's index within the committed token stream
    pub slot_index: usize,
    committed_text: String,
    edit_text: String,
    cursor: usize,
    phase: Phase,
    /// Suggestion list open flag; orthogonal to the phase
    suggesting: bool,
    /// Highlight index into the flattened selectable candidates
    selected_index: usize,
}

impl SlotSession {
    /// Create a session for a slot whose committed text is `committed_text`
    pub fn new(slot_id: SlotId, slot_index: usize, committed_text: &str) -> Self {
        Self {
            slot_id,
            slot_index,
            committed_text: committed_text.to_string(),
            edit_text: committed_text.to_string(),
            cursor: committed_text.len(),
            phase: Phase::Idle,
            suggesting: false,
            selected_index: 0,
        }
    }

    /// The local, possibly diverged, editable text
    pub fn edit_text(&self) -> &str {
        &self.edit_text
    }

    /// The authoritative text as of the last external commit
    pub fn committed_text(&self) -> &str {
        &self.committed_text
    }

    /// Byte offset of the cursor within the editable text
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the suggestion list is open
    pub fn is_suggesting(&self) -> bool {
        self.suggesting
    }

    /// Highlight index into the flattened selectable candidates
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Whether local text has diverged from committed text
    pub fn is_dirty(&self) -> bool {
        self.edit_text != self.committed_text
    }

    /// The word under the cursor, used to filter candidate ranking
    pub fn current_word(&self) -> &str {
        locate_word(&self.edit_text, self.cursor)
    }

    /// Ranked suggestion list for the current word.
    ///
    /// Recomputed on demand; ranking is pure, so callers may cache per frame.
    pub fn candidates(&self, catalog: &dyn KeyCatalog) -> Vec<Candidate> {
        rank(catalog.keys(), catalog.sections(), self.current_word())
    }

    /// Accept classified-as-free-text input into local state
    pub(crate) fn set_editing(&mut self, text: String, cursor: usize) {
        self.cursor = clamp_cursor(&text, cursor);
        self.edit_text = text;
        self.phase = Phase::Editing;
        self.suggesting = true;
        self.selected_index = 0;
    }

    /// Snap local state to `text` after a commit (ours or external).
    ///
    /// The prior cursor is clamped to the new text length.
    pub(crate) fn reset_to(&mut self, text: String) {
        self.cursor = clamp_cursor(&text, self.cursor);
        self.committed_text = text.clone();
        self.edit_text = text;
        self.phase = Phase::Idle;
        self.suggesting = false;
        self.selected_index = 0;
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_cursor(&self.edit_text, cursor);
        self.selected_index = 0;
    }

    pub(crate) fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub(crate) fn close_suggestions(&mut self) {
        self.suggesting = false;
        self.selected_index = 0;
    }
}
