//! Input-event messages for one editing slot.
//!
//! All slot state changes flow through these messages, delivered strictly in
//! the order the user/environment produces them. The embedding editor
//! translates raw keyboard/clipboard/focus events into `SlotMsg` values and
//! feeds them to [`update`](crate::update::update).

/// Direction for suggestion-list navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Messages accepted by an editing slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotMsg {
    // === Text input ===
    /// Raw input changed: the hypothetical new text plus cursor offset.
    /// Classified before being accepted into local state.
    Input { text: String, cursor: usize },
    /// Clipboard paste; the payload replaces the entire slot content
    Paste(String),
    /// Cursor moved without a text change (arrow keys, click)
    CursorMoved(usize),

    // === Suggestion list ===
    /// Move the selection highlight in the open suggestion list
    SelectionMoved(Direction),
    /// Apply the currently selected candidate (Enter/Tab on a suggestion)
    CandidateChosen,
    /// Close the suggestion list without committing (Escape)
    DismissSuggestions,

    // === Focus / submission ===
    /// Slot lost keyboard focus
    Blur,
    /// Explicit submission of the slot content (Enter outside the list)
    Submit,

    // === External ===
    /// The committed token stream changed under this slot
    ExternalCommit { text: String },
}
