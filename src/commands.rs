//! Command types for the slot update loop.
//!
//! Commands represent side effects that should be performed after an update.
//! The update function never mutates the committed token stream itself; it
//! returns a `Cmd` and the external dispatcher applies it. Fire-and-forget
//! from this crate's perspective.

use crate::focus::FocusOverride;
use crate::session::SlotId;

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Replace the slot's committed text in the authoritative stream
    Commit {
        slot_id: SlotId,
        new_text: String,
        /// Where keyboard focus should land after the stream re-tokenizes
        focus_override: Option<FocusOverride>,
    },
}
