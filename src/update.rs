//! Update function for the slot editing loop.
//!
//! All state transformations flow through [`update`]. Each message runs to
//! completion before the next is accepted; structural edits come back as a
//! [`Cmd`] for the external dispatcher rather than being applied here.
//!
//! The ordering constraint that matters: raw input is classified by the
//! speculative tokenizer *before* it is accepted into local state, so a
//! keystroke that completes a filter or paren commits directly and never
//! surfaces as intermediate free text.

use tracing::debug;

use crate::catalog::KeyCatalog;
use crate::classify::{classify, Classification};
use crate::commands::Cmd;
use crate::focus::{next_focus_for_filter, next_focus_for_paren};
use crate::messages::{Direction, SlotMsg};
use crate::parse::{QueryParser, TokenKind};
use crate::rank::selectable_keys;
use crate::session::SlotSession;
use crate::text::replace_focused_word;

/// Read-only collaborators consulted during an update
pub struct Collaborators<'a> {
    /// The external query-language parser
    pub parser: &'a dyn QueryParser,
    /// The filter-key catalog
    pub catalog: &'a dyn KeyCatalog,
    /// Kinds of the committed token stream, in order
    pub stream: &'a [TokenKind],
}

/// Main update function - dispatches to per-message handlers
pub fn update(session: &mut SlotSession, msg: SlotMsg, ctx: &Collaborators) -> Option<Cmd> {
    match msg {
        SlotMsg::Input { text, cursor } => handle_input(session, text, cursor, ctx),
        SlotMsg::Paste(payload) => handle_paste(session, &payload),
        SlotMsg::CursorMoved(cursor) => {
            session.set_cursor(cursor);
            None
        }
        SlotMsg::SelectionMoved(direction) => {
            move_selection(session, direction, ctx);
            None
        }
        SlotMsg::CandidateChosen => handle_candidate_chosen(session, ctx),
        SlotMsg::DismissSuggestions => {
            session.close_suggestions();
            None
        }
        SlotMsg::Blur | SlotMsg::Submit => handle_submit(session),
        SlotMsg::ExternalCommit { text } => {
            session.reset_to(text);
            None
        }
    }
}

/// Classify hypothetical input, then either commit structurally or accept it
/// as local free text.
fn handle_input(
    session: &mut SlotSession,
    text: String,
    cursor: usize,
    ctx: &Collaborators,
) -> Option<Cmd> {
    match classify(ctx.parser, &text, cursor) {
        Classification::FormsParen => {
            debug!(target: "commit", slot = session.slot_id.0, "input forms grouping paren");
            let focus = next_focus_for_paren(ctx.stream, session.slot_index);
            session.reset_to(text.clone());
            Some(Cmd::Commit {
                slot_id: session.slot_id,
                new_text: text,
                focus_override: Some(focus),
            })
        }
        Classification::FormsFilter(word) => {
            debug!(target: "commit", slot = session.slot_id.0, %word, "input forms filter");
            let focus = next_focus_for_filter(ctx.stream, session.slot_index);
            session.reset_to(text.clone());
            Some(Cmd::Commit {
                slot_id: session.slot_id,
                new_text: text,
                focus_override: Some(focus),
            })
        }
        Classification::FreeText => {
            session.set_editing(text, cursor);
            None
        }
    }
}

/// Paste replaces the whole slot content and commits immediately, bypassing
/// per-keystroke classification. Newlines are stripped and the payload
/// trimmed.
fn handle_paste(session: &mut SlotSession, payload: &str) -> Option<Cmd> {
    let cleaned: String = payload
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect();
    let cleaned = cleaned.trim().to_string();

    debug!(target: "commit", slot = session.slot_id.0, "paste commits whole-token replacement");
    session.reset_to(cleaned.clone());
    Some(Cmd::Commit {
        slot_id: session.slot_id,
        new_text: cleaned,
        focus_override: None,
    })
}

/// Blur or explicit submission: unchanged text commits nothing; changed text
/// commits verbatim with no re-tokenization.
fn handle_submit(session: &mut SlotSession) -> Option<Cmd> {
    if !session.is_dirty() {
        session.close_suggestions();
        return None;
    }

    let new_text = session.edit_text().to_string();
    debug!(target: "commit", slot = session.slot_id.0, "submitting raw slot text");
    session.reset_to(new_text.clone());
    Some(Cmd::Commit {
        slot_id: session.slot_id,
        new_text,
        focus_override: None,
    })
}

/// Move the suggestion highlight with wrap-around
fn move_selection(session: &mut SlotSession, direction: Direction, ctx: &Collaborators) {
    let candidates = session.candidates(ctx.catalog);
    let count = selectable_keys(&candidates).len();
    if count == 0 {
        return;
    }

    let current = session.selected_index().min(count - 1);
    let next = match direction {
        Direction::Down => (current + 1) % count,
        Direction::Up => (current + count - 1) % count,
    };
    session.set_selected_index(next);
}

/// Splice the selected candidate over the word under the cursor and commit
fn handle_candidate_chosen(session: &mut SlotSession, ctx: &Collaborators) -> Option<Cmd> {
    let candidates = session.candidates(ctx.catalog);
    let flat = selectable_keys(&candidates);
    let identifier = flat.get(session.selected_index())?.identifier.clone();

    let new_text = replace_focused_word(
        session.edit_text(),
        session.cursor(),
        &identifier,
        ctx.catalog,
    );
    debug!(target: "commit", slot = session.slot_id.0, key = %identifier, "candidate chosen");

    let focus = next_focus_for_filter(ctx.stream, session.slot_index);
    session.reset_to(new_text.clone());
    Some(Cmd::Commit {
        slot_id: session.slot_id,
        new_text,
        focus_override: Some(focus),
    })
}
