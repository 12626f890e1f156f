//! Cursor-relative word helpers for slot text.
//!
//! Slot text is space-delimited query text, so word boundaries are single
//! ASCII spaces. Both helpers walk the same accumulation loop: each word
//! advances the running boundary by its length plus one (the separating
//! space), and the word owning the cursor is the first whose boundary
//! reaches the cursor offset.

use crate::catalog::KeyCatalog;
use crate::synth::synthesize;

/// Return the word under the cursor.
///
/// Falls back to the full `text` when the cursor sits past every word
/// boundary. Total over all inputs: empty text yields the empty string and
/// an out-of-range cursor is not an error.
pub fn locate_word(text: &str, cursor: usize) -> &str {
    let mut boundary = 0;
    for word in text.split(' ') {
        boundary += word.len() + 1;
        if boundary >= cursor {
            return word;
        }
    }
    text
}

/// Splice a synthesized filter for `key` over the word under the cursor.
///
/// The surrounding text is preserved: trimmed prefix, one space, the
/// synthesized filter text, one space, trimmed suffix, with the result
/// trimmed as a whole. When the cursor is past every word the text is
/// returned unchanged (documented no-op, not an error).
pub fn replace_focused_word(
    text: &str,
    cursor: usize,
    key: &str,
    catalog: &dyn KeyCatalog,
) -> String {
    let mut boundary = 0;
    for word in text.split(' ') {
        let start = boundary;
        boundary += word.len() + 1;
        if boundary >= cursor {
            let definition = catalog.field_definition(key);
            let default_value = catalog.default_value_for(key, definition);
            let filter = synthesize(key, definition, &default_value);

            let prefix = text[..start].trim();
            let suffix = text[start + word.len()..].trim();
            return format!("{prefix} {filter} {suffix}").trim().to_string();
        }
    }
    text.to_string()
}

/// Clamp a cursor offset into `text`, snapping down to a char boundary.
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
