//! querybar - editing engine for the free-text slot of a structured
//! search-query editor.
//!
//! A search-query editor renders a query as a stream of structured tokens
//! (filters like `level:error`, grouping parens) interleaved with free-text
//! slots. This crate drives one such slot: on every keystroke it runs the
//! external query parser against the hypothetical resulting text, decides
//! whether the edit stays free text or should be promoted into a structured
//! token, and computes where keyboard focus lands after a structural commit.
//!
//! The crate follows the Elm Architecture: [`SlotSession`] is the model,
//! [`SlotMsg`] the messages, [`update`] the pure update function, and
//! [`Cmd`] the side effects handed back to the embedding editor. The query
//! parser, filter-key catalog, and committed token stream are external
//! collaborators reached through the traits in [`parse`] and [`catalog`].

pub mod catalog;
pub mod classify;
pub mod commands;
pub mod focus;
pub mod messages;
pub mod parse;
pub mod rank;
pub mod session;
pub mod synth;
pub mod text;
pub mod update;

// Re-export commonly used types
pub use catalog::{CandidateKey, CandidateSection, KeyCatalog, StaticCatalog};
pub use classify::Classification;
pub use commands::Cmd;
pub use focus::{FocusOverride, FocusPart, TokenRef};
pub use messages::{Direction, SlotMsg};
pub use parse::{ParseError, QueryParser, Span, TokenKind};
pub use rank::Candidate;
pub use session::{Phase, SlotId, SlotSession};
pub use update::{update, Collaborators};
