//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use querybar::catalog::{
    FieldDefinition, FieldKind, FunctionParameter, KeyDefinition, StaticCatalog, ValueKind,
};
use querybar::parse::{ParseError, QueryParser, Span};
use querybar::session::{SlotId, SlotSession};

/// Minimal stand-in for the external query-language parser.
///
/// Tokenizes on whitespace: bare `(` / `)` become parens, words containing
/// a `:` after a non-empty key become filters, everything else is free
/// text. A dangling trailing quote (the speculative tokenizer's synthetic
/// terminator on quote-free text) is ignored; any other unbalanced quote,
/// or a NUL byte, fails the parse.
pub struct FakeParser;

impl QueryParser for FakeParser {
    fn parse(&self, text: &str) -> Result<Vec<Span>, ParseError> {
        if text.contains('\0') {
            return Err(ParseError::Malformed {
                offset: text.find('\0').unwrap_or(0),
                message: "nul byte in query".to_string(),
            });
        }

        let mut text = text;
        if text.matches('"').count() % 2 != 0 {
            match text.strip_suffix('"') {
                Some(stripped) => text = stripped,
                None => {
                    return Err(ParseError::Malformed {
                        offset: text.find('"').unwrap_or(0),
                        message: "unterminated quoted string".to_string(),
                    })
                }
            }
        }

        let spans = text
            .split_whitespace()
            .map(|word| match word {
                "(" => Span::LeftParen,
                ")" => Span::RightParen,
                _ => match word.split_once(':') {
                    Some((key, _)) if !key.is_empty() => Span::Filter {
                        key: key.to_string(),
                        text: word.to_string(),
                    },
                    _ => Span::FreeText(word.to_string()),
                },
            })
            .collect();
        Ok(spans)
    }
}

fn key_definition(
    identifier: &str,
    description: &str,
    section: Option<&str>,
    kind: FieldKind,
    value_type: ValueKind,
    parameters: Vec<FunctionParameter>,
    default_value: Option<&str>,
) -> KeyDefinition {
    KeyDefinition {
        identifier: identifier.to_string(),
        display_label: identifier.to_string(),
        description: description.to_string(),
        section: section.map(str::to_string),
        field: FieldDefinition {
            kind,
            value_type,
            parameters,
            desc: None,
        },
        default_value: default_value.map(str::to_string),
    }
}

/// Catalog fixture: a few field keys across two sections plus a function key
pub fn test_catalog() -> StaticCatalog {
    StaticCatalog::from_definitions(vec![
        key_definition(
            "browser.name",
            "Name of the browser",
            Some("Event"),
            FieldKind::Field,
            ValueKind::String,
            Vec::new(),
            None,
        ),
        key_definition(
            "level",
            "Severity level of the event",
            Some("Event"),
            FieldKind::Field,
            ValueKind::String,
            Vec::new(),
            Some("error"),
        ),
        key_definition(
            "times_seen",
            "Number of times the issue was seen",
            Some("Issue"),
            FieldKind::Field,
            ValueKind::Number,
            Vec::new(),
            Some("1"),
        ),
        key_definition(
            "count_if",
            "Conditional count of events",
            Some("Issue"),
            FieldKind::Function,
            ValueKind::Number,
            vec![
                FunctionParameter {
                    name: "column".to_string(),
                    default_value: Some("transaction.duration".to_string()),
                },
                FunctionParameter {
                    name: "operator".to_string(),
                    default_value: None,
                },
            ],
            Some("100"),
        ),
    ])
}

/// Session for a slot at `slot_index` with the given committed text
pub fn test_session(committed_text: &str, slot_index: usize) -> SlotSession {
    SlotSession::new(SlotId(7), slot_index, committed_text)
}
