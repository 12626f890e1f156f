//! Filter-key catalog - the read-only collaborator describing selectable keys.
//!
//! The surrounding editor owns the catalog; this crate only reads it. A
//! concrete [`StaticCatalog`] is provided for catalogs loaded from editor
//! configuration, but any embedder can implement [`KeyCatalog`] directly
//! (e.g. to back lookups with a live schema service).

use std::collections::HashMap;

use serde::Deserialize;

/// Whether a key is a plain field or a parameterized function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Field,
    Function,
}

/// Kind of value a filter key accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Number,
    Integer,
    Duration,
    Percentage,
}

impl ValueKind {
    /// Numeric-family kinds default to a comparison filter (`>value`)
    pub fn is_comparable(self) -> bool {
        matches!(
            self,
            ValueKind::Number | ValueKind::Integer | ValueKind::Duration | ValueKind::Percentage
        )
    }
}

/// Parameter of a function-kind key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FunctionParameter {
    pub name: String,
    /// Only parameters declaring a default appear in synthesized key text
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Type metadata for one filter key
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldDefinition {
    pub kind: FieldKind,
    pub value_type: ValueKind,
    /// Ordered parameters (function-kind keys only)
    #[serde(default)]
    pub parameters: Vec<FunctionParameter>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// A selectable filter key offered for autocomplete.
///
/// Type metadata lives in the catalog's [`FieldDefinition`] lookup rather
/// than on the key itself, so the ranked list stays a plain display record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidateKey {
    /// Unique key identifier as it appears in query text
    pub identifier: String,
    /// Label shown in the suggestion list
    pub display_label: String,
    /// Short human description, also matched against during fuzzy ranking
    #[serde(default)]
    pub description: String,
}

/// Named grouping of candidate keys (category label + ordered members)
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSection {
    pub label: String,
    pub keys: Vec<CandidateKey>,
}

/// Read-only view of the filter-key catalog.
///
/// All methods are total: a miss returns `None` / an empty default, never a
/// fault. The editing session must keep working with a zero-length catalog.
pub trait KeyCatalog {
    /// Flat list of all selectable keys, in catalog order
    fn keys(&self) -> &[CandidateKey];

    /// Configured category groupings; empty when sections are not configured
    fn sections(&self) -> &[CandidateSection];

    /// Type metadata for a key, or `None` on catalog miss
    fn field_definition(&self, identifier: &str) -> Option<&FieldDefinition>;

    /// Default filter value for a key (may be empty)
    fn default_value_for(&self, identifier: &str, definition: Option<&FieldDefinition>) -> String;
}

/// One catalog entry as loaded from editor configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KeyDefinition {
    pub identifier: String,
    pub display_label: String,
    #[serde(default)]
    pub description: String,
    /// Section label this key is grouped under, if sections are configured
    #[serde(default)]
    pub section: Option<String>,
    #[serde(flatten)]
    pub field: FieldDefinition,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// Catalog built once from a list of definitions and then only read.
///
/// Catalog order is the definition order; sections appear in the order their
/// label is first seen. Rebuilt (not mutated) when the editor's key catalog
/// changes.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    keys: Vec<CandidateKey>,
    sections: Vec<CandidateSection>,
    fields: HashMap<String, FieldDefinition>,
    defaults: HashMap<String, String>,
}

impl StaticCatalog {
    /// Build a catalog from deserialized definitions
    pub fn from_definitions(definitions: Vec<KeyDefinition>) -> Self {
        let mut catalog = StaticCatalog::default();
        let mut section_order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, Vec<CandidateKey>> = HashMap::new();

        for def in definitions {
            let key = CandidateKey {
                identifier: def.identifier.clone(),
                display_label: def.display_label,
                description: def.description,
            };

            if let Some(section) = def.section {
                if !grouped.contains_key(&section) {
                    section_order.push(section.clone());
                }
                grouped.entry(section).or_default().push(key.clone());
            }

            catalog.keys.push(key);
            catalog.fields.insert(def.identifier.clone(), def.field);
            if let Some(default) = def.default_value {
                catalog.defaults.insert(def.identifier, default);
            }
        }

        catalog.sections = section_order
            .into_iter()
            .map(|label| {
                let keys = grouped.remove(&label).unwrap_or_default();
                CandidateSection { label, keys }
            })
            .collect();

        catalog
    }
}

impl KeyCatalog for StaticCatalog {
    fn keys(&self) -> &[CandidateKey] {
        &self.keys
    }

    fn sections(&self) -> &[CandidateSection] {
        &self.sections
    }

    fn field_definition(&self, identifier: &str) -> Option<&FieldDefinition> {
        self.fields.get(identifier)
    }

    fn default_value_for(&self, identifier: &str, _definition: Option<&FieldDefinition>) -> String {
        self.defaults.get(identifier).cloned().unwrap_or_default()
    }
}
