//! Default value synthesis for newly created filter tokens.

use crate::catalog::{FieldDefinition, FieldKind};

/// Compose the literal text of a new filter token for `key`.
///
/// Function-kind keys render as `key(defaults…)` with only the parameters
/// declaring a default included, comma-joined. Numeric-family value types
/// get a `>` comparison prefix on the default; everything else (string
/// kinds and catalog misses) takes the default verbatim. The default value
/// itself comes from the catalog's lookup; this function only composes.
pub fn synthesize(key: &str, definition: Option<&FieldDefinition>, default_value: &str) -> String {
    let key_text = match definition {
        Some(def) if def.kind == FieldKind::Function => {
            let defaults: Vec<&str> = def
                .parameters
                .iter()
                .filter_map(|p| p.default_value.as_deref())
                .collect();
            format!("{key}({})", defaults.join(","))
        }
        _ => key.to_string(),
    };

    let comparable = definition.is_some_and(|def| def.value_type.is_comparable());
    if comparable {
        format!("{key_text}:>{default_value}")
    } else {
        format!("{key_text}:{default_value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FunctionParameter, ValueKind};

    fn field(kind: FieldKind, value_type: ValueKind) -> FieldDefinition {
        FieldDefinition {
            kind,
            value_type,
            parameters: Vec::new(),
            desc: None,
        }
    }

    #[test]
    fn test_string_kind_takes_default_verbatim() {
        let def = field(FieldKind::Field, ValueKind::String);
        assert_eq!(synthesize("release", Some(&def), "foo"), "release:foo");
    }

    #[test]
    fn test_number_kind_gets_comparison_prefix() {
        let def = field(FieldKind::Field, ValueKind::Number);
        assert_eq!(synthesize("times_seen", Some(&def), "1"), "times_seen:>1");
    }

    #[test]
    fn test_duration_and_percentage_get_comparison_prefix() {
        let duration = field(FieldKind::Field, ValueKind::Duration);
        assert_eq!(
            synthesize("transaction.duration", Some(&duration), "300ms"),
            "transaction.duration:>300ms"
        );

        let percentage = field(FieldKind::Field, ValueKind::Percentage);
        assert_eq!(synthesize("fcp", Some(&percentage), "0.5"), "fcp:>0.5");
    }

    #[test]
    fn test_function_kind_joins_declared_defaults() {
        let def = FieldDefinition {
            kind: FieldKind::Function,
            value_type: ValueKind::Number,
            parameters: vec![
                FunctionParameter {
                    name: "a".to_string(),
                    default_value: Some("1".to_string()),
                },
                FunctionParameter {
                    name: "b".to_string(),
                    default_value: None,
                },
            ],
            desc: None,
        };
        assert_eq!(synthesize("count_if", Some(&def), "100"), "count_if(1):>100");
    }

    #[test]
    fn test_function_without_parameters_renders_empty_parens() {
        let def = FieldDefinition {
            kind: FieldKind::Function,
            value_type: ValueKind::Integer,
            parameters: Vec::new(),
            desc: None,
        };
        assert_eq!(synthesize("count", Some(&def), "10"), "count():>10");
    }

    #[test]
    fn test_catalog_miss_falls_back_to_string_path() {
        assert_eq!(synthesize("unknown", None, ""), "unknown:");
    }
}
