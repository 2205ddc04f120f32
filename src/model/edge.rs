//! Schema graph edges and the type-edge label codec.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LabelError;
use crate::model::VertexId;

/// Prefix carried by edges that assign a type to a field or argument.
pub const TYPE_LABEL_PREFIX: &str = "type=";

/// Prefix carried by interface-implementation edges.
pub const IMPLEMENTS_LABEL_PREFIX: &str = "implements ";

const DEFAULT_VALUE_MARKER: &str = ";defaultValue=";

/// Directed, labeled edge in a schema graph.
///
/// The label encodes the relation: `type=<T>;` / `type=<T>;defaultValue=<V>`
/// for type edges, the `implements ` prefix for interface links, and plain
/// relation markers for containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex
    pub from: VertexId,
    /// Target vertex
    pub to: VertexId,
    /// Composite relation label
    pub label: String,
}

impl Edge {
    /// Create a new edge
    #[must_use]
    pub fn new(from: VertexId, to: VertexId, label: impl Into<String>) -> Self {
        Self {
            from,
            to,
            label: label.into(),
        }
    }

    /// Whether this edge carries a type assignment
    #[must_use]
    pub fn is_type_edge(&self) -> bool {
        self.label.starts_with(TYPE_LABEL_PREFIX)
    }

    /// Whether this edge links an implementor to an interface
    #[must_use]
    pub fn is_implements_edge(&self) -> bool {
        self.label.starts_with(IMPLEMENTS_LABEL_PREFIX)
    }
}

/// Decoded form of a type-edge label.
///
/// The wire form is `type=<T>;defaultValue=<V>`, or `type=<T>;` when no
/// default value exists. The type substring runs from `type=` to the first
/// `;` and therefore never contains one; the default value is everything
/// after `;defaultValue=` and may itself contain `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLabel {
    /// Full type reference, including list and non-null wrappers
    pub type_ref: String,
    /// Default value literal, if one is declared
    pub default_value: Option<String>,
}

impl TypeLabel {
    /// Create a label from its parts
    #[must_use]
    pub fn new(type_ref: impl Into<String>, default_value: Option<String>) -> Self {
        Self {
            type_ref: type_ref.into(),
            default_value,
        }
    }

    /// Decode a type-edge label.
    pub fn parse(label: &str) -> Result<Self, LabelError> {
        let rest = label
            .strip_prefix(TYPE_LABEL_PREFIX)
            .ok_or_else(|| LabelError::MissingTypePrefix {
                label: label.to_string(),
            })?;
        let terminator = rest.find(';').ok_or_else(|| LabelError::UnterminatedType {
            label: label.to_string(),
        })?;
        let type_ref = rest[..terminator].to_string();
        // The first marker occurrence is the separator: the type substring
        // cannot contain `;`, and the marker starts with one.
        let default_value = label
            .find(DEFAULT_VALUE_MARKER)
            .map(|at| label[at + DEFAULT_VALUE_MARKER.len()..].to_string());
        Ok(Self {
            type_ref,
            default_value,
        })
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default_value {
            Some(value) => write!(
                f,
                "{TYPE_LABEL_PREFIX}{}{DEFAULT_VALUE_MARKER}{value}",
                self.type_ref
            ),
            None => write!(f, "{TYPE_LABEL_PREFIX}{};", self.type_ref),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_default_value() {
        let label = TypeLabel::parse("type=Int;defaultValue=10").expect("well-formed label");
        assert_eq!(label.type_ref, "Int");
        assert_eq!(label.default_value.as_deref(), Some("10"));
    }

    #[test]
    fn test_parse_without_default_value() {
        let label = TypeLabel::parse("type=[String!]!;").expect("well-formed label");
        assert_eq!(label.type_ref, "[String!]!");
        assert_eq!(label.default_value, None);
    }

    #[test]
    fn test_parse_empty_default_is_not_absent() {
        let label = TypeLabel::parse("type=ID;defaultValue=").expect("well-formed label");
        assert_eq!(label.default_value.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        let err = TypeLabel::parse("implements Node").unwrap_err();
        assert!(matches!(err, LabelError::MissingTypePrefix { .. }));
    }

    #[test]
    fn test_unterminated_type_is_rejected() {
        let err = TypeLabel::parse("type=Int").unwrap_err();
        assert!(matches!(err, LabelError::UnterminatedType { .. }));
    }

    #[test]
    fn test_display_reencodes_losslessly() {
        for label in ["type=Int;defaultValue=10", "type=[ID!];", "type=S;defaultValue="] {
            let decoded = TypeLabel::parse(label).expect("well-formed label");
            assert_eq!(decoded.to_string(), label);
        }
    }
}
