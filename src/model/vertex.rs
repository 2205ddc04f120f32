//! Schema graph vertex representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaDiffError;

/// Kind tag for a schema graph vertex.
///
/// The top-level type kinds (everything except `Field` and `Argument`)
/// identify named schema elements; `Field` and `Argument` vertices are
/// scoped to the container they hang off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    Object,
    Interface,
    Union,
    InputObject,
    Enum,
    Scalar,
    Field,
    Argument,
}

impl VertexKind {
    /// Whether this kind names a top-level schema type.
    #[must_use]
    pub const fn is_type(self) -> bool {
        !matches!(self, Self::Field | Self::Argument)
    }

    /// Whether vertices of this kind can own fields.
    #[must_use]
    pub const fn is_fields_container(self) -> bool {
        matches!(self, Self::Object | Self::Interface)
    }

    /// Stable lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::InputObject => "input_object",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::Field => "field",
            Self::Argument => "argument",
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexKind {
    type Err = SchemaDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(Self::Object),
            "interface" => Ok(Self::Interface),
            "union" => Ok(Self::Union),
            "input_object" => Ok(Self::InputObject),
            "enum" => Ok(Self::Enum),
            "scalar" => Ok(Self::Scalar),
            "field" => Ok(Self::Field),
            "argument" => Ok(Self::Argument),
            other => Err(SchemaDiffError::UnknownVertexKind(other.to_string())),
        }
    }
}

/// Vertex in a schema graph.
///
/// Identity within a graph is the [`VertexId`](crate::model::VertexId)
/// handed out by [`SchemaGraph::add_vertex`](crate::model::SchemaGraph::add_vertex);
/// names are unique per kind for types but only container-scoped for fields
/// and arguments, so `(kind, name)` is not a global key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Kind tag
    pub kind: VertexKind,
    /// Element name (type name, field name, or argument name)
    pub name: String,
}

impl Vertex {
    /// Create a new vertex
    #[must_use]
    pub fn new(kind: VertexKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrips_through_strings() {
        for kind in [
            VertexKind::Object,
            VertexKind::Interface,
            VertexKind::Union,
            VertexKind::InputObject,
            VertexKind::Enum,
            VertexKind::Scalar,
            VertexKind::Field,
            VertexKind::Argument,
        ] {
            let parsed: VertexKind = kind.as_str().parse().expect("known kind");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "directive".parse::<VertexKind>().unwrap_err();
        assert!(err.to_string().contains("directive"), "got: {err}");
    }

    #[test]
    fn test_type_and_container_predicates() {
        assert!(VertexKind::Union.is_type());
        assert!(!VertexKind::Field.is_type());
        assert!(!VertexKind::Argument.is_type());
        assert!(VertexKind::Object.is_fields_container());
        assert!(VertexKind::Interface.is_fields_container());
        assert!(!VertexKind::Union.is_fields_container());
    }
}
