//! Typed difference records produced by the analyzer.
//!
//! Every named schema element that changed between the two versions gets
//! exactly one [`SchemaDifference`] record per kind. The detail payload is a
//! closed enum per kind, so consumers match exhaustively and a new detail
//! variant is a compile-time-visible change everywhere it is handled.

use serde::{Deserialize, Serialize};

/// Top-level outcome for one named schema element.
///
/// Exactly one record exists per name and kind, and its variant never
/// changes once set; only a `Modification` accumulates details, in
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum SchemaDifference<D> {
    /// The element exists only in the new schema
    Addition { name: String },
    /// The element exists only in the old schema
    Deletion { name: String },
    /// The element exists in both versions with member-level changes
    Modification { name: String, details: Vec<D> },
}

impl<D> SchemaDifference<D> {
    /// Name of the schema element this record describes
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Addition { name } | Self::Deletion { name } | Self::Modification { name, .. } => {
                name
            }
        }
    }

    /// Whether this record is an addition
    #[must_use]
    pub const fn is_addition(&self) -> bool {
        matches!(self, Self::Addition { .. })
    }

    /// Whether this record is a deletion
    #[must_use]
    pub const fn is_deletion(&self) -> bool {
        matches!(self, Self::Deletion { .. })
    }

    /// Whether this record is a modification
    #[must_use]
    pub const fn is_modification(&self) -> bool {
        matches!(self, Self::Modification { .. })
    }

    /// Member-level details; empty for additions and deletions
    #[must_use]
    pub fn details(&self) -> &[D] {
        match self {
            Self::Modification { details, .. } => details,
            Self::Addition { .. } | Self::Deletion { .. } => &[],
        }
    }
}

/// Fine-grained change recorded against a modified object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectChangeDetail {
    /// A field was added to an already-existing object
    FieldAddition { name: String },
    /// A field kept its position but changed its name
    FieldRename { old_name: String, new_name: String },
    /// A field on an existing object changed its type
    FieldTypeModification {
        field: String,
        old_type: String,
        new_type: String,
    },
    /// A field argument changed its default value
    FieldArgumentDefaultValueModification {
        field: String,
        argument: String,
        old_value: Option<String>,
        new_value: Option<String>,
    },
    /// A field argument was removed
    FieldArgumentDeletion { field: String, argument: String },
    /// The object started implementing an interface
    InterfaceImplementationAddition { interface: String },
}

/// Fine-grained change recorded against a modified interface type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceChangeDetail {
    /// A field argument changed its default value
    FieldArgumentDefaultValueModification {
        field: String,
        argument: String,
        old_value: Option<String>,
        new_value: Option<String>,
    },
    /// The interface started implementing another interface
    InterfaceImplementationAddition { interface: String },
}

/// Fine-grained change recorded against a modified union type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionChangeDetail {
    /// A member type joined the union
    MemberAddition { name: String },
    /// A member type left the union
    MemberDeletion { name: String },
}

/// Enum types only ever appear as whole additions or deletions in this
/// report; the absence of variants makes that a compile-time fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumChangeDetail {}

/// Input object types only ever appear as whole additions or deletions in
/// this report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputObjectChangeDetail {}

/// Scalar types only ever appear as whole additions or deletions in this
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarChangeDetail {}

/// Difference record for an object type
pub type ObjectDifference = SchemaDifference<ObjectChangeDetail>;
/// Difference record for an interface type
pub type InterfaceDifference = SchemaDifference<InterfaceChangeDetail>;
/// Difference record for a union type
pub type UnionDifference = SchemaDifference<UnionChangeDetail>;
/// Difference record for an enum type
pub type EnumDifference = SchemaDifference<EnumChangeDetail>;
/// Difference record for an input object type
pub type InputObjectDifference = SchemaDifference<InputObjectChangeDetail>;
/// Difference record for a scalar type
pub type ScalarDifference = SchemaDifference<ScalarChangeDetail>;
