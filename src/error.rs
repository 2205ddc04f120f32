//! Unified error types for schema-diff-tools.
//!
//! Only the input-construction surface is recoverable. Internal-consistency
//! violations during analysis abort with a panic: they signal a breach of
//! the upstream graph/matching contract, not a handleable data condition.

use thiserror::Error;

/// Main error type for schema-diff-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchemaDiffError {
    /// A type-edge label could not be decoded
    #[error("invalid type edge label: {0}")]
    Label(#[from] LabelError),

    /// A vertex kind string did not name a known kind
    #[error("unknown vertex kind: {0:?}")]
    UnknownVertexKind(String),
}

/// Specific type-edge label decode failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LabelError {
    #[error("label does not start with `type=`: {label:?}")]
    MissingTypePrefix { label: String },

    #[error("type segment is not terminated by `;`: {label:?}")]
    UnterminatedType { label: String },
}

/// Convenient Result type for schema-diff-tools operations
pub type Result<T> = std::result::Result<T, SchemaDiffError>;
