//! **Semantic analysis of GraphQL schema diffs.**
//!
//! `schema-diff-tools` turns the low-level output of a schema-graph matching
//! engine (an ordered list of vertex and edge edit operations plus a vertex
//! correspondence) into a higher-level change report: types added, removed
//! or modified, fields renamed or retyped, argument defaults changed,
//! arguments deleted, interface implementations and union memberships
//! updated. It is the layer API-evolution tooling builds on for
//! breaking-change detection and changelog generation.
//!
//! ## Core Concepts & Modules
//!
//! The library is organized into two modules:
//!
//! - **[`model`]**: the input representation. A [`SchemaGraph`] holds the
//!   kinded, named vertices and labeled edges of one schema snapshot; the
//!   ordered [`EditOperation`] list and the [`Mapping`] come from the
//!   external graph matching engine and are treated as opaque, trusted
//!   inputs.
//! - **[`diff`]**: home of the [`EditOperationAnalyzer`], which classifies
//!   the edit list in five ordered passes into an [`AnalysisResult`]: six
//!   name-keyed, insertion-ordered maps of Addition / Deletion /
//!   Modification records with typed member-level details.
//!
//! ## Getting Started: Classifying a Field Rename
//!
//! ```
//! use schema_diff_tools::{
//!     EditOperation, EditOperationAnalyzer, Mapping, SchemaGraph, VertexKind,
//! };
//!
//! // Two snapshots of the same one-field object type, as schema graphs.
//! let mut old_graph = SchemaGraph::new();
//! let old_foo = old_graph.add_vertex(VertexKind::Object, "Foo");
//! let old_id = old_graph.add_vertex(VertexKind::Field, "id");
//! old_graph.add_edge(old_foo, old_id, "field");
//!
//! let mut new_graph = SchemaGraph::new();
//! let new_foo = new_graph.add_vertex(VertexKind::Object, "Foo");
//! let new_uid = new_graph.add_vertex(VertexKind::Field, "uid");
//! new_graph.add_edge(new_foo, new_uid, "field");
//!
//! // The matching engine paired both vertices and reports one rename.
//! let mut mapping = Mapping::new();
//! mapping.add(old_foo, new_foo);
//! mapping.add(old_id, new_uid);
//! let operations = vec![EditOperation::ChangeVertex {
//!     source: old_id,
//!     target: new_uid,
//! }];
//!
//! let analyzer = EditOperationAnalyzer::new(&old_graph, &new_graph);
//! let result = analyzer.analyze(&operations, &mapping);
//! assert!(result.objects["Foo"].is_modification());
//! ```
//!
//! ## Error Model
//!
//! Recoverable errors ([`SchemaDiffError`]) exist only on the input
//! construction surface (label and kind parsing). The analyzer itself
//! treats every inconsistency (a malformed type-edge label, a missing
//! paired deletion, a wrong-tag accumulator lookup) as a breach of the
//! upstream matching contract and aborts with a panic rather than
//! returning a partial report.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Panic conditions are contract violations and documented on the
    // functions where callers can actually trigger them
    clippy::missing_panics_doc,
    // The fallible surface is two parse functions; their error conditions
    // are stated in the type docs
    clippy::missing_errors_doc,
    // old/new pairs are pervasive and clear in context
    clippy::similar_names
)]

pub mod diff;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use diff::{
    AnalysisResult, AnalysisSummary, EditOperationAnalyzer, EnumChangeDetail, EnumDifference,
    InputObjectChangeDetail, InputObjectDifference, InterfaceChangeDetail, InterfaceDifference,
    ObjectChangeDetail, ObjectDifference, ScalarChangeDetail, ScalarDifference, SchemaDifference,
    UnionChangeDetail, UnionDifference,
};
pub use error::{LabelError, Result, SchemaDiffError};
pub use model::{
    is_specified_scalar, Edge, EdgeId, EditOperation, Mapping, SchemaGraph, TypeLabel, Vertex,
    VertexId, VertexKind, IMPLEMENTS_LABEL_PREFIX, SPECIFIED_SCALARS, TYPE_LABEL_PREFIX,
};
