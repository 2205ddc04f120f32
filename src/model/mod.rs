//! Input representation for schema diffing.
//!
//! This module defines the data the external collaborators hand to the
//! analyzer: [`SchemaGraph`] snapshots built from two schema versions, the
//! ordered [`EditOperation`] list and the [`Mapping`] produced by the graph
//! matching engine, and the [`TypeLabel`] codec for type-edge labels. The
//! analyzer treats all of it as read-only, trusted input.

mod edge;
mod graph;
mod mapping;
mod operation;
mod scalars;
mod vertex;

pub use edge::*;
pub use graph::*;
pub use mapping::*;
pub use operation::*;
pub use scalars::*;
pub use vertex::*;
