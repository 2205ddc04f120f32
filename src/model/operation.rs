//! Edit operations produced by the graph matching engine.

use serde::{Deserialize, Serialize};

use crate::model::{EdgeId, VertexId};

/// One atomic structural edit between the old and the new schema graph.
///
/// Insert operations reference the new graph, delete operations the old
/// graph, and change operations carry both sides of a matched pair. The
/// matcher emits a finite, ordered list of these; the analyzer reads it
/// without mutation. Order matters: the pairing of a split type-edge
/// insert/delete searches the list front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    /// A vertex exists only in the new graph
    InsertVertex { target: VertexId },
    /// A vertex exists only in the old graph
    DeleteVertex { source: VertexId },
    /// A matched vertex changed its payload (e.g. its name)
    ChangeVertex { source: VertexId, target: VertexId },
    /// An edge exists only in the new graph
    InsertEdge { target: EdgeId },
    /// An edge exists only in the old graph
    DeleteEdge { source: EdgeId },
    /// A matched edge changed its label
    ChangeEdge { source: EdgeId, target: EdgeId },
}
