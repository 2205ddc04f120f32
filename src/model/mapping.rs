//! Vertex correspondence between two schema graphs.

use std::collections::HashMap;

use crate::model::VertexId;

/// One-to-one correspondence between old- and new-graph vertices, partial on
/// unmatched elements.
///
/// Established by the external matching engine; the analyzer only uses it to
/// locate the pre-image of a new-graph vertex.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    new_to_old: HashMap<VertexId, VertexId>,
    old_to_new: HashMap<VertexId, VertexId>,
}

impl Mapping {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched pair of vertices.
    pub fn add(&mut self, old: VertexId, new: VertexId) {
        self.old_to_new.insert(old, new);
        self.new_to_old.insert(new, old);
    }

    /// Pre-image (old-graph vertex) of a new-graph vertex
    #[must_use]
    pub fn source(&self, new: VertexId) -> Option<VertexId> {
        self.new_to_old.get(&new).copied()
    }

    /// Image (new-graph vertex) of an old-graph vertex
    #[must_use]
    pub fn target(&self, old: VertexId) -> Option<VertexId> {
        self.old_to_new.get(&old).copied()
    }

    /// Number of matched pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.new_to_old.len()
    }

    /// Whether no pairs are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.new_to_old.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SchemaGraph, VertexKind};

    #[test]
    fn test_source_and_target_are_symmetric() {
        let mut old_graph = SchemaGraph::new();
        let old = old_graph.add_vertex(VertexKind::Object, "Foo");
        let mut new_graph = SchemaGraph::new();
        let new = new_graph.add_vertex(VertexKind::Object, "Foo");

        let mut mapping = Mapping::new();
        mapping.add(old, new);

        assert_eq!(mapping.source(new), Some(old));
        assert_eq!(mapping.target(old), Some(new));
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_unmatched_vertex_has_no_pre_image() {
        let mut new_graph = SchemaGraph::new();
        let new = new_graph.add_vertex(VertexKind::Object, "Fresh");

        let mapping = Mapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.source(new), None);
    }
}
