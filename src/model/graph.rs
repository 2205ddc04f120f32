//! Schema graph arena and containment lookups.

use serde::{Deserialize, Serialize};

use crate::model::{Edge, Vertex, VertexKind};

/// Index of a vertex within its owning [`SchemaGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u32);

/// Index of an edge within its owning [`SchemaGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u32);

/// One schema snapshot as a graph of kinded, named vertices and labeled
/// edges.
///
/// Graphs are built once by the external graph builder (or by tests via the
/// same surface) and are immutable during analysis. Vertex and edge ids are
/// only meaningful within the graph that produced them; insert operations
/// reference the new graph and delete operations the old one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl SchemaGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its id.
    pub fn add_vertex(&mut self, kind: VertexKind, name: impl Into<String>) -> VertexId {
        let id = u32::try_from(self.vertices.len()).expect("graph vertex capacity exceeded");
        self.vertices.push(Vertex::new(kind, name));
        VertexId(id)
    }

    /// Add an edge between two vertices of this graph and return its id.
    ///
    /// # Panics
    ///
    /// Panics when an endpoint id does not belong to this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, label: impl Into<String>) -> EdgeId {
        for endpoint in [from, to] {
            assert!(
                (endpoint.0 as usize) < self.vertices.len(),
                "edge endpoint {endpoint:?} does not belong to this graph"
            );
        }
        let id = u32::try_from(self.edges.len()).expect("graph edge capacity exceeded");
        self.edges.push(Edge::new(from, to, label));
        EdgeId(id)
    }

    /// Resolve a vertex id.
    ///
    /// # Panics
    ///
    /// Panics when the id does not belong to this graph.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.vertices
            .get(id.0 as usize)
            .unwrap_or_else(|| panic!("vertex id {id:?} does not belong to this graph"))
    }

    /// Resolve an edge id.
    ///
    /// # Panics
    ///
    /// Panics when the id does not belong to this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges
            .get(id.0 as usize)
            .unwrap_or_else(|| panic!("edge id {id:?} does not belong to this graph"))
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges originating at a vertex
    pub fn edges_from(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.from == id)
    }

    /// Edges arriving at a vertex
    pub fn edges_to(&self, id: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |edge| edge.to == id)
    }

    /// Locate the Object or Interface vertex that owns a field.
    ///
    /// # Panics
    ///
    /// Panics when the containment contract is breached: no owner, or more
    /// than one. The graph builder guarantees every field vertex hangs off
    /// exactly one container.
    #[must_use]
    pub fn fields_container_for_field(&self, field: VertexId) -> VertexId {
        let mut owner = None;
        for edge in self.edges_to(field) {
            if self.vertex(edge.from).kind.is_fields_container() {
                assert!(
                    owner.is_none(),
                    "field vertex `{}` has more than one fields container",
                    self.vertex(field).name
                );
                owner = Some(edge.from);
            }
        }
        owner.unwrap_or_else(|| {
            panic!(
                "field vertex `{}` has no fields container",
                self.vertex(field).name
            )
        })
    }

    /// Locate the Field vertex that owns an argument.
    ///
    /// # Panics
    ///
    /// Panics when the containment contract is breached: no owning field, or
    /// more than one.
    #[must_use]
    pub fn field_for_argument(&self, argument: VertexId) -> VertexId {
        let mut owner = None;
        for edge in self.edges_to(argument) {
            if self.vertex(edge.from).kind == VertexKind::Field {
                assert!(
                    owner.is_none(),
                    "argument vertex `{}` has more than one owning field",
                    self.vertex(argument).name
                );
                owner = Some(edge.from);
            }
        }
        owner.unwrap_or_else(|| {
            panic!(
                "argument vertex `{}` has no owning field",
                self.vertex(argument).name
            )
        })
    }
}
