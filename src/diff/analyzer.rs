//! Edit-operation analyzer: assigns schema-level meaning to low-level graph
//! edits.
//!
//! The analyzer runs a fixed sequence of classification passes over the edit
//! operation list produced by the matching engine:
//!
//! 1. type-vertex changes seed the Addition/Deletion/Modification records
//! 2. field and argument vertex changes
//! 3. type and default-value edge changes
//! 4. interface-implementation edge insertions
//! 5. union-membership edge changes
//!
//! The order is load-bearing: later passes consult the records seeded by
//! pass 1 to suppress member-level details on types that were added or
//! removed wholesale, since a brand-new or deleted container already conveys
//! all of its contents. Within each pass, operations are visited in the
//! input list's original order.
//!
//! All error conditions here are breaches of the upstream graph/matching
//! contract and abort the analysis with a panic; there is no degraded
//! result.

use indexmap::IndexMap;
use tracing::debug;

use super::changes::{
    EnumDifference, InputObjectDifference, InterfaceChangeDetail, InterfaceDifference,
    ObjectChangeDetail, ObjectDifference, ScalarDifference, SchemaDifference, UnionChangeDetail,
    UnionDifference,
};
use super::result::AnalysisResult;
use crate::model::{
    is_specified_scalar, Edge, EdgeId, EditOperation, Mapping, SchemaGraph, TypeLabel, VertexId,
    VertexKind,
};

/// Multi-pass classifier turning edit operations into a difference report.
///
/// An analyzer is single-use: [`analyze`](Self::analyze) consumes it, so
/// every run starts from a fresh instance and the per-run accumulator state
/// can never leak between analyses.
pub struct EditOperationAnalyzer<'a> {
    old_graph: &'a SchemaGraph,
    new_graph: &'a SchemaGraph,
    objects: IndexMap<String, ObjectDifference>,
    interfaces: IndexMap<String, InterfaceDifference>,
    unions: IndexMap<String, UnionDifference>,
    enums: IndexMap<String, EnumDifference>,
    input_objects: IndexMap<String, InputObjectDifference>,
    scalars: IndexMap<String, ScalarDifference>,
}

impl<'a> EditOperationAnalyzer<'a> {
    /// Create an analyzer over the two schema graphs being compared.
    #[must_use]
    pub fn new(old_graph: &'a SchemaGraph, new_graph: &'a SchemaGraph) -> Self {
        Self {
            old_graph,
            new_graph,
            objects: IndexMap::new(),
            interfaces: IndexMap::new(),
            unions: IndexMap::new(),
            enums: IndexMap::new(),
            input_objects: IndexMap::new(),
            scalars: IndexMap::new(),
        }
    }

    /// Classify the full edit-operation list into a difference report.
    ///
    /// Inputs are borrowed immutably and never modified.
    ///
    /// # Panics
    ///
    /// Panics on internal-consistency violations: a type edge with a
    /// malformed label, a missing paired deletion for an inserted type edge,
    /// a wrong-tag accumulator lookup, or a containment contract breach.
    /// These signal that the upstream graph/matching contract was violated.
    pub fn analyze(mut self, operations: &[EditOperation], mapping: &Mapping) -> AnalysisResult {
        debug!(
            operations = operations.len(),
            matched_vertices = mapping.len(),
            "analyzing edit operations"
        );

        self.handle_type_vertex_changes(operations);
        for operation in operations {
            match *operation {
                EditOperation::ChangeVertex { source, target } => {
                    if self.new_graph.vertex(target).kind == VertexKind::Field {
                        self.field_renamed(source, target);
                    }
                }
                EditOperation::InsertVertex { target } => {
                    if self.new_graph.vertex(target).kind == VertexKind::Field {
                        self.field_added(target);
                    }
                }
                EditOperation::DeleteVertex { source } => {
                    if self.old_graph.vertex(source).kind == VertexKind::Argument {
                        self.argument_removed(source);
                    }
                }
                _ => {}
            }
        }
        self.handle_type_edge_changes(operations, mapping);
        self.handle_implements_changes(operations);
        self.handle_union_member_changes(operations);

        debug!(
            objects = self.objects.len(),
            interfaces = self.interfaces.len(),
            unions = self.unions.len(),
            enums = self.enums.len(),
            input_objects = self.input_objects.len(),
            scalars = self.scalars.len(),
            "classified edit operations"
        );

        AnalysisResult::new(
            self.objects,
            self.interfaces,
            self.unions,
            self.enums,
            self.input_objects,
            self.scalars,
        )
    }

    // ------------------------------------------------------------------
    // Pass 1: type vertices
    // ------------------------------------------------------------------

    fn handle_type_vertex_changes(&mut self, operations: &[EditOperation]) {
        for operation in operations {
            match *operation {
                EditOperation::InsertVertex { target } => self.type_vertex_inserted(target),
                EditOperation::DeleteVertex { source } => self.type_vertex_deleted(source),
                EditOperation::ChangeVertex { target, .. } => self.type_vertex_changed(target),
                _ => {}
            }
        }
    }

    fn type_vertex_inserted(&mut self, target: VertexId) {
        let vertex = self.new_graph.vertex(target);
        let name = vertex.name.clone();
        match vertex.kind {
            VertexKind::Object => record(&mut self.objects, SchemaDifference::Addition { name }),
            VertexKind::Interface => {
                record(&mut self.interfaces, SchemaDifference::Addition { name });
            }
            VertexKind::Union => record(&mut self.unions, SchemaDifference::Addition { name }),
            VertexKind::InputObject => {
                record(&mut self.input_objects, SchemaDifference::Addition { name });
            }
            VertexKind::Enum => record(&mut self.enums, SchemaDifference::Addition { name }),
            VertexKind::Scalar => {
                // built-in scalars surface as inserted when the old schema
                // simply never referenced them; they are not user additions
                if !is_specified_scalar(&name) {
                    record(&mut self.scalars, SchemaDifference::Addition { name });
                }
            }
            VertexKind::Field | VertexKind::Argument => {}
        }
    }

    fn type_vertex_deleted(&mut self, source: VertexId) {
        let vertex = self.old_graph.vertex(source);
        let name = vertex.name.clone();
        match vertex.kind {
            VertexKind::Object => record(&mut self.objects, SchemaDifference::Deletion { name }),
            VertexKind::Interface => {
                record(&mut self.interfaces, SchemaDifference::Deletion { name });
            }
            VertexKind::Union => record(&mut self.unions, SchemaDifference::Deletion { name }),
            VertexKind::InputObject => {
                record(&mut self.input_objects, SchemaDifference::Deletion { name });
            }
            VertexKind::Enum => record(&mut self.enums, SchemaDifference::Deletion { name }),
            VertexKind::Scalar => record(&mut self.scalars, SchemaDifference::Deletion { name }),
            VertexKind::Field | VertexKind::Argument => {}
        }
    }

    fn type_vertex_changed(&mut self, target: VertexId) {
        let vertex = self.new_graph.vertex(target);
        let name = vertex.name.clone();
        // the record keys on the new name
        match vertex.kind {
            VertexKind::Object => record(
                &mut self.objects,
                SchemaDifference::Modification {
                    name,
                    details: Vec::new(),
                },
            ),
            VertexKind::Interface => record(
                &mut self.interfaces,
                SchemaDifference::Modification {
                    name,
                    details: Vec::new(),
                },
            ),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Pass 2: field and argument vertices
    // ------------------------------------------------------------------

    fn field_renamed(&mut self, source: VertexId, target: VertexId) {
        let container = self
            .new_graph
            .vertex(self.new_graph.fields_container_for_field(target));
        if container.kind != VertexKind::Object {
            return;
        }
        let old_name = self.old_graph.vertex(source).name.clone();
        let new_name = self.new_graph.vertex(target).name.clone();
        self.object_modification(&container.name)
            .push(ObjectChangeDetail::FieldRename { old_name, new_name });
    }

    fn field_added(&mut self, target: VertexId) {
        let container = self
            .new_graph
            .vertex(self.new_graph.fields_container_for_field(target));
        if container.kind != VertexKind::Object {
            return;
        }
        if self.object_was_added(&container.name) {
            return;
        }
        let name = self.new_graph.vertex(target).name.clone();
        self.object_modification(&container.name)
            .push(ObjectChangeDetail::FieldAddition { name });
    }

    fn argument_removed(&mut self, source: VertexId) {
        let field_id = self.old_graph.field_for_argument(source);
        let container = self
            .old_graph
            .vertex(self.old_graph.fields_container_for_field(field_id));
        if container.kind != VertexKind::Object {
            return;
        }
        // a deleted object already conveys the loss of every argument under it
        if self.object_was_deleted(&container.name) {
            return;
        }
        let field = self.old_graph.vertex(field_id).name.clone();
        let argument = self.old_graph.vertex(source).name.clone();
        self.object_modification(&container.name)
            .push(ObjectChangeDetail::FieldArgumentDeletion { field, argument });
    }

    // ------------------------------------------------------------------
    // Pass 3: type and default-value edges
    // ------------------------------------------------------------------

    fn handle_type_edge_changes(&mut self, operations: &[EditOperation], mapping: &Mapping) {
        for operation in operations {
            match *operation {
                EditOperation::InsertEdge { target } => {
                    if self.new_graph.edge(target).is_type_edge() {
                        self.type_edge_inserted(target, operations, mapping);
                    }
                }
                EditOperation::ChangeEdge { source, target } => {
                    if self.new_graph.edge(target).is_type_edge() {
                        self.type_edge_changed(source, target);
                    }
                }
                _ => {}
            }
        }
    }

    fn type_edge_inserted(
        &mut self,
        target: EdgeId,
        operations: &[EditOperation],
        mapping: &Mapping,
    ) {
        let new_edge = self.new_graph.edge(target);
        let field_id = new_edge.from;
        if self.new_graph.vertex(field_id).kind != VertexKind::Field {
            return;
        }
        let field_name = self.new_graph.vertex(field_id).name.clone();
        let container = self
            .new_graph
            .vertex(self.new_graph.fields_container_for_field(field_id));
        match container.kind {
            VertexKind::Object => {
                // a brand-new object already conveys its field types
                if self.object_was_added(&container.name) {
                    return;
                }
                // same for a field that is itself new on an existing object
                if self.field_is_new_on_object(&container.name, &field_name) {
                    return;
                }
                // an existing field changed its type: the matcher splits
                // that into an insert of the new type edge plus a delete of
                // the old one on the field's pre-image vertex
                let new_type = decode_type_label(new_edge).type_ref;
                let deleted_edge = self.find_deleted_edge(field_id, operations, mapping);
                let old_type = decode_type_label(deleted_edge).type_ref;
                self.object_modification(&container.name).push(
                    ObjectChangeDetail::FieldTypeModification {
                        field: field_name,
                        old_type,
                        new_type,
                    },
                );
            }
            VertexKind::Interface => {
                // a fresh interface is already covered by its Addition
                // record; type changes on existing interface fields are not
                // classified by this report
            }
            other => unreachable!("field vertex `{field_name}` contained by {other} vertex"),
        }
    }

    /// Locate the delete-edge operation whose edge originates at the
    /// pre-image of `field`, scanning the list in input order.
    ///
    /// # Panics
    ///
    /// Panics when the field has no pre-image or no such deletion exists;
    /// the matcher guarantees a type edge is replaced, never purely added,
    /// when the field itself is not new.
    fn find_deleted_edge(
        &self,
        field: VertexId,
        operations: &[EditOperation],
        mapping: &Mapping,
    ) -> &'a Edge {
        let field_name = &self.new_graph.vertex(field).name;
        let Some(pre_image) = mapping.source(field) else {
            panic!("field vertex `{field_name}` has an inserted type edge but no pre-image");
        };
        for operation in operations {
            if let EditOperation::DeleteEdge { source } = *operation {
                let deleted_edge = self.old_graph.edge(source);
                if deleted_edge.from == pre_image {
                    return deleted_edge;
                }
            }
        }
        panic!("no deleted type edge found for field vertex `{field_name}`");
    }

    fn type_edge_changed(&mut self, source: EdgeId, target: EdgeId) {
        let from = self.new_graph.edge(target).from;
        match self.new_graph.vertex(from).kind {
            VertexKind::Field => self.field_type_changed(source, target),
            VertexKind::Argument => self.argument_default_value_changed(source, target),
            _ => {}
        }
    }

    fn field_type_changed(&mut self, source: EdgeId, target: EdgeId) {
        let target_edge = self.new_graph.edge(target);
        let field_id = target_edge.from;
        let container = self
            .new_graph
            .vertex(self.new_graph.fields_container_for_field(field_id));
        if container.kind != VertexKind::Object {
            return;
        }
        let field = self.new_graph.vertex(field_id).name.clone();
        let old_type = decode_type_label(self.old_graph.edge(source)).type_ref;
        let new_type = decode_type_label(target_edge).type_ref;
        self.object_modification(&container.name)
            .push(ObjectChangeDetail::FieldTypeModification {
                field,
                old_type,
                new_type,
            });
    }

    fn argument_default_value_changed(&mut self, source: EdgeId, target: EdgeId) {
        let target_edge = self.new_graph.edge(target);
        let argument_id = target_edge.from;
        let field_id = self.new_graph.field_for_argument(argument_id);
        let container = self
            .new_graph
            .vertex(self.new_graph.fields_container_for_field(field_id));
        let field = self.new_graph.vertex(field_id).name.clone();
        let argument = self.new_graph.vertex(argument_id).name.clone();
        let old_value = decode_type_label(self.old_graph.edge(source)).default_value;
        let new_value = decode_type_label(target_edge).default_value;
        match container.kind {
            VertexKind::Object => {
                self.object_modification(&container.name).push(
                    ObjectChangeDetail::FieldArgumentDefaultValueModification {
                        field,
                        argument,
                        old_value,
                        new_value,
                    },
                );
            }
            VertexKind::Interface => {
                self.interface_modification(&container.name).push(
                    InterfaceChangeDetail::FieldArgumentDefaultValueModification {
                        field,
                        argument,
                        old_value,
                        new_value,
                    },
                );
            }
            other => unreachable!("argument `{argument}` owned by a field on a {other} vertex"),
        }
    }

    // ------------------------------------------------------------------
    // Pass 4: interface-implementation edges
    // ------------------------------------------------------------------

    fn handle_implements_changes(&mut self, operations: &[EditOperation]) {
        for operation in operations {
            if let EditOperation::InsertEdge { target } = *operation {
                let new_edge = self.new_graph.edge(target);
                if new_edge.is_implements_edge() {
                    self.interface_implementation_added(new_edge);
                }
            }
        }
    }

    fn interface_implementation_added(&mut self, new_edge: &Edge) {
        let source = self.new_graph.vertex(new_edge.from);
        let interface = self.new_graph.vertex(new_edge.to).name.clone();
        match source.kind {
            VertexKind::Object => {
                if self.object_was_added(&source.name) {
                    return;
                }
                self.object_modification(&source.name)
                    .push(ObjectChangeDetail::InterfaceImplementationAddition { interface });
            }
            VertexKind::Interface => {
                if self.interface_was_added(&source.name) {
                    return;
                }
                self.interface_modification(&source.name)
                    .push(InterfaceChangeDetail::InterfaceImplementationAddition { interface });
            }
            other => unreachable!("implements edge from {other} vertex `{}`", source.name),
        }
    }

    // ------------------------------------------------------------------
    // Pass 5: union-membership edges
    // ------------------------------------------------------------------

    fn handle_union_member_changes(&mut self, operations: &[EditOperation]) {
        for operation in operations {
            match *operation {
                EditOperation::InsertEdge { target } => {
                    let new_edge = self.new_graph.edge(target);
                    if self.new_graph.vertex(new_edge.from).kind == VertexKind::Union {
                        self.union_member_added(new_edge);
                    }
                }
                EditOperation::DeleteEdge { source } => {
                    let old_edge = self.old_graph.edge(source);
                    if self.old_graph.vertex(old_edge.from).kind == VertexKind::Union {
                        self.union_member_deleted(old_edge);
                    }
                }
                _ => {}
            }
        }
    }

    fn union_member_added(&mut self, new_edge: &Edge) {
        let union = self.new_graph.vertex(new_edge.from);
        if self.union_was_added(&union.name) {
            return;
        }
        let name = self.new_graph.vertex(new_edge.to).name.clone();
        self.union_modification(&union.name)
            .push(UnionChangeDetail::MemberAddition { name });
    }

    fn union_member_deleted(&mut self, old_edge: &Edge) {
        let union = self.old_graph.vertex(old_edge.from);
        if self.union_was_deleted(&union.name) {
            return;
        }
        let name = self.old_graph.vertex(old_edge.to).name.clone();
        self.union_modification(&union.name)
            .push(UnionChangeDetail::MemberDeletion { name });
    }

    // ------------------------------------------------------------------
    // Suppression predicates over the pass-1 records
    // ------------------------------------------------------------------

    fn object_was_added(&self, name: &str) -> bool {
        self.objects.get(name).is_some_and(SchemaDifference::is_addition)
    }

    fn object_was_deleted(&self, name: &str) -> bool {
        self.objects.get(name).is_some_and(SchemaDifference::is_deletion)
    }

    fn interface_was_added(&self, name: &str) -> bool {
        self.interfaces
            .get(name)
            .is_some_and(SchemaDifference::is_addition)
    }

    fn union_was_added(&self, name: &str) -> bool {
        self.unions.get(name).is_some_and(SchemaDifference::is_addition)
    }

    fn union_was_deleted(&self, name: &str) -> bool {
        self.unions.get(name).is_some_and(SchemaDifference::is_deletion)
    }

    fn field_is_new_on_object(&self, object: &str, field: &str) -> bool {
        let Some(SchemaDifference::Modification { details, .. }) = self.objects.get(object) else {
            return false;
        };
        details
            .iter()
            .any(|detail| matches!(detail, ObjectChangeDetail::FieldAddition { name } if name == field))
    }

    // ------------------------------------------------------------------
    // Accumulator access
    // ------------------------------------------------------------------

    fn object_modification(&mut self, name: &str) -> &mut Vec<ObjectChangeDetail> {
        modification_details(&mut self.objects, name)
    }

    fn interface_modification(&mut self, name: &str) -> &mut Vec<InterfaceChangeDetail> {
        modification_details(&mut self.interfaces, name)
    }

    fn union_modification(&mut self, name: &str) -> &mut Vec<UnionChangeDetail> {
        modification_details(&mut self.unions, name)
    }
}

/// Seed a pass-1 record; each name carries exactly one vertex-level
/// operation, so insertion never displaces an earlier record.
fn record<D>(differences: &mut IndexMap<String, SchemaDifference<D>>, difference: SchemaDifference<D>) {
    differences.insert(difference.name().to_string(), difference);
}

/// Fetch or create the `Modification` record for `name`.
///
/// # Panics
///
/// Panics when the existing record for `name` carries a different tag;
/// callers apply the suppression predicates first, so a mismatch means the
/// upstream contract was breached.
fn modification_details<'m, D>(
    differences: &'m mut IndexMap<String, SchemaDifference<D>>,
    name: &str,
) -> &'m mut Vec<D> {
    let difference = differences
        .entry(name.to_string())
        .or_insert_with(|| SchemaDifference::Modification {
            name: name.to_string(),
            details: Vec::new(),
        });
    match difference {
        SchemaDifference::Modification { details, .. } => details,
        _ => panic!("difference record for `{name}` is not a modification"),
    }
}

/// Decode a type-edge label, aborting on malformed input.
///
/// Upstream guarantees the `type=` convention for every edge routed here; a
/// violation means the graph/matching contract was breached, not that the
/// input data is merely bad.
fn decode_type_label(edge: &Edge) -> TypeLabel {
    match TypeLabel::parse(&edge.label) {
        Ok(label) => label,
        Err(err) => panic!("malformed type edge label {:?}: {err}", edge.label),
    }
}
