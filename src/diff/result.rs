//! Analysis result structures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::changes::{
    EnumDifference, InputObjectDifference, InterfaceDifference, ObjectDifference,
    ScalarDifference, SchemaDifference, UnionDifference,
};

/// Complete result of analyzing one edit-operation list.
///
/// Six name-keyed, insertion-ordered difference maps, one per schema type
/// kind. The result is immutable once returned; callers own it outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct AnalysisResult {
    /// Summary statistics
    pub summary: AnalysisSummary,
    /// Object type differences by type name
    pub objects: IndexMap<String, ObjectDifference>,
    /// Interface type differences by type name
    pub interfaces: IndexMap<String, InterfaceDifference>,
    /// Union type differences by type name
    pub unions: IndexMap<String, UnionDifference>,
    /// Enum type differences by type name
    pub enums: IndexMap<String, EnumDifference>,
    /// Input object type differences by type name
    pub input_objects: IndexMap<String, InputObjectDifference>,
    /// Scalar type differences by type name
    pub scalars: IndexMap<String, ScalarDifference>,
}

impl AnalysisResult {
    pub(crate) fn new(
        objects: IndexMap<String, ObjectDifference>,
        interfaces: IndexMap<String, InterfaceDifference>,
        unions: IndexMap<String, UnionDifference>,
        enums: IndexMap<String, EnumDifference>,
        input_objects: IndexMap<String, InputObjectDifference>,
        scalars: IndexMap<String, ScalarDifference>,
    ) -> Self {
        let mut summary = AnalysisSummary::default();
        summary.tally(&objects);
        summary.tally(&interfaces);
        summary.tally(&unions);
        summary.tally(&enums);
        summary.tally(&input_objects);
        summary.tally(&scalars);
        Self {
            summary,
            objects,
            interfaces,
            unions,
            enums,
            input_objects,
            scalars,
        }
    }

    /// Whether the analysis found any difference at all
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes() > 0
    }
}

/// Summary statistics over a full analysis result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Types added across all kinds
    pub types_added: usize,
    /// Types deleted across all kinds
    pub types_deleted: usize,
    /// Types modified across all kinds
    pub types_modified: usize,
    /// Member-level details recorded across all modifications
    pub details_recorded: usize,
}

impl AnalysisSummary {
    fn tally<D>(&mut self, differences: &IndexMap<String, SchemaDifference<D>>) {
        for difference in differences.values() {
            match difference {
                SchemaDifference::Addition { .. } => self.types_added += 1,
                SchemaDifference::Deletion { .. } => self.types_deleted += 1,
                SchemaDifference::Modification { details, .. } => {
                    self.types_modified += 1;
                    self.details_recorded += details.len();
                }
            }
        }
    }

    /// Total number of difference records
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.types_added + self.types_deleted + self.types_modified
    }
}
