//! Edit-operation classification and the difference report model.
//!
//! [`EditOperationAnalyzer`] walks the matching engine's edit-operation list
//! in five fixed passes and accumulates typed, per-name difference records;
//! the outcome is an [`AnalysisResult`] with one insertion-ordered map per
//! schema type kind.

mod analyzer;
mod changes;
mod result;

pub use analyzer::EditOperationAnalyzer;
pub use changes::{
    EnumChangeDetail, EnumDifference, InputObjectChangeDetail, InputObjectDifference,
    InterfaceChangeDetail, InterfaceDifference, ObjectChangeDetail, ObjectDifference,
    ScalarChangeDetail, ScalarDifference, SchemaDifference, UnionChangeDetail, UnionDifference,
};
pub use result::{AnalysisResult, AnalysisSummary};
