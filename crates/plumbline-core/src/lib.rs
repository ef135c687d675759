//! Plumbline Core - hierarchy-import reconciliation engine
//!
//! This crate provides the core engine for validating a model import
//! round-trip, including:
//! - Node model for spatial/containment trees (kind, name, identifier,
//!   relation-tagged children, ignore markers)
//! - Structural input validation (cycles, duplicate identifiers)
//! - Child alignment across renumbered/renamed nodes (identifier-first,
//!   name-fallback matching)
//! - Typed mismatch classification with severities
//! - Deterministic, traversal-ordered mismatch reports
//!
//! The import pipeline, model-format parsing, and report rendering are
//! caller-owned; the engine consumes two already-parsed trees.

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use compare::engine::{compare_trees, compare_trees_with_context};
pub use compare::model::{
    CategoryTotals, MismatchCategory, MismatchRecord, NodeSummary, RelationChange, Report,
    ReportIdentity, Severity,
};
pub use errors::{Result, StructuralInputError, TreeSide};
pub use model::{Edge, Node, NodeKind, NodePath, PathSegment, RelationKind};
