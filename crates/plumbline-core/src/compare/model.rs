//! Mismatch report output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Record order is the traversal order of the matcher, so serialization is
//! deterministic for identical inputs.

use serde::{Deserialize, Serialize};

use crate::model::{Node, NodeKind, NodePath, RelationKind};

/// How serious a divergence is
///
/// `Error` means the import lost or structurally altered data; `Warning`
/// means the trees are visually equivalent but an import-pipeline signal
/// (identifier stability, reference links) degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

/// Typed category of a single divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MismatchCategory {
    /// Same identifier, different name
    Renamed,
    /// Same kind and name, different identifier
    Reidentified,
    /// Both identifier and name changed on a positionally matched node
    RenamedReidentified,
    /// Present in the reference tree, absent after import
    Missing,
    /// Present after import with no counterpart in the reference tree
    Unexpected,
    /// The edge between a matched parent and matched child changed kind
    RelationChanged,
}

/// Identity snapshot of one node, carried on records for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub kind: NodeKind,
    pub name: String,
    pub id: String,
}

impl NodeSummary {
    pub fn of(node: &Node) -> Self {
        Self {
            kind: node.kind,
            name: node.name.clone(),
            id: node.id.clone(),
        }
    }
}

/// Old/new relation kinds for a `RelationChanged` record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationChange {
    /// Edge kind in the reference tree
    pub expected: RelationKind,
    /// Edge kind after import
    pub actual: RelationKind,
}

/// One divergence between the two trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MismatchRecord {
    pub category: MismatchCategory,
    pub severity: Severity,
    /// Root-to-node path locating the divergence
    pub path: NodePath,
    /// The node as authored (absent for `Unexpected`)
    pub expected: Option<NodeSummary>,
    /// The node after import (absent for `Missing`)
    pub actual: Option<NodeSummary>,
    /// Populated only on `RelationChanged` records
    pub relation: Option<RelationChange>,
}

impl MismatchRecord {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Digest identity for both trees of a run
///
/// Digests are SHA-256 over the canonical JSON form of each tree; equal
/// digests short-circuit the run to an empty report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportIdentity {
    pub expected_tree_digest: String,
    pub actual_tree_digest: String,
}

/// Per-category record counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub renamed: usize,
    pub reidentified: usize,
    pub renamed_reidentified: usize,
    pub missing: usize,
    pub unexpected: usize,
    pub relation_changed: usize,
}

impl CategoryTotals {
    pub(crate) fn bump(&mut self, category: MismatchCategory) {
        match category {
            MismatchCategory::Renamed => self.renamed += 1,
            MismatchCategory::Reidentified => self.reidentified += 1,
            MismatchCategory::RenamedReidentified => self.renamed_reidentified += 1,
            MismatchCategory::Missing => self.missing += 1,
            MismatchCategory::Unexpected => self.unexpected += 1,
            MismatchCategory::RelationChanged => self.relation_changed += 1,
        }
    }

    /// Sum across all categories
    pub fn total(&self) -> usize {
        self.renamed
            + self.reidentified
            + self.renamed_reidentified
            + self.missing
            + self.unexpected
            + self.relation_changed
    }
}

/// The complete result of one validation run
///
/// `report_schema_version` is always 1 for this implementation. Records are
/// in traversal order and never filtered; `has_errors` is true iff any
/// record carries `Severity::Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version of this report structure (always 1)
    pub report_schema_version: u32,
    /// Tree digests for both sides of the run
    pub identity: ReportIdentity,
    /// Per-category record counts
    pub totals: CategoryTotals,
    /// True if any record has severity error
    pub has_errors: bool,
    /// All mismatch records, in traversal order
    pub records: Vec<MismatchRecord>,
}

impl Report {
    /// True when the trees reconciled without a single divergence
    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_totals_bump_and_sum() {
        let mut totals = CategoryTotals::default();
        totals.bump(MismatchCategory::Renamed);
        totals.bump(MismatchCategory::Renamed);
        totals.bump(MismatchCategory::Missing);

        assert_eq!(totals.renamed, 2);
        assert_eq!(totals.missing, 1);
        assert_eq!(totals.total(), 3);
    }
}
