//! Mismatch classification rules.
//!
//! Priority-ordered: the first applicable rule wins. Divergences between
//! well-formed trees are never fatal; each rule yields a category and a
//! severity, and the engine attaches path and node summaries.

use crate::model::{Node, RelationKind};

use super::model::{MismatchCategory, Severity};

/// Classify a matched pair of nodes
///
/// Kinds are equal by construction of the kind partition. Returns `None`
/// for a clean match. `containment_reachable` is true when every edge from
/// the root to this node is a Containment edge; a rename inside the strict
/// spatial decomposition is an error, elsewhere advisory.
pub fn classify_pair(
    expected: &Node,
    actual: &Node,
    containment_reachable: bool,
) -> Option<(MismatchCategory, Severity)> {
    let id_equal = expected.id == actual.id;
    let name_equal = expected.name == actual.name;

    match (id_equal, name_equal) {
        (true, true) => None,
        (true, false) => {
            let severity = if containment_reachable {
                Severity::Error
            } else {
                Severity::Warning
            };
            Some((MismatchCategory::Renamed, severity))
        }
        // Identifiers are expected to be stable across import; a change
        // signals a pipeline regression even when visually indistinguishable.
        (false, true) => Some((MismatchCategory::Reidentified, Severity::Warning)),
        (false, false) => Some((MismatchCategory::RenamedReidentified, Severity::Error)),
    }
}

/// Classify an expected node with no counterpart after import
///
/// Lost data is an error regardless of relation kind.
pub fn classify_missing() -> (MismatchCategory, Severity) {
    (MismatchCategory::Missing, Severity::Error)
}

/// Classify an actual node with no counterpart in the reference tree
///
/// Advisory by default; escalated to an error when the node arrived through
/// a Containment edge into a kind partition that now holds more children
/// than authored, which indicates structural drift rather than a benign
/// addition.
pub fn classify_unexpected(
    relation: RelationKind,
    expected_partition_count: usize,
    actual_partition_count: usize,
) -> (MismatchCategory, Severity) {
    let severity = if relation == RelationKind::Containment
        && actual_partition_count > expected_partition_count
    {
        Severity::Error
    } else {
        Severity::Warning
    };
    (MismatchCategory::Unexpected, severity)
}

/// Classify the edge between a matched parent and matched child
///
/// Evaluated independently of node-level rules. Returns `None` when the
/// relation kind is unchanged. The expected edge governs severity: losing a
/// Containment edge breaks the spatial decomposition, while a Reference
/// edge tightening into Containment is advisory.
pub fn classify_relation_change(
    expected: RelationKind,
    actual: RelationKind,
) -> Option<(MismatchCategory, Severity)> {
    if expected == actual {
        return None;
    }
    let severity = match expected {
        RelationKind::Containment => Severity::Error,
        RelationKind::Reference => Severity::Warning,
    };
    Some((MismatchCategory::RelationChanged, severity))
}
