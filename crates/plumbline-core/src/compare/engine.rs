//! Reconciliation run orchestration.
//!
//! The core entry point is [`compare_trees`], which accepts the reference
//! tree and the tree reconstructed after import and produces a [`Report`].

use std::collections::HashMap;
use std::time::Instant;

use plumbline_core_types::RunContext;
use sha2::{Digest as _, Sha256};

use crate::errors::{Result, TreeSide};
use crate::model::{Edge, Node, NodeKind, NodePath, RelationKind};
use crate::rules::validate_tree;
use crate::{log_run_end, log_run_error, log_run_start};

use super::classify::{
    classify_missing, classify_pair, classify_relation_change, classify_unexpected,
};
use super::matcher::align_children;
use super::model::{MismatchRecord, NodeSummary, RelationChange, Report, ReportIdentity};
use super::report::build_report;

/// Compute the digest identity of one tree
///
/// SHA-256 over the canonical JSON form. Field order is fixed by the model
/// types, so identical trees always produce identical digests.
fn tree_digest(root: &Node) -> String {
    let canonical = serde_json::to_string(root).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Count direct children per kind partition
fn kind_counts(children: &[Edge]) -> HashMap<NodeKind, usize> {
    let mut counts: HashMap<NodeKind, usize> = HashMap::new();
    for edge in children {
        *counts.entry(edge.node.kind).or_insert(0) += 1;
    }
    counts
}

/// Compare two well-formed trees with a caller-supplied run context
///
/// Same contract as [`compare_trees`]; batch callers validating many import
/// jobs pass their own [`RunContext`] so log events correlate per job.
///
/// # Errors
///
/// - `BlankIdentifier`, `CycleDetected`, `DuplicateIdentifier` — either
///   input tree fails structural validation; no partial report is produced
pub fn compare_trees_with_context(
    expected: &Node,
    actual: &Node,
    ctx: &RunContext,
) -> Result<Report> {
    let started = Instant::now();
    log_run_start!(
        "compare_trees",
        run_id = ctx.run_id.as_str(),
        trace_id = ctx.trace_id.as_ref().map(|t| t.as_str()).unwrap_or("")
    );

    for (root, side) in [(expected, TreeSide::Expected), (actual, TreeSide::Actual)] {
        if let Err(err) = validate_tree(root, side) {
            log_run_error!(
                "compare_trees",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                run_id = ctx.run_id.as_str()
            );
            return Err(err);
        }
    }

    let identity = ReportIdentity {
        expected_tree_digest: tree_digest(expected),
        actual_tree_digest: tree_digest(actual),
    };

    // Fast path: identical canonical forms reconcile to an empty report
    if identity.expected_tree_digest == identity.actual_tree_digest {
        let report = build_report(identity, Vec::new());
        log_run_end!(
            "compare_trees",
            duration_ms = started.elapsed().as_millis() as u64,
            run_id = ctx.run_id.as_str(),
            record_count = 0_u64
        );
        return Ok(report);
    }

    let mut records = Vec::new();
    let root_path = NodePath::root(expected);
    let suppressed = expected.ignored;

    // The roots are always matched: the entry point is not a subject of
    // identity comparison, but its own identifier/name divergence is still
    // reported before descending.
    if !suppressed {
        if let Some((category, severity)) = classify_pair(expected, actual, true) {
            records.push(MismatchRecord {
                category,
                severity,
                path: root_path.clone(),
                expected: Some(NodeSummary::of(expected)),
                actual: Some(NodeSummary::of(actual)),
                relation: None,
            });
        }
    }
    walk_pair(expected, actual, &root_path, true, suppressed, &mut records);

    let report = build_report(identity, records);
    log_run_end!(
        "compare_trees",
        duration_ms = started.elapsed().as_millis() as u64,
        run_id = ctx.run_id.as_str(),
        record_count = report.records.len() as u64,
        error_count = report.records.iter().filter(|r| r.is_error()).count() as u64
    );
    Ok(report)
}

/// Compare the reference tree against the imported tree
///
/// Runs structural validation on both inputs, then walks the matched pairs
/// depth-first, aligning children per kind partition and recording every
/// divergence. The returned report is complete and deterministic: repeated
/// runs over the same inputs produce identical reports.
///
/// # Errors
///
/// - `BlankIdentifier`, `CycleDetected`, `DuplicateIdentifier` — either
///   input tree fails structural validation; no partial report is produced
pub fn compare_trees(expected: &Node, actual: &Node) -> Result<Report> {
    compare_trees_with_context(expected, actual, &RunContext::new())
}

/// Walk a matched pair: align children, record divergences, recurse
///
/// `containment_reachable` is true when every edge from the root to
/// `expected` is a Containment edge. `suppressed` is sticky: once an
/// ignored expected node is entered, nothing below it is recorded, though
/// descent continues so alignment state stays consistent.
fn walk_pair(
    expected: &Node,
    actual: &Node,
    path: &NodePath,
    containment_reachable: bool,
    suppressed: bool,
    records: &mut Vec<MismatchRecord>,
) {
    let alignment = align_children(&expected.children, &actual.children);
    let expected_counts = kind_counts(&expected.children);
    let actual_counts = kind_counts(&actual.children);

    // Paired children, in expected order. The node-level record is emitted
    // at this level, but descent happens regardless of how the pairing was
    // formed so deeper divergences are still discovered.
    for &(ei, ai) in &alignment.pairs {
        let e_edge = &expected.children[ei];
        let a_edge = &actual.children[ai];
        let child_path = path.child(&e_edge.node);
        let child_suppressed = suppressed || e_edge.node.ignored;
        let child_reachable =
            containment_reachable && e_edge.relation == RelationKind::Containment;

        if !child_suppressed {
            if let Some((category, severity)) =
                classify_pair(&e_edge.node, &a_edge.node, child_reachable)
            {
                records.push(MismatchRecord {
                    category,
                    severity,
                    path: child_path.clone(),
                    expected: Some(NodeSummary::of(&e_edge.node)),
                    actual: Some(NodeSummary::of(&a_edge.node)),
                    relation: None,
                });
            }
            // Secondary record on the same path when the edge changed kind
            if let Some((category, severity)) =
                classify_relation_change(e_edge.relation, a_edge.relation)
            {
                records.push(MismatchRecord {
                    category,
                    severity,
                    path: child_path.clone(),
                    expected: Some(NodeSummary::of(&e_edge.node)),
                    actual: Some(NodeSummary::of(&a_edge.node)),
                    relation: Some(RelationChange {
                        expected: e_edge.relation,
                        actual: a_edge.relation,
                    }),
                });
            }
        }

        walk_pair(
            &e_edge.node,
            &a_edge.node,
            &child_path,
            child_reachable,
            child_suppressed,
            records,
        );
    }

    // Unpaired expected children: the whole subtree is lost, and every node
    // in it gets its own record at its own path
    for &ei in &alignment.missing {
        let e_edge = &expected.children[ei];
        emit_missing_subtree(
            &e_edge.node,
            &path.child(&e_edge.node),
            suppressed,
            records,
        );
    }

    // Unpaired actual children, likewise recursively
    for &ai in &alignment.unexpected {
        if suppressed {
            continue;
        }
        let a_edge = &actual.children[ai];
        let kind = a_edge.node.kind;
        emit_unexpected_subtree(
            &a_edge.node,
            a_edge.relation,
            &path.child(&a_edge.node),
            expected_counts.get(&kind).copied().unwrap_or(0),
            actual_counts.get(&kind).copied().unwrap_or(0),
            records,
        );
    }
}

/// Record a lost subtree: one Missing record per node, ignore markers honored
fn emit_missing_subtree(
    node: &Node,
    path: &NodePath,
    suppressed: bool,
    records: &mut Vec<MismatchRecord>,
) {
    let suppressed = suppressed || node.ignored;
    if !suppressed {
        let (category, severity) = classify_missing();
        records.push(MismatchRecord {
            category,
            severity,
            path: path.clone(),
            expected: Some(NodeSummary::of(node)),
            actual: None,
            relation: None,
        });
    }
    for edge in &node.children {
        emit_missing_subtree(&edge.node, &path.child(&edge.node), suppressed, records);
    }
}

/// Record an added subtree: one Unexpected record per node
///
/// The partition counts of the subtree root come from its would-be siblings;
/// below the root nothing was expected, so the expected count is zero and a
/// Containment-attached descendant always reads as structural drift.
fn emit_unexpected_subtree(
    node: &Node,
    relation: RelationKind,
    path: &NodePath,
    expected_partition_count: usize,
    actual_partition_count: usize,
    records: &mut Vec<MismatchRecord>,
) {
    let (category, severity) =
        classify_unexpected(relation, expected_partition_count, actual_partition_count);
    records.push(MismatchRecord {
        category,
        severity,
        path: path.clone(),
        expected: None,
        actual: Some(NodeSummary::of(node)),
        relation: None,
    });

    let counts = kind_counts(&node.children);
    for edge in &node.children {
        emit_unexpected_subtree(
            &edge.node,
            edge.relation,
            &path.child(&edge.node),
            0,
            counts.get(&edge.node.kind).copied().unwrap_or(0),
            records,
        );
    }
}
