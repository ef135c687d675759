//! Child alignment under a matched parent pair.
//!
//! Matching is local by construction: this module only ever sees the direct
//! children of two already-matched parents, so a correspondence can never
//! cross into a sibling subtree.

use std::collections::HashMap;

use crate::model::{Edge, NodeKind};

/// Alignment of the children of one matched parent pair
///
/// `pairs` holds `(expected_index, actual_index)` in expected-child order;
/// `missing` holds indices of unpaired expected children in their original
/// order, `unexpected` indices of unpaired actual children likewise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildAlignment {
    pub pairs: Vec<(usize, usize)>,
    pub missing: Vec<usize>,
    pub unexpected: Vec<usize>,
}

/// Align two child lists by kind partition
///
/// Within each kind, children are paired by identifier equality first, then
/// the remainder by exact name equality. When several candidates share a
/// name, the lowest positional index wins, so the same inputs always
/// produce the same alignment. Leftovers on the expected side are missing,
/// on the actual side unexpected.
pub fn align_children(expected: &[Edge], actual: &[Edge]) -> ChildAlignment {
    let mut actual_taken = vec![false; actual.len()];
    let mut pair_for_expected: Vec<Option<usize>> = vec![None; expected.len()];

    // Index actual children by (kind, id). Push order keeps candidate lists
    // in ascending positional order, which is the tie-break order.
    let mut by_id: HashMap<(NodeKind, &str), Vec<usize>> = HashMap::new();
    for (ai, edge) in actual.iter().enumerate() {
        by_id
            .entry((edge.node.kind, edge.node.id.as_str()))
            .or_default()
            .push(ai);
    }

    // First pass: identifier equality within the kind partition
    for (ei, edge) in expected.iter().enumerate() {
        if let Some(candidates) = by_id.get(&(edge.node.kind, edge.node.id.as_str())) {
            if let Some(&ai) = candidates.iter().find(|&&ai| !actual_taken[ai]) {
                actual_taken[ai] = true;
                pair_for_expected[ei] = Some(ai);
            }
        }
    }

    // Second pass: exact name equality among the remainder
    let mut by_name: HashMap<(NodeKind, &str), Vec<usize>> = HashMap::new();
    for (ai, edge) in actual.iter().enumerate() {
        if !actual_taken[ai] {
            by_name
                .entry((edge.node.kind, edge.node.name.as_str()))
                .or_default()
                .push(ai);
        }
    }
    for (ei, edge) in expected.iter().enumerate() {
        if pair_for_expected[ei].is_some() {
            continue;
        }
        if let Some(candidates) = by_name.get(&(edge.node.kind, edge.node.name.as_str())) {
            if let Some(&ai) = candidates.iter().find(|&&ai| !actual_taken[ai]) {
                actual_taken[ai] = true;
                pair_for_expected[ei] = Some(ai);
            }
        }
    }

    let mut pairs = Vec::new();
    let mut missing = Vec::new();
    for (ei, pairing) in pair_for_expected.iter().enumerate() {
        match pairing {
            Some(ai) => pairs.push((ei, *ai)),
            None => missing.push(ei),
        }
    }
    let unexpected = actual_taken
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(ai, _)| ai)
        .collect();

    ChildAlignment {
        pairs,
        missing,
        unexpected,
    }
}
