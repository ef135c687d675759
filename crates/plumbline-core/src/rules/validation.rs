use crate::errors::{Result, StructuralInputError, TreeSide};
use crate::model::Node;

use super::invariants;

/// Validate one input tree before matching
///
/// Checks, in priority order:
///
/// 1. Every node has a non-blank identifier
/// 2. No identifier reappears on its own ancestor path (cycle through a loader)
/// 3. No identifier is used by two distinct nodes
///
/// Returns the first violation encountered; a run never starts matching on
/// a tree that fails any of these.
pub fn validate_tree(root: &Node, side: TreeSide) -> Result<()> {
    if let Some(path) = invariants::find_blank_id(root) {
        return Err(StructuralInputError::BlankIdentifier { side, path });
    }

    if let Some((id, path)) = invariants::find_ancestor_alias(root) {
        return Err(StructuralInputError::CycleDetected { side, id, path });
    }

    if let Some((id, first, second)) = invariants::find_duplicate_id(root) {
        return Err(StructuralInputError::DuplicateIdentifier {
            side,
            id,
            first,
            second,
        });
    }

    Ok(())
}
