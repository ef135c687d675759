use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::NodePath;

/// Result type alias using StructuralInputError
pub type Result<T> = std::result::Result<T, StructuralInputError>;

/// Which of the two input trees an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeSide {
    /// The reference tree (the model as authored)
    Expected,
    /// The tree reconstructed after the import round-trip
    Actual,
}

impl TreeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeSide::Expected => "expected",
            TreeSide::Actual => "actual",
        }
    }
}

impl std::fmt::Display for TreeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fatal input-tree errors
///
/// These indicate the inputs themselves are malformed, not that the two
/// trees differ: a run aborts before matching begins and no partial report
/// is produced. Divergences between well-formed trees are never errors;
/// they are always mismatch records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralInputError {
    /// A node's identifier reappears on its own ancestor path, which is how
    /// a cyclic source model surfaces through a loader
    #[error("{side} tree: identifier {id} reappears on its own ancestor path at {path}")]
    CycleDetected {
        side: TreeSide,
        id: String,
        path: NodePath,
    },

    /// The same identifier is used by two distinct nodes in one tree
    #[error("{side} tree: duplicate identifier {id} (first at {first}, again at {second})")]
    DuplicateIdentifier {
        side: TreeSide,
        id: String,
        first: NodePath,
        second: NodePath,
    },

    /// A node has an empty identifier
    #[error("{side} tree: node at {path} has a blank identifier")]
    BlankIdentifier { side: TreeSide, path: NodePath },

    /// The source model contains no root entity; constructed by loaders,
    /// never by the engine itself
    #[error("{side} tree: source model has no root entity")]
    MissingRoot { side: TreeSide },
}

impl StructuralInputError {
    /// Stable error code for programmatic handling and log assertions
    pub fn code(&self) -> &'static str {
        match self {
            StructuralInputError::CycleDetected { .. } => "ERR_CYCLE_DETECTED",
            StructuralInputError::DuplicateIdentifier { .. } => "ERR_DUPLICATE_IDENTIFIER",
            StructuralInputError::BlankIdentifier { .. } => "ERR_BLANK_IDENTIFIER",
            StructuralInputError::MissingRoot { .. } => "ERR_MISSING_ROOT",
        }
    }

    /// Which input tree the error refers to
    pub fn side(&self) -> TreeSide {
        match self {
            StructuralInputError::CycleDetected { side, .. }
            | StructuralInputError::DuplicateIdentifier { side, .. }
            | StructuralInputError::BlankIdentifier { side, .. }
            | StructuralInputError::MissingRoot { side } => *side,
        }
    }
}
