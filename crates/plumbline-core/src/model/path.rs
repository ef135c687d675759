use serde::{Deserialize, Serialize};

use super::node::{Node, NodeKind};

/// One step of a reporting path: the kind and authored name of an ancestor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathSegment {
    pub kind: NodeKind,
    pub name: String,
}

/// Root-to-node path used to locate a mismatch in the report
///
/// Paths are accumulated while walking the tree; nodes themselves carry no
/// parent links. Segments use the names of the side the record describes
/// (the reference tree where it exists, the imported tree for unexpected
/// nodes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    /// Start a path at a tree root
    pub fn root(node: &Node) -> Self {
        Self(vec![PathSegment {
            kind: node.kind,
            name: node.name.clone(),
        }])
    }

    /// Extend this path with a child node
    pub fn child(&self, node: &Node) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment {
            kind: node.kind,
            name: node.name.clone(),
        });
        Self(segments)
    }

    /// The segments from root to node
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments (the root contributes 1)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The final segment, i.e. the node the record is about
    pub fn leaf(&self) -> Option<&PathSegment> {
        self.0.last()
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{} \"{}\"", segment.kind.label(), segment.name)?;
        }
        Ok(())
    }
}
