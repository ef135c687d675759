//! Domain model for spatial/containment trees.

mod node;
mod path;

pub use node::{Edge, Node, NodeKind, RelationKind};
pub use path::{NodePath, PathSegment};
