use serde::{Deserialize, Serialize};

/// Entity kind in a spatial/containment tree
///
/// The set is fixed by the domain; the classifier relies on exhaustive
/// matching, so new kinds are a deliberate, compiler-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Project,
    Site,
    Building,
    Storey,
    Space,
    Slab,
    Wall,
    Floor,
    Roof,
    Beam,
    Column,
    Covering,
    Door,
    Window,
    Stair,
    Railing,
    Opening,
    Pipe,
    Member,
}

impl NodeKind {
    /// Display label used in reporting paths
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Project => "Project",
            NodeKind::Site => "Site",
            NodeKind::Building => "Building",
            NodeKind::Storey => "Storey",
            NodeKind::Space => "Space",
            NodeKind::Slab => "Slab",
            NodeKind::Wall => "Wall",
            NodeKind::Floor => "Floor",
            NodeKind::Roof => "Roof",
            NodeKind::Beam => "Beam",
            NodeKind::Column => "Column",
            NodeKind::Covering => "Covering",
            NodeKind::Door => "Door",
            NodeKind::Window => "Window",
            NodeKind::Stair => "Stair",
            NodeKind::Railing => "Railing",
            NodeKind::Opening => "Opening",
            NodeKind::Pipe => "Pipe",
            NodeKind::Member => "Member",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Relation between a parent and one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Strict spatial decomposition (e.g. Building contains Storey)
    Containment,
    /// Looser associative link that does not imply ownership
    /// (e.g. a Storey referencing a Slab placed within it)
    Reference,
}

/// A child edge: the relation to the parent plus the child node itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub relation: RelationKind,
    pub node: Node,
}

/// An entity in a spatial/containment tree
///
/// Nodes own their children; there are no parent back-pointers, so a tree
/// is a plain acyclic value and reporting paths are accumulated during
/// traversal. The `id` is an opaque identifier assigned by the source model
/// (stable across versions, unique within one tree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Entity kind
    pub kind: NodeKind,

    /// Human-readable name as authored in the model
    pub name: String,

    /// Opaque stable identifier, unique within one tree
    pub id: String,

    /// Loader-set marker: suppress all mismatch reporting for this node
    /// and its entire subtree
    pub ignored: bool,

    /// Ordered children, each tagged with its relation to this node
    pub children: Vec<Edge>,
}

impl Node {
    /// Create a new leaf node
    pub fn new(kind: NodeKind, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            id: id.into(),
            ignored: false,
            children: Vec::new(),
        }
    }

    /// Mark this node's subtree as excluded from mismatch reporting
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Append a child with an explicit relation kind
    pub fn with_child(mut self, relation: RelationKind, node: Node) -> Self {
        self.children.push(Edge { relation, node });
        self
    }

    /// Append a child through a Containment edge
    pub fn contains(self, node: Node) -> Self {
        self.with_child(RelationKind::Containment, node)
    }

    /// Append a child through a Reference edge
    pub fn references(self, node: Node) -> Self {
        self.with_child(RelationKind::Reference, node)
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total node count of this subtree, self included
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|edge| edge.node.subtree_size())
            .sum::<usize>()
    }
}
