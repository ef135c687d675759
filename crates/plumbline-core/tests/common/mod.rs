//! Shared tree builders for integration tests.

use plumbline_core::{Node, NodeKind};

#[allow(dead_code)]
pub fn project(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Project, name, id)
}

#[allow(dead_code)]
pub fn site(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Site, name, id)
}

#[allow(dead_code)]
pub fn building(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Building, name, id)
}

#[allow(dead_code)]
pub fn storey(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Storey, name, id)
}

#[allow(dead_code)]
pub fn wall(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Wall, name, id)
}

#[allow(dead_code)]
pub fn slab(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Slab, name, id)
}

#[allow(dead_code)]
pub fn floor(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Floor, name, id)
}

#[allow(dead_code)]
pub fn roof(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Roof, name, id)
}

#[allow(dead_code)]
pub fn door(name: &str, id: &str) -> Node {
    Node::new(NodeKind::Door, name, id)
}

/// A small but representative reference tree:
///
/// ```text
/// Project "proj a"
/// └── Site "site a"
///     └── Building "building a"
///         ├── Storey "storey a"   ── Wall "wall a", ref Slab "slab a"
///         ├── Storey "storey b"   ── Floor "floor b" ── Roof "roof b", Wall "wall b"
///         └── Storey "storey c"   ── ref Slab "slab c"
/// ```
#[allow(dead_code)]
pub fn reference_tree() -> Node {
    project("proj a", "p-1").contains(
        site("site a", "st-1").contains(
            building("building a", "b-1")
                .contains(
                    storey("storey a", "s-1")
                        .contains(wall("wall a", "w-1"))
                        .references(slab("slab a", "sl-1")),
                )
                .contains(
                    storey("storey b", "s-2")
                        .contains(floor("floor b", "f-1").contains(roof("roof b", "r-1")))
                        .contains(wall("wall b", "w-2")),
                )
                .contains(storey("storey c", "s-3").references(slab("slab c", "sl-3"))),
        ),
    )
}
