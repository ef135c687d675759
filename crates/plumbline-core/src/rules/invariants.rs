use std::collections::{HashMap, HashSet};

use crate::model::{Node, NodePath};

/// Find a node whose identifier reappears on its own ancestor path
///
/// Nodes own their children, so a true aliasing cycle cannot be represented;
/// what a cyclic source model produces through a loader is an identifier
/// recurring below itself. Returns the offending `(id, path)` if found.
pub fn find_ancestor_alias(root: &Node) -> Option<(String, NodePath)> {
    fn walk<'a>(
        node: &'a Node,
        path: &NodePath,
        ancestors: &mut HashSet<&'a str>,
    ) -> Option<(String, NodePath)> {
        if !ancestors.insert(node.id.as_str()) {
            return Some((node.id.clone(), path.clone()));
        }
        for edge in &node.children {
            let child_path = path.child(&edge.node);
            if let Some(found) = walk(&edge.node, &child_path, ancestors) {
                return Some(found);
            }
        }
        ancestors.remove(node.id.as_str());
        None
    }

    let mut ancestors = HashSet::new();
    walk(root, &NodePath::root(root), &mut ancestors)
}

/// Find the first identifier used by two distinct nodes in one tree
///
/// Returns `(id, first_path, second_path)` in depth-first order. An
/// ancestor-path alias also shows up here; callers check
/// [`find_ancestor_alias`] first to classify it as a cycle.
pub fn find_duplicate_id(root: &Node) -> Option<(String, NodePath, NodePath)> {
    fn walk<'a>(
        node: &'a Node,
        path: &NodePath,
        seen: &mut HashMap<&'a str, NodePath>,
    ) -> Option<(String, NodePath, NodePath)> {
        if let Some(first) = seen.get(node.id.as_str()) {
            return Some((node.id.clone(), first.clone(), path.clone()));
        }
        seen.insert(node.id.as_str(), path.clone());
        for edge in &node.children {
            let child_path = path.child(&edge.node);
            if let Some(found) = walk(&edge.node, &child_path, seen) {
                return Some(found);
            }
        }
        None
    }

    let mut seen = HashMap::new();
    walk(root, &NodePath::root(root), &mut seen)
}

/// Find the first node with an empty identifier, in depth-first order
pub fn find_blank_id(root: &Node) -> Option<NodePath> {
    fn walk(node: &Node, path: &NodePath) -> Option<NodePath> {
        if node.id.is_empty() {
            return Some(path.clone());
        }
        for edge in &node.children {
            let child_path = path.child(&edge.node);
            if let Some(found) = walk(&edge.node, &child_path) {
                return Some(found);
            }
        }
        None
    }

    walk(root, &NodePath::root(root))
}
