//! Read-only structural statistics over a tree of [`Node`].
//!
//! Each function is an independent recursive walk of the whole tree; nothing
//! is cached between calls.

use std::fmt::Display;

use crate::node::Node;

/// The total number of nodes in the tree rooted at `n`.
pub fn count_nodes<K>(n: Option<&Node<K>>) -> usize {
    match n {
        Some(v) => 1 + count_nodes(v.left()) + count_nodes(v.right()),
        None => 0,
    }
}

/// The number of nodes with no children.
pub fn count_leaves<K>(n: Option<&Node<K>>) -> usize {
    match n {
        None => 0,
        Some(v) if v.left().is_none() && v.right().is_none() => 1,
        Some(v) => count_leaves(v.left()) + count_leaves(v.right()),
    }
}

/// The number of nodes on the longest path from `n` to a leaf, or 0 for an
/// empty tree.
///
/// Unlike [`Node::height()`] this is derived from the tree structure rather
/// than the cached value, and so applies to any [`Node`] graph.
pub fn height<K>(n: Option<&Node<K>>) -> usize {
    match n {
        Some(v) => 1 + height(v.left()).max(height(v.right())),
        None => 0,
    }
}

/// The maximum number of children held by any node in the tree.
pub fn degree<K>(n: Option<&Node<K>>) -> usize {
    let n = match n {
        Some(v) => v,
        None => return 0,
    };

    let here = n.left().is_some() as usize + n.right().is_some() as usize;

    // A binary tree cannot exceed a degree of 2.
    if here == 2 {
        return 2;
    }

    here.max(degree(n.left())).max(degree(n.right()))
}

/// A summary of the structure of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Total number of nodes (the order, or weight, of the tree).
    pub nodes: usize,
    /// Nodes with no children.
    pub leaves: usize,
    /// Nodes with at least one child.
    pub internal: usize,
    pub height: usize,
    pub degree: usize,
    /// Number of parent to child links (branches).
    pub connections: usize,
}

impl TreeStats {
    /// Compute the statistics of the tree rooted at `root`.
    pub fn of<K>(root: Option<&Node<K>>) -> Self {
        let nodes = count_nodes(root);
        let leaves = count_leaves(root);

        Self {
            nodes,
            leaves,
            internal: nodes - leaves,
            height: height(root),
            degree: degree(root),
            connections: nodes.saturating_sub(1),
        }
    }
}

impl Display for TreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "nodes (weight)    : {}", self.nodes)?;
        writeln!(f, "height            : {}", self.height)?;
        writeln!(f, "degree            : {}", self.degree)?;
        writeln!(f, "connections       : {}", self.connections)?;
        writeln!(f, "leaves            : {}", self.leaves)?;
        write!(f, "internal nodes    : {}", self.internal)
    }
}
