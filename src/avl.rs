//! AVL insertion, removal and rotation over an owned root slot.
//!
//! Every function here consumes the root of the subtree it operates on and
//! returns the (possibly different) root that must be stored in its place.

use std::cmp::Ordering;

use tracing::trace;

use crate::node::{balance, update_height, Link, Node};

/// Insert `key` into the subtree rooted at `root`, returning the new root.
///
/// Keys that compare equal to an existing key descend to the right, so this
/// function never rejects a duplicate: inserting a key twice produces two
/// nodes holding equal keys. Callers wanting set semantics must check for the
/// key first (as [`crate::AvlTree::insert()`] does).
pub fn insert<K>(root: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    let mut node = match root {
        Some(v) => v,
        None => return Box::new(Node::new(key)),
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    let node = rebalance(node);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(&node).abs() <= 1);

    node
}

/// Remove one node holding `key` from the subtree rooted at `root`, returning
/// the new root.
///
/// Removing a key that is not present is a no-op.
pub fn remove<K>(root: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    remove_entry(root, key).0
}

/// Remove one node holding `key` from the subtree rooted at `root`.
///
/// Returns the new subtree root, and the removed key if it was found.
pub(crate) fn remove_entry<K>(root: Link<K>, key: &K) -> (Link<K>, Option<K>)
where
    K: Ord,
{
    // The key is not in this subtree.
    let mut node = match root {
        Some(v) => v,
        None => return (None, None),
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove_entry(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_entry(node.right.take(), key);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // Zero or one child: the child (if any) replaces this node in the
            // parent's slot.
            (None, child) | (child, None) => return (child, Some(node.into_key())),

            // Two children: the in-order successor (the minimum of the right
            // subtree) is unlinked and its key moves into this node.
            //
            // ```text
            //          5                        5
            //         / \                      / \
            //  self-> 3   8                   4   8
            //        / \     ------------>   / \
            //       1   4                   1   .
            //                               (4 unlinked)
            // ```
            (Some(left), Some(right)) => {
                let (right, successor) = extract_min(right);
                node.left = Some(left);
                node.right = right;
                Some(std::mem::replace(&mut node.key, successor))
            }
        },
    };

    let node = rebalance(node);

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after removing a value.
    debug_assert!(balance(&node).abs() <= 1);

    (Some(node), removed)
}

/// Unlinks the minimum (left-most) node of the subtree rooted at `node`,
/// linking its right subtree (if any) in its place.
///
/// Returns the rebalanced subtree and the extracted key.
fn extract_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = extract_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
        None => {
            // This node is the end of the left edge.
            let right = node.right.take();
            (right, node.into_key())
        }
    }
}

/// Recompute the height of `v` and restore the AVL balance of the subtree
/// rooted at it, returning the new subtree root.
///
/// The rotation is selected by the balance factor of the heavy child. After an
/// insertion that skews `v`, the heavy child is never balanced: it leans
/// towards the inserted key, so this selects the same rotation as comparing
/// the inserted key against the child's key.
pub(crate) fn rebalance<K>(mut v: Box<Node<K>>) -> Box<Node<K>> {
    update_height(&mut v);

    match balance(&v) {
        (2..) if v.left().map(balance).unwrap_or_default() >= 0 => {
            trace!("LL rotation");
            rotate_right(v)
        }
        (2..) => {
            trace!("LR rotation");
            v.left = v.left.take().map(rotate_left);
            rotate_right(v)
        }
        (..=-2) if v.right().map(balance).unwrap_or_default() <= 0 => {
            trace!("RR rotation");
            rotate_left(v)
        }
        (..=-2) => {
            trace!("RL rotation");
            v.right = v.right.take().map(rotate_right);
            rotate_left(v)
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => v, // balanced
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// If `x` has no right child it cannot be rotated, and is returned unchanged.
pub fn rotate_left<K>(mut x: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = match x.right.take() {
        Some(v) => v,
        None => return x,
    };

    x.right = p.left.take();
    update_height(&mut x);

    p.left = Some(x);
    update_height(&mut p);

    p
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// returning `P` as the new subtree root.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// If `y` has no left child it cannot be rotated, and is returned unchanged.
pub fn rotate_right<K>(mut y: Box<Node<K>>) -> Box<Node<K>> {
    let mut p = match y.left.take() {
        Some(v) => v,
        None => return y,
    };

    y.left = p.right.take();
    update_height(&mut y);

    p.right = Some(y);
    update_height(&mut p);

    p
}
