//! One-shot construction of a minimal-height binary search tree.

use std::collections::BTreeSet;

use crate::node::{update_height, Link, Node};

/// Build a minimal-height binary search tree from `keys`.
///
/// The keys are deduplicated and sorted once, after which the key at the
/// midpoint index (`len / 2`) of each sorted slice becomes the root of the
/// subtree built from that slice. The resulting tree has a height of
/// `⌈log2(n + 1)⌉` for `n` distinct keys, and its shape depends only on the set
/// of distinct keys, not on the order in which they are yielded.
///
/// The returned tree is not maintained afterwards: editing it with
/// [`crate::avl`] functions is unsupported, callers rebuild from the full key
/// set instead.
///
/// An empty input produces an empty tree.
pub fn build_balanced<K, I>(keys: I) -> Link<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let keys = keys.into_iter().collect::<BTreeSet<_>>();
    let len = keys.len();

    let mut iter = keys.into_iter();
    let root = build_subtree(len, &mut iter);

    // Invariant: every key was consumed into the tree.
    debug_assert!(iter.next().is_none());

    root
}

/// Build the subtree holding the next `len` keys yielded by the in-order
/// `keys` iterator.
///
/// The left subtree takes the `len / 2` keys preceding the midpoint, the
/// midpoint key forms the root, and the remainder forms the right subtree.
fn build_subtree<K, I>(len: usize, keys: &mut I) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;

    let left = build_subtree(mid, keys);
    let mut node = Box::new(Node::new(keys.next()?));
    node.left = left;
    node.right = build_subtree(len - mid - 1, keys);

    update_height(&mut node);
    Some(node)
}
