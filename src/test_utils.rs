use std::fmt::Debug;

use proptest::prelude::*;

use crate::node::Node;

/// The upper bound (exclusive) of generated keys, and the maximum number of
/// keys generated.
pub(crate) const N_VALUES: usize = 200;

/// Generate a shuffled set of distinct keys in [0..[`N_VALUES`]).
pub(crate) fn arbitrary_keys() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::btree_set(0..N_VALUES, 0..N_VALUES)
        .prop_map(|v| v.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Collect the keys of the tree rooted at `n` with an in-order walk.
pub(crate) fn in_order<K>(n: Option<&Node<K>>) -> Vec<K>
where
    K: Clone,
{
    crate::iter::Iter::new(n).cloned().collect()
}

/// Assert the BST and AVL properties of tree nodes, ensuring the tree is
/// well-formed.
pub(crate) fn validate_tree_structure<K>(root: Option<&Node<K>>)
where
    K: Ord + Debug,
{
    let root = match root {
        Some(v) => v,
        None => return,
    };

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a key strictly less
        // than this node.
        assert!(n.left().map(|v| v.key() < n.key()).unwrap_or(true));

        // Invariant 2: the right child always contains a key greater than this
        // node.
        assert!(n.right().map(|v| v.key() > n.key()).unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the maximum
        // child height, and a leaf is at height 1.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with key {:?} to have height {}, has {}",
            n.key(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={n:?}");
    }

    // Invariant 5: an in-order walk yields strictly increasing keys, covering
    // the ordering of non-adjacent nodes.
    let keys = crate::iter::Iter::new(Some(root)).collect::<Vec<_>>();
    for window in keys.windows(2) {
        assert!(window[0] < window[1], "keys out of order: {window:?}");
    }
}
