use std::fmt::Display;

use crate::{
    avl,
    balanced::build_balanced,
    dot,
    iter::{IntoIter, Iter},
    node::{Link, Node},
    stats::{self, TreeStats},
};

/// Read access to the [`Node`] graph of a tree instance.
///
/// Implemented by both [`AvlTree`] and [`BalancedTree`] so that statistics,
/// key listings and diagrams are produced the same way for either.
pub trait TreeView<K> {
    /// The root node of the tree, or [`None`] if empty.
    fn root(&self) -> Option<&Node<K>>;

    fn stats(&self) -> TreeStats {
        TreeStats::of(self.root())
    }

    /// All keys held in the tree, in ascending order.
    fn keys(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Render the tree as a Graphviz DOT digraph.
    fn to_dot(&self) -> String
    where
        K: Display,
    {
        dot::print_dot(self.root())
    }
}

/// A self-balancing AVL tree holding a set of distinct keys.
#[derive(Debug, Clone)]
pub struct AvlTree<K>(Link<K>);

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> AvlTree<K>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, returning `false` (and leaving the tree unchanged) if an
    /// equal key is already present.
    ///
    /// Use [`avl::insert()`] directly for multiset semantics.
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(&key) {
            return false;
        }

        self.0 = Some(avl::insert(self.0.take(), key));
        true
    }

    /// Remove `key`, returning `true` if it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        let (root, removed) = avl::remove_entry(self.0.take(), key);
        self.0 = root;
        removed.is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut ptr = self.0.as_deref();

        while let Some(v) = ptr {
            ptr = match key.cmp(v.key()) {
                std::cmp::Ordering::Less => v.left(),
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Greater => v.right(),
            };
        }

        false
    }
}

impl<K> AvlTree<K> {
    /// The number of keys in the tree.
    ///
    /// This walks the whole tree.
    pub fn len(&self) -> usize {
        stats::count_nodes(self.0.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.0.as_deref())
    }
}

impl<K> TreeView<K> for AvlTree<K> {
    fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }
}

impl<K> FromIterator<K> for AvlTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut t = Self::default();
        for v in iter {
            t.insert(v);
        }
        t
    }
}

impl<K> IntoIterator for AvlTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A minimal-height binary search tree built once from a set of keys.
///
/// The tree cannot be edited one key at a time: [`BalancedTree::rebuild()`]
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancedTree<K>(Link<K>);

impl<K> Default for BalancedTree<K> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<K> BalancedTree<K>
where
    K: Ord,
{
    /// Build a tree from the distinct values in `keys`.
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self(build_balanced(keys))
    }

    /// Discard the current tree and build a new one from `keys`.
    pub fn rebuild<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        self.0 = build_balanced(keys);
    }
}

impl<K> BalancedTree<K> {
    /// The number of keys in the tree.
    ///
    /// This walks the whole tree.
    pub fn len(&self) -> usize {
        stats::count_nodes(self.0.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.0.as_deref())
    }
}

impl<K> TreeView<K> for BalancedTree<K> {
    fn root(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }
}

impl<K> FromIterator<K> for BalancedTree<K>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self::build(iter)
    }
}

impl<K> IntoIterator for BalancedTree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.0)
    }
}
