use std::fmt::{Debug, Display};

use tracing::debug;

use crate::{
    error::{Error, Result},
    tree::{AvlTree, BalancedTree, TreeView},
};

/// Identifies one of the tree instances held by a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// The incrementally maintained [`AvlTree`].
    Avl,
    /// The [`BalancedTree`], rebuilt from scratch on every change.
    Balanced,
}

impl Display for TreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Avl => write!(f, "AVL"),
            Self::Balanced => write!(f, "Balanced"),
        }
    }
}

/// Two independent trees, addressed by [`TreeKind`].
///
/// Each tree keeps its own keys: changing one never touches the other.
#[derive(Debug)]
pub struct Forest<K> {
    avl: AvlTree<K>,
    balanced: BalancedTree<K>,
}

impl<K> Default for Forest<K> {
    fn default() -> Self {
        Self {
            avl: AvlTree::default(),
            balanced: BalancedTree::default(),
        }
    }
}

impl<K> Forest<K>
where
    K: Ord + Debug,
{
    /// Insert each of `keys` not already present in the `kind` tree, returning
    /// the number of keys added.
    ///
    /// Only the [`TreeKind::Avl`] tree accepts insertions.
    pub fn insert<I>(&mut self, kind: TreeKind, keys: I) -> Result<usize>
    where
        I: IntoIterator<Item = K>,
    {
        if kind != TreeKind::Avl {
            return Err(Error::Unsupported { kind, op: "insert" });
        }

        let mut added = 0;
        for key in keys {
            debug!(?key, "insert");
            if self.avl.insert(key) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Remove `key` from the `kind` tree.
    ///
    /// Only the [`TreeKind::Avl`] tree supports removal, as removing a single
    /// key from the balanced tree would undo its minimal height.
    pub fn remove(&mut self, kind: TreeKind, key: &K) -> Result<()> {
        if kind != TreeKind::Avl {
            return Err(Error::Unsupported { kind, op: "delete" });
        }

        debug!(?key, "remove");
        if !self.avl.remove(key) {
            return Err(Error::KeyNotFound(format!("{key:?}")));
        }

        Ok(())
    }

    /// Replace the `kind` tree with one built from `keys`, returning the
    /// number of distinct keys it holds.
    ///
    /// Only the [`TreeKind::Balanced`] tree is generated.
    pub fn generate<I>(&mut self, kind: TreeKind, keys: I) -> Result<usize>
    where
        I: IntoIterator<Item = K>,
    {
        if kind != TreeKind::Balanced {
            return Err(Error::Unsupported {
                kind,
                op: "generate",
            });
        }

        self.balanced.rebuild(keys);

        let n = self.balanced.len();
        debug!(n_keys = n, "generated balanced tree");
        Ok(n)
    }
}

impl<K> Forest<K> {
    /// Empty the `kind` tree, returning `false` if it was already empty.
    pub fn reset(&mut self, kind: TreeKind) -> bool {
        let was_empty = self.view(kind).root().is_none();

        match kind {
            TreeKind::Avl => self.avl.clear(),
            TreeKind::Balanced => self.balanced.clear(),
        }

        debug!(%kind, was_empty, "reset tree");
        !was_empty
    }

    /// Empty both trees.
    pub fn reset_all(&mut self) {
        self.avl.clear();
        self.balanced.clear();
        debug!("reset all trees");
    }

    pub fn view(&self, kind: TreeKind) -> &dyn TreeView<K> {
        match kind {
            TreeKind::Avl => &self.avl,
            TreeKind::Balanced => &self.balanced,
        }
    }

    pub fn avl(&self) -> &AvlTree<K> {
        &self.avl
    }

    pub fn balanced(&self) -> &BalancedTree<K> {
        &self.balanced
    }
}
