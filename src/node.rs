/// An owned, optional child pointer.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single key held in a binary search tree.
///
/// A [`Node`] carries no behaviour of its own: it is created and restructured
/// by the functions in [`crate::avl`] and [`crate::balanced`], and read by
/// [`crate::stats`] and [`crate::dot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,

    /// Child nodes pointers.
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// The node's cached subtree height.
    ///
    /// A leaf has a height of 1, and an absent subtree a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    pub(crate) height: u8,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// The cached height of the subtree rooted at this node.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Link<K> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Link<K> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key it contains.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

/// The cached height of `n`, or 0 for an absent subtree.
pub(crate) fn height<K>(n: Option<&Node<K>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

pub(crate) fn update_height<K>(n: &mut Node<K>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<K>(n: &Node<K>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}
