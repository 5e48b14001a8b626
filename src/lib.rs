//! An in-memory ordered-key tree engine.
//!
//! Two kinds of binary search tree are provided over any [`Ord`] key:
//!
//! * [`AvlTree`]: a self-balancing AVL tree, rebalanced by rotation after
//!   every insertion and removal (see [`avl`] for the underlying functions).
//! * [`BalancedTree`]: a minimal-height tree built once from a fixed set of
//!   keys by recursive midpoint selection (see [`build_balanced()`]).
//!
//! Both expose their [`Node`] graph through [`TreeView`], from which the
//! structural statistics in [`stats`] and a Graphviz rendering in [`dot`] are
//! derived.
//!
//! ```
//! use ordtree::{AvlTree, TreeView};
//!
//! let mut t = AvlTree::new();
//! for key in [10, 20, 30] {
//!     t.insert(key);
//! }
//!
//! // The third insertion rotates 20 to the root.
//! assert_eq!(t.root().map(|v| *v.key()), Some(20));
//! assert_eq!(t.stats().height, 2);
//! assert_eq!(t.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
//! ```

pub mod avl;
mod balanced;
pub mod dot;
mod error;
mod forest;
pub mod input;
mod iter;
mod node;
pub mod shell;
pub mod stats;
mod tree;

#[cfg(test)]
mod test_utils;

pub use balanced::build_balanced;
pub use error::{Error, Result};
pub use forest::{Forest, TreeKind};
pub use iter::{IntoIter, Iter};
pub use node::{Link, Node};
pub use stats::TreeStats;
pub use tree::{AvlTree, BalancedTree, TreeView};
