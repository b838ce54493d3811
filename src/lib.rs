//! This crate exposes an unbalanced Binary Search Tree (BST) with the classic textbook
//! operations, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree have a
//!    key less than or equal to its own key.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that duplicates are allowed and always go left. A tree holding the
//! > same key several times keeps those copies along a left-leaning path.
//!
//! Searching takes `O(height)`. Nothing here rebalances, so inserting keys in
//! sorted order produces a tree shaped like a linked list with `height == N - 1`.
//! Every traversal except [`recursive`] uses an explicit stack or queue so that
//! such degenerate trees can still be walked (and dropped) without overflowing
//! the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let tree: Tree<i32> = [6, 2, 8, 0, 4, 7, 9, 3, 5].into_iter().collect();
//!
//! assert_eq!(tree.bfs(), vec![6, 2, 8, 0, 4, 7, 9, 3, 5]);
//! assert_eq!(tree.dfs_in_order(), vec![0, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! let two = tree.lookup_node(&2).unwrap();
//! let eight = tree.lookup_node(&8).unwrap();
//! assert_eq!(tree.find_lca(two, eight).map(|n| *n.key()), Some(6));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod recursive;
pub mod traversal;
pub mod tree;

pub use error::TreeError;
pub use tree::{Node, Tree};

#[cfg(test)]
mod test;
