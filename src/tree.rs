//! An unbalanced BST that owns its nodes through `Box`ed child links. Keys equal to a node go
//! into its left subtree, so duplicates are kept rather than overwritten.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.lookup(&1));
//!
//! tree.insert(1);
//! assert!(tree.lookup(&1));
//!
//! // Inserting the same key again stores a second copy.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one copy at a time.
//! tree.remove(&1);
//! assert!(tree.lookup(&1));
//! tree.remove(&1);
//! assert!(!tree.lookup(&1));
//!
//! // Removing something that isn't there is a no-op.
//! tree.remove(&1);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::recursive;
use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::TreeError;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree. This can be used for inserting, finding, and removing keys as well as
/// walking them in breadth-first or depth-first order. The tree is never rebalanced.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // A degenerate tree is one long chain so the default recursive drop could blow the stack.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    /// Re-inserting keys in level order reproduces the exact shape of the original tree because
    /// every node is inserted after all of its ancestors.
    fn clone(&self) -> Self {
        self.iter_bfs().cloned().collect()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts the key into the tree. Keys greater than a node go right, everything else
    /// (including an equal key) goes left, until an empty slot is found for the new leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| *n.key()), Some(2));
    /// assert!(root.right().is_none());
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = if key > node.key {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        tracing::trace!(depth, len = self.len, "attached new leaf");
    }

    /// Whether any node in the tree holds the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [9, 4, 20].into_iter().collect();
    ///
    /// assert!(tree.lookup(&20));
    /// assert!(!tree.lookup(&42));
    /// ```
    pub fn lookup(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.lookup_node(key).is_some()
    }

    /// Finds the shallowest node holding the given key. With duplicates this is the copy that was
    /// inserted first.
    pub fn lookup_node(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Removes one node holding the given key. If the tree doesn't contain the key nothing
    /// happens; use [`Tree::try_remove`] to find out which of the two it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [6, 2, 8, 0, 4, 7, 9, 3, 5].into_iter().collect();
    ///
    /// tree.remove(&8);
    /// assert!(!tree.lookup(&8));
    /// assert_eq!(tree.bfs(), vec![6, 2, 9, 0, 4, 7, 3, 5]);
    /// ```
    pub fn remove(&mut self, key: &K)
    where
        K: Ord,
    {
        self.remove_one(key);
    }

    /// Like [`Tree::remove`] but reports a missing key.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no node holds `key`. The tree is left untouched.
    pub fn try_remove(&mut self, key: &K) -> Result<(), TreeError>
    where
        K: Ord,
    {
        if self.remove_one(key) {
            Ok(())
        } else {
            tracing::debug!(len = self.len, "remove: key not present");
            Err(TreeError::NotFound)
        }
    }

    fn remove_one(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let Some(slot) = slot_of(&mut self.root, key) else {
            return false;
        };
        let Some(node) = slot.take() else {
            return false;
        };

        *slot = node.into_replacement();
        self.len -= 1;
        true
    }

    /// Finds the lowest common ancestor of two nodes of this tree by descending from the root
    /// while both keys fall on the same side of the current node.
    ///
    /// The nodes are expected to come from this tree (e.g. via [`Tree::lookup_node`]). That
    /// isn't checked: nodes from elsewhere give an arbitrary node or `None`. Only an empty tree
    /// is guaranteed to give `None`. See [`Tree::lca`] for a checked version.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [6, 2, 8, 0, 4, 7, 9, 3, 5].into_iter().collect();
    /// let p = tree.lookup_node(&2).unwrap();
    /// let q = tree.lookup_node(&5).unwrap();
    ///
    /// assert_eq!(tree.find_lca(p, q).map(|n| *n.key()), Some(2));
    /// ```
    pub fn find_lca<'a>(&'a self, p: &Node<K>, q: &Node<K>) -> Option<&'a Node<K>>
    where
        K: Ord,
    {
        self.lca_by_key(&p.key, &q.key)
    }

    /// Finds the lowest common ancestor of the nodes holding `p` and `q`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if either key is missing from the tree.
    pub fn lca(&self, p: &K, q: &K) -> Result<&Node<K>, TreeError>
    where
        K: Ord,
    {
        if !self.lookup(p) || !self.lookup(q) {
            tracing::debug!(len = self.len, "lca: key not present");
            return Err(TreeError::NotFound);
        }
        self.lca_by_key(p, q).ok_or(TreeError::NotFound)
    }

    fn lca_by_key(&self, p: &K, q: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            if *p > node.key && *q > node.key {
                current = node.right();
            } else if *p < node.key && *q < node.key {
                current = node.left();
            } else {
                return Some(node);
            }
        }
        None
    }

    /// Returns the `k`th smallest key, counting from 1. Duplicates each take up a rank.
    ///
    /// # Errors
    ///
    /// [`TreeError::RankOutOfRange`] when `k` is 0 or larger than [`Tree::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{Tree, TreeError};
    ///
    /// let tree: Tree<_> = [5, 3, 6, 2, 4, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_smallest(3), Ok(&3));
    /// assert_eq!(tree.kth_smallest(7), Err(TreeError::RankOutOfRange { k: 7, len: 6 }));
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<&K, TreeError> {
        k.checked_sub(1)
            .and_then(|index| self.iter_in_order().nth(index))
            .ok_or(TreeError::RankOutOfRange { k, len: self.len })
    }

    /// The number of edges on the longest path from the root to a leaf, or `None` for an empty
    /// tree. A lone root has a height of 0.
    pub fn height(&self) -> Option<usize> {
        let mut level: Vec<&Node<K>> = self.root().into_iter().collect();
        let mut height = None;
        while !level.is_empty() {
            height = Some(height.map_or(0, |h| h + 1));
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Keys in level order (breadth-first, left to right).
    pub fn bfs(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter_bfs().cloned().collect()
    }

    /// The same keys as [`Tree::bfs`], collected by [`recursive::level_order`]. This recurses
    /// once per node so it isn't suitable for very large trees.
    pub fn bfs_recursive(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        recursive::level_order(self.root(), &mut keys);
        keys
    }

    /// Keys in order: left subtree, node, right subtree. Always non-decreasing.
    pub fn dfs_in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter_in_order().cloned().collect()
    }

    /// Keys in pre-order: node, left subtree, right subtree.
    pub fn dfs_pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter_pre_order().cloned().collect()
    }

    /// Keys in post-order: left subtree, right subtree, node.
    pub fn dfs_post_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter_post_order().cloned().collect()
    }

    /// Borrowing level order iterator.
    pub fn iter_bfs(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Borrowing in-order iterator.
    pub fn iter_in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Borrowing pre-order iterator.
    pub fn iter_pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Borrowing post-order iterator.
    pub fn iter_post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }
}

/// A `Node` has a key that is used for searching/sorting and up to two children. Nodes are only
/// handed out by reference so the tree's shape can be inspected but not modified.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, holding keys less than or equal to this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding keys greater than this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Unlinks this node and returns the subtree that should take its place in its parent.
    ///
    /// With no right child the left child moves up. Otherwise the in-order successor moves up:
    /// the right child itself when it has no left child, or the bottom of its left spine. The
    /// successor adopts both of this node's subtrees and its own right child takes its old spot.
    fn into_replacement(mut self: Box<Self>) -> Link<K>
    where
        K: Ord,
    {
        let left = self.left.take();
        let right_has_left = self.right.as_deref().map_or(false, |n| n.left.is_some());
        let Some(mut successor) = take_min_run(&mut self.right) else {
            tracing::trace!("remove: no right child, promoting left child");
            return left;
        };
        tracing::trace!(right_has_left, "remove: promoting in-order successor");

        // Anything already left of the successor holds the successor's own key, so the removed
        // node's left subtree has to hang below all of those.
        *leftmost_slot(&mut successor.left) = left;
        successor.right = self.right.take();
        Some(successor)
    }
}

/// Walks down from `slot` to the link that holds `key`. Returns `None` if the key isn't there.
fn slot_of<'a, K: Ord>(mut slot: &'a mut Link<K>, key: &K) -> Option<&'a mut Link<K>> {
    loop {
        let ordering = key.cmp(&slot.as_deref()?.key);
        // Moving `slot` into the tuple lets each arm hand back a borrow with the full lifetime.
        slot = match (ordering, slot) {
            (Ordering::Equal, found) => return Some(found),
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, None) => return None,
        };
    }
}

/// The empty link at the bottom of the left spine starting at `slot`.
fn leftmost_slot<K>(mut slot: &mut Link<K>) -> &mut Link<K> {
    while let Some(node) = slot {
        slot = &mut node.left;
    }
    slot
}

/// Detaches the smallest node of the subtree in `slot`, moving its right child up into its place.
/// Duplicates of the smallest key form a run down the left spine; the highest node of that run is
/// the one detached so its copies stay to its left. Returns `None` if `slot` is empty.
fn take_min_run<K: Ord>(mut slot: &mut Link<K>) -> Link<K> {
    let mut depth = 0;
    let mut run_start = 0;
    let mut current = slot.as_deref()?;
    while let Some(next) = current.left() {
        depth += 1;
        if next.key != current.key {
            run_start = depth;
        }
        current = next;
    }

    for _ in 0..run_start {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }

    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}
