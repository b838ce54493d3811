//! Borrowing iterators over the keys of a [`Tree`][crate::Tree]. They keep their pending nodes in
//! an explicit queue or stack rather than on the call stack, so a degenerate tree (one long
//! chain) can be walked without overflowing.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let tree: Tree<_> = [9, 4, 6, 20, 170, 15, 1].into_iter().collect();
//!
//! assert!(tree.iter_bfs().eq(&[9, 4, 20, 1, 6, 15, 170]));
//! assert!(tree.iter_in_order().eq(&[1, 4, 6, 9, 15, 20, 170]));
//! assert!(tree.iter_pre_order().eq(&[9, 4, 1, 6, 20, 15, 170]));
//! assert!(tree.iter_post_order().eq(&[1, 6, 4, 15, 170, 20, 9]));
//! ```

use std::collections::VecDeque;

use crate::Node;

/// Level order: the root, then its children left to right, then their children, and so on.
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}

/// In order: left subtree, node, right subtree. Yields keys in non-decreasing order.
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree is being (or has been) visited but which haven't been yielded.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

/// Pre-order: node, left subtree, right subtree.
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

/// Post-order: left subtree, right subtree, node.
pub struct PostOrder<'a, K> {
    /// Each node is pushed twice: first unexpanded, then (once its children are queued up above
    /// it) expanded, which means it's ready to be yielded.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}
