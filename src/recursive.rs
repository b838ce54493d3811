//! The textbook recursive traversals as plain functions over nodes. They produce exactly the same
//! keys as the iterators in [`traversal`][crate::traversal] but use one stack frame per level
//! (per node, for [`level_order`]), so they are not stack-safe on degenerate trees.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::{recursive, Tree};
//!
//! let tree: Tree<_> = [6, 2, 8, 0, 4, 7, 9, 3, 5].into_iter().collect();
//!
//! let mut keys = Vec::new();
//! recursive::in_order(tree.root(), &mut keys);
//! assert_eq!(keys, tree.dfs_in_order());
//! ```

use std::collections::VecDeque;

use crate::Node;

/// Appends the keys under `node` in order: left subtree, node, right subtree.
pub fn in_order<K: Clone>(node: Option<&Node<K>>, keys: &mut Vec<K>) {
    if let Some(node) = node {
        in_order(node.left(), keys);
        keys.push(node.key().clone());
        in_order(node.right(), keys);
    }
}

/// Appends the keys under `node` in pre-order: node, left subtree, right subtree.
pub fn pre_order<K: Clone>(node: Option<&Node<K>>, keys: &mut Vec<K>) {
    if let Some(node) = node {
        keys.push(node.key().clone());
        pre_order(node.left(), keys);
        pre_order(node.right(), keys);
    }
}

/// Appends the keys under `node` in post-order: left subtree, right subtree, node.
pub fn post_order<K: Clone>(node: Option<&Node<K>>, keys: &mut Vec<K>) {
    if let Some(node) = node {
        post_order(node.left(), keys);
        post_order(node.right(), keys);
        keys.push(node.key().clone());
    }
}

/// Appends the keys under `root` in level order by handing the queue down one call at a time.
pub fn level_order<K: Clone>(root: Option<&Node<K>>, keys: &mut Vec<K>) {
    let mut queue: VecDeque<_> = root.into_iter().collect();
    drain_queue(&mut queue, keys);
}

fn drain_queue<K: Clone>(queue: &mut VecDeque<&Node<K>>, keys: &mut Vec<K>) {
    let Some(node) = queue.pop_front() else {
        return;
    };
    keys.push(node.key().clone());
    queue.extend(node.left());
    queue.extend(node.right());

    drain_queue(queue, keys);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tree;

    /// Runs one of the recursive traversals from the root of `tree`.
    fn collect(tree: &Tree<i32>, f: fn(Option<&Node<i32>>, &mut Vec<i32>)) -> Vec<i32> {
        let mut keys = Vec::new();
        f(tree.root(), &mut keys);
        keys
    }

    #[test]
    fn empty() {
        let tree = Tree::new();

        assert!(collect(&tree, in_order).is_empty());
        assert!(collect(&tree, pre_order).is_empty());
        assert!(collect(&tree, post_order).is_empty());
        assert!(collect(&tree, level_order).is_empty());
    }

    #[test]
    fn matches_the_iterators() {
        let tree: Tree<_> = [9, 4, 6, 20, 170, 15, 1, 4, 20].into_iter().collect();

        assert_eq!(collect(&tree, in_order), tree.dfs_in_order());
        assert_eq!(collect(&tree, pre_order), tree.dfs_pre_order());
        assert_eq!(collect(&tree, post_order), tree.dfs_post_order());
        assert_eq!(collect(&tree, level_order), tree.bfs());
    }

    quickcheck::quickcheck! {
        fn agrees_with_iterators(xs: Vec<i32>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();

            collect(&tree, in_order) == tree.dfs_in_order()
                && collect(&tree, pre_order) == tree.dfs_pre_order()
                && collect(&tree, post_order) == tree.dfs_post_order()
                && collect(&tree, level_order) == tree.bfs()
        }
    }
}
