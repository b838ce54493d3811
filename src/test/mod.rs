use std::fmt::Debug;

use crate::traversal::InOrder;
use crate::{Node, Tree};


/// Checks the ordering invariant on every node (left subtree `<=`, right subtree strictly `>`)
/// and that `len` matches the number of nodes. Quadratic, so only for small trees.
pub(crate) fn assert_valid<K>(tree: &Tree<K>)
where
    K: Ord + Debug,
{
    let mut count = 0;
    let mut stack: Vec<&Node<K>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        if let Some(left) = node.left() {
            let max = InOrder::new(Some(left)).max();
            assert!(max <= Some(node.key()), "left subtree of {:?}", node.key());
            stack.push(left);
        }
        if let Some(right) = node.right() {
            let min = InOrder::new(Some(right)).min();
            assert!(min > Some(node.key()), "right subtree of {:?}", node.key());
            stack.push(right);
        }
    }
    assert_eq!(count, tree.len());
}
