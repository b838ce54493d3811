use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances so this is one long
/// chain down the right.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    (0..).take(num_nodes_in_full_tree(num_levels)).collect()
}

/// Builds a tree by inserting values so that, without any self-balancing, the resultant tree is
/// still balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group. Each iteration gets its own copy of the tree so
/// mutating closures always start from the same shape.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // Cloning a chain is quadratic so the largest size stays modest.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "lookup", |tree, i| {
        let _found = black_box(tree.lookup(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });
    bench_helper(c, "remove-root", |tree, _| {
        let root = tree.root().map(|n| *n.key());
        if let Some(root) = root {
            tree.remove(&root);
        }
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "lookup-miss", |tree, i| {
        let _found = black_box(tree.lookup(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });

    bench_helper(c, "lca", |tree, i| {
        let _lca = black_box(tree.lca(&0, &i));
    });
    bench_helper(c, "bfs", |tree, _| {
        let _keys = black_box(tree.bfs());
    });
    bench_helper(c, "dfs-in-order", |tree, _| {
        let _keys = black_box(tree.dfs_in_order());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
