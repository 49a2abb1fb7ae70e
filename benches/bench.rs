use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use balanced_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Without automatic
/// rebalancing this degenerates into a chain of maximal height.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x as i32).unwrap();
    }

    tree
}

/// Builds a minimal-height tree over the same values via `FromIterator`.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    (0..num_nodes_in_full_tree(num_levels) as i32).collect()
}

/// Helper to bench a read-only function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_read_helper(c: &mut Criterion, name: &str, f: impl Fn(&Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_with_input(id, &largest_element_in_tree, |b, _| {
                b.iter(|| {
                    f(&tree, black_box(largest_element_in_tree as i32));
                })
            });
        }
    }

    group.finish();
}

/// Helper to bench a mutating function on a BST. Each iteration gets its
/// own clone of the tree so mutations don't accumulate across iterations;
/// only the closure itself is timed.
fn bench_mut_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = 2usize.pow(num_levels as u32) - 2;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree as i32));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// All benchmarks run against balanced and degenerate trees of various
/// sizes and test successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_read_helper(c, "find", |tree, i| {
        let _value = black_box(tree.find(&i));
    });
    bench_read_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.find(&(i + 1)));
    });
    bench_read_helper(c, "inorder", |tree, _| {
        let _values: Vec<i32> = tree.inorder().copied().collect();
    });

    bench_mut_helper(c, "insert", |tree, i| {
        tree.insert(i + 1).unwrap();
    });
    bench_mut_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_mut_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
    bench_mut_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
