use ordered_tree::OrderedTree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a sorted `Vec`.
/// This way we can ensure that after a random smattering of inserts
/// and removals we have the same values in both.
fn do_ops<V>(ops: &[Op<V>], tree: &mut OrderedTree<V>, model: &mut Vec<V>)
where
    V: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
                let pos = model.partition_point(|x| x <= v);
                model.insert(pos, v.clone());
            }
            Op::Remove(v) => {
                tree.remove(v);
                if let Some(pos) = model.iter().position(|x| x == v) {
                    model.remove(pos);
                }
            }
        }
    }
}

fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort();
    xs
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.len() == model.len() && tree.in_order() == model.iter().collect::<Vec<_>>()
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.in_order().windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.find(x).map(|n| n.value()) == Some(x) && tree.find_recursively(x).is_some())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
}

#[quickcheck]
fn recursive_insert_builds_same_tree(xs: Vec<i8>) -> bool {
    let mut iterative = OrderedTree::new();
    let mut recursive = OrderedTree::new();
    for x in &xs {
        iterative.insert(*x);
        recursive.insert_recursively(*x);
    }

    iterative == recursive
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let expected = sorted(xs.iter().collect::<Vec<_>>());

    [
        tree.pre_order(),
        tree.in_order(),
        tree.post_order(),
        tree.breadth_first(),
    ]
    .iter()
    .all(|visited| visited.len() == xs.len() && sorted(visited.clone()) == expected)
}

#[quickcheck]
fn remove_present_value(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let target = xs[pick % xs.len()];
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut expected: Vec<i8> = tree.in_order().into_iter().copied().collect();
    let pos = expected.iter().position(|x| *x == target).unwrap();
    expected.remove(pos);

    let before = tree.len();
    tree.remove(&target);

    let occurrences = xs.iter().filter(|x| **x == target).count();
    tree.len() == before - 1
        && tree.in_order().into_iter().copied().collect::<Vec<_>>() == expected
        && (occurrences > 1 || tree.find(&target).is_none())
}

#[quickcheck]
fn remove_missing_value(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    let before = tree.clone();

    !tree.remove(&missing) && tree == before
}

#[quickcheck]
fn second_highest_is_runner_up(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let xs = sorted(xs);

    tree.find_second_highest() == xs.len().checked_sub(2).map(|i| &xs[i])
}

#[test]
fn balanced_insertion_order() {
    // Inserting medians first keeps every level full.
    fn fill(tree: &mut OrderedTree<i32>, xs: &[i32]) {
        if !xs.is_empty() {
            let mid = xs.len() / 2;
            tree.insert(xs[mid]);
            fill(tree, &xs[..mid]);
            fill(tree, &xs[mid + 1..]);
        }
    }

    for n in 1..=63 {
        let xs: Vec<i32> = (0..n).collect();
        let mut tree = OrderedTree::new();
        fill(&mut tree, &xs);

        assert!(tree.is_balanced(), "{} nodes", n);
        assert!(tree.height() as f64 <= ((n + 1) as f64).log2().ceil());
    }
}

#[test]
fn increasing_insertion_order() {
    for n in 3..=20 {
        let tree: OrderedTree<_> = (0..n).collect();

        assert!(!tree.is_balanced(), "{} nodes", n);
        assert_eq!(tree.height(), n as usize);
    }
}

#[test]
fn concrete_scenario() {
    let mut tree = OrderedTree::new();
    tree.insert(10)
        .insert(5)
        .insert(15)
        .insert(3)
        .insert(7)
        .insert(12)
        .insert(20);

    assert_eq!(tree.in_order(), vec![&3, &5, &7, &10, &12, &15, &20]);
    assert_eq!(tree.pre_order(), vec![&10, &5, &3, &7, &15, &12, &20]);
    assert_eq!(tree.breadth_first(), vec![&10, &5, &15, &3, &7, &12, &20]);
    assert_eq!(tree.find_second_highest(), Some(&15));

    tree.remove(&15);
    assert_eq!(tree.in_order(), vec![&3, &5, &7, &10, &12, &20]);
    assert!(tree.find(&15).is_none());
}
