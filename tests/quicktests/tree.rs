use balanced_bst::{Node, Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every node's key is strictly between the keys of the ancestors it hangs below.
fn is_bst<K: Ord>(tree: &Tree<K>) -> bool {
    fn check<'a, K: Ord>(
        node: Option<&'a Node<K>>,
        low: Option<&'a K>,
        high: Option<&'a K>,
    ) -> bool {
        match node {
            None => true,
            Some(n) => {
                low.map_or(true, |low| n.key() > low)
                    && high.map_or(true, |high| n.key() < high)
                    && check(n.left(), low, Some(n.key()))
                    && check(n.right(), Some(n.key()), high)
            }
        }
    }

    check(tree.root(), None, None)
}

#[quickcheck]
fn bst_property_holds(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);

    is_bst(&tree)
}

#[quickcheck]
fn in_order_strictly_ascending(xs: Vec<i16>, ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::build(xs);
    do_ops(&ops, &mut tree);

    let keys = tree.in_order().keys();
    keys.windows(2).all(|w| w[0] < w[1]) && keys.len() == tree.len()
}

#[quickcheck]
fn build_is_balanced_and_deduplicated(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.clone());

    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.is_balanced() && tree.into_iter().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn build_height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree = Tree::build(xs);
    let n = tree.len();

    match tree.height() {
        None => n == 0,
        // A complete tree of height `h` holds at most `2^(h+1) - 1` keys and a balanced build
        // never uses more levels than that requires.
        Some(h) => (1usize << h) <= n && n < (1usize << (h + 1)),
    }
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x).map(Node::key) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs);
    let was_absent = !tree.contains(&x);

    tree.insert(x) == was_absent
        && tree.find(&x).map(Node::key) == Some(&x)
        && tree.iter().filter(|&&k| k == x).count() == 1
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have been given the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_bst(&tree)
}

#[quickcheck]
fn rebalance_is_idempotent(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);

    tree.rebalance();
    let first: Vec<i8> = tree.iter().copied().collect();
    let first_shape: Vec<i8> = tree.level_order().map(|n| *n.key()).collect();
    let balanced_once = tree.is_balanced();

    tree.rebalance();
    let second: Vec<i8> = tree.iter().copied().collect();
    let second_shape: Vec<i8> = tree.level_order().map(|n| *n.key()).collect();

    balanced_once && tree.is_balanced() && first == second && first_shape == second_shape
}

#[quickcheck]
fn traversals_visit_every_node_once(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree);

    let expected: Vec<i8> = tree.iter().copied().collect();
    [Order::Level, Order::In, Order::Pre, Order::Post].iter().all(|&order| {
        let mut seen = Vec::new();
        tree.traverse(order).visit(|n| seen.push(*n.key()));
        seen.sort_unstable();
        seen == expected
    })
}

#[quickcheck]
fn depth_matches_search_path(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    tree.level_order().all(|node| {
        let depth = tree.depth(node);
        // Every ancestor of `node` is one level up, so the depth is at most the tree height.
        depth.is_some() && depth == tree.depth_of(node.key()) && depth <= tree.height()
    })
}
