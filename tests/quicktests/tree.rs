use rebalance_bst::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

/// Builds a tree without any balancing by inserting each key in turn.
fn inserted(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }

    tree
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    let mut keys = Vec::new();
    tree.in_order_for_each(Some(&mut |node: &Node<i8>| keys.push(*node.key())))
        .expect("visitor was given");
    keys
}

#[quickcheck]
fn build_yields_sorted_distinct_keys(xs: Vec<i8>) -> bool {
    let tree = Tree::from_keys(xs.clone());
    let distinct: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    in_order(&tree) == distinct
}

#[quickcheck]
fn build_is_balanced(xs: Vec<i8>) -> bool {
    Tree::from_keys(xs).is_balanced()
}

#[quickcheck]
fn ascending_inserts_are_unbalanced(len: u8) -> bool {
    let len = i16::from(len % 64) + 3;
    let mut tree = Tree::new();
    for key in 0..len {
        tree.insert(key);
    }

    !tree.is_balanced() && tree.height(&0) == Some(len as usize - 1)
}

#[quickcheck]
fn rebalance_balances(xs: Vec<i8>) -> bool {
    let mut tree = inserted(&xs);
    let before = in_order(&tree);
    tree.rebalance();

    tree.is_balanced() && in_order(&tree) == before
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs);
    let before = tree.clone();
    tree.rebalance();

    tree == before && tree.is_balanced()
}

#[quickcheck]
fn insert_then_find(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = Tree::from_keys(xs.into_iter().filter(|x| *x != k));
    tree.insert(k);

    tree.find(&k).map(|node| *node.key()) == Some(k)
}

#[quickcheck]
fn insert_then_delete(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = Tree::from_keys(xs.into_iter().filter(|x| *x != k));
    let before = in_order(&tree);
    tree.insert(k);
    tree.delete(&k);

    tree.find(&k).is_none() && in_order(&tree) == before
}

#[quickcheck]
fn delete_missing_changes_nothing(xs: Vec<i8>, k: i8) -> bool {
    let mut tree = inserted(&xs);
    if xs.contains(&k) {
        return true;
    }
    let before = tree.clone();
    tree.delete(&k);

    tree == before
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = inserted(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.height(x).is_none() && tree.depth(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_keys(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn root_is_at_depth_zero(xs: Vec<i8>) -> bool {
    let tree = inserted(&xs);
    match tree.root() {
        Some(root) => {
            tree.depth(root.key()) == Some(0) && tree.depth_recursive(root.key()) == Some(0)
        }
        None => xs.is_empty(),
    }
}

#[quickcheck]
fn root_height_bounds_every_depth(xs: Vec<i8>) -> bool {
    let tree = inserted(&xs);
    let root_height = tree.root().and_then(|root| tree.height(root.key()));

    xs.iter()
        .all(|x| tree.depth(x).is_some() && tree.depth(x) <= root_height)
}
