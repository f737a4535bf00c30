//! A plain BST with opt-in rebalancing. Construction produces a height-balanced tree, but
//! inserting and deleting afterwards never restructures anything beyond the touched path. The
//! caller decides when to check [`is_balanced`][Tree::is_balanced] and when to pay for a
//! [`rebalance`][Tree::rebalance].
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! // Duplicates are dropped and the keys sorted before building.
//! let mut tree = Tree::from_keys(vec![3, 1, 2, 3, 1]);
//! assert_eq!(tree.in_order_keys(), vec![&1, &2, &3]);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(2));
//!
//! // Ascending inserts grow a lopsided right spine.
//! for key in 4..8 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // Until we ask for it to be rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.depth(&4), Some(0));
//! ```

use std::cmp::Ordering;
use std::iter::FromIterator;

use log::debug;

use crate::node::{Link, Node};
use crate::traverse;

/// A Binary Search Tree over keys of type `K`. Build one from any collection with
/// [`Tree::from_keys`] (or `collect`), then insert, delete, look up, and traverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Checks that, at every node, the heights of the left and right subtrees differ by at most
    /// one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(1..=7);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(8);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(9);
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree so that it is height-balanced. The keys are collected in order (which is
    /// already sorted) and rebuilt exactly as [`Tree::from_keys`] would build them. The old nodes
    /// are dropped.
    pub fn rebalance(&mut self) {
        let mut keys = Vec::new();
        traverse::drain_in_order(self.root.take(), &mut keys);
        let count = keys.len();

        self.root = build(&mut keys.into_iter(), count);
        debug!(
            "rebalanced {} keys, height is now {:?}",
            count,
            self.root().map(Node::height)
        );
    }
}

impl<K: Ord> Tree<K> {
    /// Builds a balanced tree from the given keys in any order. Duplicate keys are kept only
    /// once.
    ///
    /// The sorted keys are split at the lower middle, `(len - 1) / 2`, which becomes the root,
    /// and each half is built the same way. So the shape for a given set of keys is always the
    /// same.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 1, 2, 2, 3, 3, 4, 5, 6, 7, 8, 9]);
    ///
    /// assert_eq!(tree.root().map(|root| *root.key()), Some(5));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        keys.sort_unstable();
        keys.dedup();

        let count = keys.len();
        let tree = Self {
            root: build(&mut keys.into_iter(), count),
        };
        debug!(
            "built tree from {} distinct keys, height {:?}",
            count,
            tree.root().map(Node::height)
        );
        tree
    }

    /// Inserts the key as a new leaf. Keys less than a node go left; everything else, including a
    /// key equal to the node's, goes right. So unlike [`Tree::from_keys`], inserting a key that is
    /// already present adds a second copy.
    ///
    /// Nothing is rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.in_order_keys(), vec![&1, &1]);
    /// assert_eq!(tree.root().and_then(|root| root.right()).map(|n| *n.key()), Some(1));
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = insert(self.root.take(), key);
    }

    /// Deletes one node with the given key. If no node has the key, nothing happens.
    ///
    /// A node with two children takes on the key of its in-order successor (the smallest key in
    /// its right subtree) and that key is deleted from the right subtree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys(1..=3);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert!(tree.find(&2).is_none());
    /// assert_eq!(tree.in_order_keys(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Clone,
    {
        self.root = delete(self.root.take(), key);
    }

    /// Finds the node holding the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![5, 2, 8]);
    ///
    /// assert_eq!(tree.find(&8).map(|node| *node.key()), Some(8));
    /// assert!(tree.find(&3).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
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

    /// Returns `true` if some node holds the given key.
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// The number of edges on the longest path from the node holding `key` down to a leaf, or
    /// `None` if the key isn't in the tree. A leaf has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys(1..=3);
    ///
    /// assert_eq!(tree.height(&2), Some(1));
    /// assert_eq!(tree.height(&3), Some(0));
    /// assert_eq!(tree.height(&4), None);
    /// ```
    pub fn height(&self, key: &K) -> Option<usize> {
        self.find(key).map(Node::height)
    }

    /// The number of edges from the root down to the node holding `key`, or `None` if the key
    /// isn't in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys(1..=3);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&1), Some(1));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, key: &K) -> Option<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// Same as [`Tree::depth`] but computed recursively: a match is at depth 0 and anything
    /// below is one deeper than in the subtree the search continues into.
    pub fn depth_recursive(&self, key: &K) -> Option<usize> {
        depth_below(self.root(), key)
    }
}

/// Builds a balanced subtree from the next `len` keys of the sorted `keys`. The lower middle key
/// becomes the root, so the left subtree takes `(len - 1) / 2` keys and the right takes the
/// rest. Keys are consumed in order: left subtree, root, right subtree.
fn build<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build(keys, mid);
    let key = keys.next()?;
    let right = build(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

fn insert<K: Ord>(link: Link<K>, key: K) -> Link<K> {
    match link {
        None => Some(Box::new(Node::leaf(key))),
        Some(mut node) => {
            if key < node.key {
                node.left = insert(node.left.take(), key);
            } else {
                node.right = insert(node.right.take(), key);
            }
            Some(node)
        }
    }
}

/// Returns the subtree rooted at `link` with one node holding `key` removed.
fn delete<K: Ord + Clone>(link: Link<K>, key: &K) -> Link<K> {
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,
            (left, Some(right)) => {
                let successor = leftmost(&right).key.clone();
                node.left = left;
                node.right = delete(Some(right), &successor);
                node.key = successor;
            }
        },
    }

    Some(node)
}

/// Descends left from `node` until there is no further left child.
fn leftmost<K>(mut node: &Node<K>) -> &Node<K> {
    while let Some(left) = node.left() {
        node = left;
    }
    node
}

fn depth_below<K: Ord>(node: Option<&Node<K>>, key: &K) -> Option<usize> {
    let node = node?;
    let next = match key.cmp(&node.key) {
        Ordering::Less => node.left(),
        Ordering::Equal => return Some(0),
        Ordering::Greater => node.right(),
    };

    depth_below(next, key).map(|depth| depth + 1)
}

/// Height of the subtree at `node` (an empty subtree is -1) or `None` as soon as any node in it
/// has subtrees whose heights differ by more than one. `None` is passed straight up through every
/// ancestor.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let node = match node {
        Some(node) => node,
        None => return Some(-1),
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    if (left - right).abs() > 1 {
        return None;
    }

    Some(1 + left.max(right))
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a count of each key.
    /// This way we can ensure that after a random smattering of inserts,
    /// deletes, and rebalances we have the same keys as the model.
    fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, counts: &mut BTreeMap<K, usize>)
    where
        K: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(k) => {
                    bst.insert(k.clone());
                    *counts.entry(k.clone()).or_insert(0) += 1;
                }
                Op::Delete(k) => {
                    bst.delete(k);
                    if let Some(count) = counts.get_mut(k) {
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(k);
                        }
                    }
                }
                Op::Rebalance => {
                    bst.rebalance();
                    assert!(bst.is_balanced());
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut counts = BTreeMap::new();

            do_ops(&ops, &mut tree, &mut counts);

            let expected: Vec<&i8> = counts
                .iter()
                .flat_map(|(key, count)| std::iter::repeat(key).take(*count))
                .collect();
            tree.in_order_keys() == expected && counts.keys().all(|key| tree.contains(key))
        }
    }

    quickcheck::quickcheck! {
        fn depth_variants_agree(xs: Vec<i8>, probes: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x);
            }

            xs.iter()
                .chain(&probes)
                .all(|x| tree.depth(x) == tree.depth_recursive(x))
        }
    }

    quickcheck::quickcheck! {
        fn built_height_is_minimal(xs: Vec<i8>) -> bool {
            let tree = Tree::from_keys(xs);
            let len = tree.in_order_keys().len();

            match tree.root() {
                None => len == 0,
                // A tree of height h holds between 2^h and 2^(h+1) - 1 keys.
                Some(root) => {
                    let height = root.height() as u32;
                    2usize.pow(height) <= len && len < 2usize.pow(height + 1)
                }
            }
        }
    }
}
