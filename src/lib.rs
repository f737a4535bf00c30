//! A Binary Search Tree that stays a plain BST until asked to rebalance.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. A [`Tree`] built with
//! [`Tree::from_keys`] has the smallest possible height, `O(lg N)`. After that,
//! [`Tree::insert`] and [`Tree::delete`] leave the shape alone apart from the
//! path they touch, so an unlucky order of inserts (ascending keys, say) can
//! grow the height towards `N`. [`Tree::is_balanced`] reports when that has
//! happened and [`Tree::rebalance`] rebuilds the tree at minimal height.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. [`Tree::in_order_for_each`]
//! does exactly that, alongside level, pre, and post order traversals.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Node, Tree};
//!
//! let mut tree = Tree::from_keys(vec![1, 1, 2, 2, 3, 3, 4, 5, 6, 7, 8, 9]);
//! assert_eq!(tree.root().map(|root| *root.key()), Some(5));
//!
//! tree.insert(10);
//! tree.delete(&7);
//!
//! let mut keys = Vec::new();
//! tree.in_order_for_each(Some(&mut |node: &Node<i32>| keys.push(*node.key())))
//!     .unwrap();
//! assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 8, 9, 10]);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod node;
pub mod print;
mod traverse;
pub mod tree;


pub use error::{Error, Result};
pub use node::Node;
pub use traverse::Visitor;
pub use tree::Tree;
