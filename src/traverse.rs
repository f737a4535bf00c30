//! The four traversal orders. Each one calls a visitor exactly once per node and fails with
//! [`Error::MissingVisitor`] before visiting anything if no visitor is given.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::{Error, Node, Tree};
//!
//! let tree = Tree::from_keys(1..=7);
//!
//! let mut seen = Vec::new();
//! tree.level_order_for_each(Some(&mut |node: &Node<i32>| seen.push(*node.key())))
//!     .unwrap();
//! assert_eq!(seen, vec![4, 2, 6, 1, 3, 5, 7]);
//!
//! assert_eq!(tree.pre_order_for_each(None), Err(Error::MissingVisitor));
//! ```

use std::collections::VecDeque;

use log::trace;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::tree::Tree;

/// A callback given read access to each node of a traversal. The reference is only valid for the
/// duration of the call.
pub type Visitor<'a, K> = &'a mut dyn FnMut(&Node<K>);

impl<K> Tree<K> {
    /// Visits nodes breadth first, left to right within each level, using a queue.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVisitor`] if `visitor` is `None`.
    pub fn level_order_for_each(&self, visitor: Option<Visitor<'_, K>>) -> Result<()> {
        let visit = require(visitor, "level-order")?;

        let mut queue: VecDeque<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }

        Ok(())
    }

    /// Visits nodes in the same order as [`Tree::level_order_for_each`], but each dequeued node
    /// is handled by a recursive call that passes the queue along.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVisitor`] if `visitor` is `None`.
    pub fn level_order_recursive_for_each(&self, visitor: Option<Visitor<'_, K>>) -> Result<()> {
        let visit = require(visitor, "recursive level-order")?;
        level_order(self.root().into_iter().collect(), visit);
        Ok(())
    }

    /// Visits each node, then its left subtree, then its right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVisitor`] if `visitor` is `None`.
    pub fn pre_order_for_each(&self, visitor: Option<Visitor<'_, K>>) -> Result<()> {
        let visit = require(visitor, "pre-order")?;
        pre_order(self.root(), visit);
        Ok(())
    }

    /// Visits the left subtree, then the node, then the right subtree. Keys are visited in
    /// ascending order.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVisitor`] if `visitor` is `None`.
    pub fn in_order_for_each(&self, visitor: Option<Visitor<'_, K>>) -> Result<()> {
        let visit = require(visitor, "in-order")?;
        in_order(self.root(), visit);
        Ok(())
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Errors
    ///
    /// [`Error::MissingVisitor`] if `visitor` is `None`.
    pub fn post_order_for_each(&self, visitor: Option<Visitor<'_, K>>) -> Result<()> {
        let visit = require(visitor, "post-order")?;
        post_order(self.root(), visit);
        Ok(())
    }

    /// All keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebalance_bst::Tree;
    ///
    /// let tree = Tree::from_keys(vec![3, 1, 2]);
    /// assert_eq!(tree.in_order_keys(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order_keys<'t>(&'t self) -> Vec<&'t K> {
        let mut keys = Vec::new();
        in_order(self.root(), &mut |node: &'t Node<K>| keys.push(&node.key));
        keys
    }
}

fn require<'a, K>(visitor: Option<Visitor<'a, K>>, order: &str) -> Result<Visitor<'a, K>> {
    visitor.ok_or_else(|| {
        trace!("{} traversal started without a visitor", order);
        Error::MissingVisitor
    })
}

fn level_order<'t, K, F>(mut queue: VecDeque<&'t Node<K>>, visit: &mut F)
where
    F: FnMut(&'t Node<K>) + ?Sized,
{
    let node = match queue.pop_front() {
        Some(node) => node,
        None => return,
    };

    visit(node);
    queue.extend(node.left());
    queue.extend(node.right());

    level_order(queue, visit);
}

fn pre_order<'t, K, F>(node: Option<&'t Node<K>>, visit: &mut F)
where
    F: FnMut(&'t Node<K>) + ?Sized,
{
    if let Some(node) = node {
        visit(node);
        pre_order(node.left(), visit);
        pre_order(node.right(), visit);
    }
}

fn in_order<'t, K, F>(node: Option<&'t Node<K>>, visit: &mut F)
where
    F: FnMut(&'t Node<K>) + ?Sized,
{
    if let Some(node) = node {
        in_order(node.left(), visit);
        visit(node);
        in_order(node.right(), visit);
    }
}

fn post_order<'t, K, F>(node: Option<&'t Node<K>>, visit: &mut F)
where
    F: FnMut(&'t Node<K>) + ?Sized,
{
    if let Some(node) = node {
        post_order(node.left(), visit);
        post_order(node.right(), visit);
        visit(node);
    }
}

/// Moves every key out of the subtree at `link`, in order, consuming the nodes.
pub(crate) fn drain_in_order<K>(link: Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = link {
        let Node { key, left, right } = *node;
        drain_in_order(left, keys);
        keys.push(key);
        drain_in_order(right, keys);
    }
}
