//! The [`Node`] record a [`Tree`][crate::Tree] is built from.

/// An owning link to a child subtree. `None` marks the empty position below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` stores a key and owns up to two children. Every key in the left subtree is less than
/// `key` and every key in the right subtree is not less than it.
///
/// Nodes are only handed out by shared reference (from [`Tree::find`][crate::Tree::find], a
/// traversal visitor, or [`Tree::root`][crate::Tree::root]) so callers can read the graph but
/// never break its ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Construct a new leaf with the given `key`.
    pub(crate) fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` when this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest downward path from this node to a leaf. A leaf has a height
    /// of 0.
    pub(crate) fn height(&self) -> usize {
        // An empty child counts as -1, so a leaf ends up at 0.
        self.left()
            .into_iter()
            .chain(self.right())
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}
