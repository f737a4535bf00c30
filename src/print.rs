//! Renders a [`Tree`] as an indented diagram, rotated a quarter turn: the right subtree is drawn
//! above its parent and the left subtree below it.
//!
//! # Examples
//!
//! ```
//! use rebalance_bst::Tree;
//!
//! let tree = Tree::from_keys(1..=3);
//!
//! let printed = tree.to_string();
//! assert_eq!(
//!     printed.lines().collect::<Vec<_>>(),
//!     vec!["│   ┌── 3", "└── 2", "    └── 1"]
//! );
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Pretty-prints the tree, one node per line. An empty tree renders as an empty string.
pub fn pretty<K: fmt::Display>(tree: &Tree<K>) -> String {
    tree.to_string()
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => render(f, root, "", true),
            None => Ok(()),
        }
    }
}

/// Writes `node` and its subtrees. `is_left` is whether `node` hangs off its parent's left side
/// (the root counts as left).
fn render<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render(f, right, &prefix, false)?;
    }

    let branch = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, branch, node.key())?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render(f, left, &prefix, true)?;
    }

    Ok(())
}
