//! The error type shared by the tree operations.

use thiserror::Error;

/// Errors raised by [`Tree`][crate::Tree] operations.
///
/// Looking up, deleting, or measuring a key that isn't in the tree is never an error. Those
/// report absence through `Option` or do nothing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A traversal was started without a visitor to call for each node.
    #[error("invalid argument: traversal requires a visitor")]
    MissingVisitor,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
