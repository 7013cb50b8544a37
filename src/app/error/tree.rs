//! Tree construction errors.
//!
//! These can only be caused by bugs in the code building a tree, e.g. adding a node twice,
//! and are reported instead of panicking so that a view can still render an error label.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// The parent UID passed to `add` is not in the tree.
    #[error("Parent node {0} not found in tree")]
    ParentNotFound(String),
    /// A node with the same UID was already added.
    #[error("Node {0} already exists in tree")]
    DuplicateNode(String),
}
