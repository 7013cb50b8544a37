//! Generic tree container used by tree widgets.
//!
//! Nodes are stored once by UID; parent/child links are kept in separate indexes so the
//! tree can be walked from any node in both directions.

use std::{
    collections::HashMap,
    fmt::{Debug, Display},
    hash::Hash,
};

use crate::app::error::tree::TreeError;

/// A node which can be stored in a [`TreeData`].
pub trait TreeNode {
    type Uid: Clone + Eq + Hash + Display + Debug;

    /// Unique ID of this node within its tree.
    fn uid(&self) -> Self::Uid;
}

/// Tree of nodes with stable insertion order.
#[derive(Debug, Clone)]
pub struct TreeData<T: TreeNode> {
    nodes: HashMap<T::Uid, T>,
    children: HashMap<T::Uid, Vec<T::Uid>>,
    parents: HashMap<T::Uid, T::Uid>,
    roots: Vec<T::Uid>,
}

impl<T: TreeNode> Default for TreeData<T> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
            children: HashMap::new(),
            parents: HashMap::new(),
            roots: Vec::new(),
        }
    }
}

impl<T: TreeNode> TreeData<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the tree.
    ///
    /// # Arguments
    /// - `parent` - UID of the parent node, or `None` to add a root node
    /// - `node` - Node to add
    ///
    /// # Returns
    /// - `Ok(uid)` - UID of the added node
    /// - `Err(TreeError::ParentNotFound)` - The parent is not in the tree
    /// - `Err(TreeError::DuplicateNode)` - A node with the same UID already exists
    pub fn add(&mut self, parent: Option<&T::Uid>, node: T) -> Result<T::Uid, TreeError> {
        let uid = node.uid();
        if self.nodes.contains_key(&uid) {
            return Err(TreeError::DuplicateNode(uid.to_string()));
        }
        match parent {
            Some(parent) => {
                if !self.nodes.contains_key(parent) {
                    return Err(TreeError::ParentNotFound(parent.to_string()));
                }
                self.children
                    .entry(parent.clone())
                    .or_default()
                    .push(uid.clone());
                self.parents.insert(uid.clone(), parent.clone());
            }
            None => self.roots.push(uid.clone()),
        }
        self.nodes.insert(uid.clone(), node);
        Ok(uid)
    }

    pub fn node(&self, uid: &T::Uid) -> Option<&T> {
        self.nodes.get(uid)
    }

    /// Mutable access for updating a node in place, e.g. its item count.
    pub fn node_mut(&mut self, uid: &T::Uid) -> Option<&mut T> {
        self.nodes.get_mut(uid)
    }

    pub fn roots(&self) -> &[T::Uid] {
        &self.roots
    }

    /// Returns the UIDs of the children of a node, or of the root nodes for `None`.
    pub fn children(&self, uid: Option<&T::Uid>) -> &[T::Uid] {
        match uid {
            None => &self.roots,
            Some(uid) => self.children.get(uid).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    pub fn parent(&self, uid: &T::Uid) -> Option<&T::Uid> {
        self.parents.get(uid)
    }

    /// Returns the ancestors of a node, starting with its root. The node itself is excluded.
    pub fn path(&self, uid: &T::Uid) -> Vec<&T::Uid> {
        let mut path = Vec::new();
        let mut current = self.parents.get(uid);
        while let Some(parent) = current {
            path.push(parent);
            current = self.parents.get(parent);
        }
        path.reverse();
        path
    }

    /// Returns all nodes depth-first in insertion order, with their depth.
    pub fn all(&self) -> Vec<(usize, &T)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, &T::Uid)> = self.roots.iter().rev().map(|u| (0, u)).collect();
        while let Some((depth, uid)) = stack.pop() {
            if let Some(node) = self.nodes.get(uid) {
                out.push((depth, node));
            }
            if let Some(children) = self.children.get(uid) {
                stack.extend(children.iter().rev().map(|c| (depth + 1, c)));
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Node(&'static str);

    impl TreeNode for Node {
        type Uid = &'static str;

        fn uid(&self) -> Self::Uid {
            self.0
        }
    }

    fn sample() -> TreeData<Node> {
        let mut tree = TreeData::new();
        tree.add(None, Node("a")).unwrap();
        tree.add(Some(&"a"), Node("a1")).unwrap();
        tree.add(Some(&"a1"), Node("a1x")).unwrap();
        tree.add(Some(&"a"), Node("a2")).unwrap();
        tree.add(None, Node("b")).unwrap();
        tree
    }

    mod add {
        use super::*;

        /// Expect an error when adding a node below an unknown parent
        #[test]
        fn rejects_unknown_parent() {
            let mut tree = sample();
            let result = tree.add(Some(&"zzz"), Node("c"));

            assert_eq!(result, Err(TreeError::ParentNotFound("zzz".to_string())));
            assert_eq!(tree.len(), 5);
        }

        /// Expect an error when adding a node twice
        #[test]
        fn rejects_duplicate() {
            let mut tree = sample();
            let result = tree.add(None, Node("a2"));

            assert_eq!(result, Err(TreeError::DuplicateNode("a2".to_string())));
        }
    }

    mod navigation {
        use super::*;

        /// Expect children in insertion order and roots for `None`
        #[test]
        fn lists_children() {
            let tree = sample();

            assert_eq!(tree.children(None), &["a", "b"]);
            assert_eq!(tree.children(Some(&"a")), &["a1", "a2"]);
            assert!(tree.children(Some(&"b")).is_empty());
        }

        /// Expect the path to list ancestors root first
        #[test]
        fn builds_path() {
            let tree = sample();

            assert_eq!(tree.path(&"a1x"), vec![&"a", &"a1"]);
            assert!(tree.path(&"a").is_empty());
            assert_eq!(tree.parent(&"a1x"), Some(&"a1"));
        }

        /// Expect a depth-first walk in insertion order
        #[test]
        fn walks_depth_first() {
            let tree = sample();
            let all: Vec<_> = tree.all().into_iter().map(|(d, n)| (d, n.0)).collect();

            assert_eq!(
                all,
                vec![(0, "a"), (1, "a1"), (2, "a1x"), (1, "a2"), (0, "b")]
            );
        }
    }
}
