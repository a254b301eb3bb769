//! Arena of [`HierarchyNode`]s arranged into a forest.
//!
//! Every node lives in a [`Hierarchy`] and is addressed by a [`NodeIndex`].
//! The arena records for each node its parent, if any, and the ordered list of
//! its children. The only way to change a node's parent is
//! [`Hierarchy::set_parent`] (or its shorthands [`Hierarchy::add`] and
//! [`Hierarchy::detach`]), so the parent of a node and the children lists of
//! its former and current parents always agree.
//!
//! # Example
//!
//! ```
//! # use hierlist::{Hierarchy, HierarchyNode};
//! let mut hier = Hierarchy::new();
//! let root = hier.add_node(HierarchyNode::from_iter([("id", 1)]));
//! let child = hier.add(root, HierarchyNode::from_iter([("id", 2)]));
//! let other = hier.add_node(HierarchyNode::from_iter([("id", 3)]));
//!
//! assert_eq!(hier.parent(child), Some(root));
//! assert_eq!(hier.depth(child), 1);
//!
//! // Moving the child removes it from its previous parent.
//! hier.set_parent(child, Some(other)).unwrap();
//! assert_eq!(hier.child_count(root), 0);
//! assert_eq!(hier.children(other).collect::<Vec<_>>(), [child]);
//! ```

mod iter;

use std::ops::{Index, IndexMut};

use thiserror::Error;
use tracing::instrument;

use crate::node::{Entry, HierarchyNode, Mapping};
use crate::NodeIndex;

pub use iter::{Ancestors, Children, Descendants, Leaves};

/// Forest of [`HierarchyNode`]s with parent/child linkage.
///
/// Nodes are never removed, so node indices stay valid for the lifetime of
/// the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy<V> {
    data: Vec<NodeData<V>>,
}

impl<V> Hierarchy<V> {
    /// Creates a new empty hierarchy.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty hierarchy with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl<V> Default for Hierarchy<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Hierarchy<V> {
    #[inline]
    fn try_get(&self, node: NodeIndex) -> Option<&NodeData<V>> {
        self.data.get(node.index())
    }

    #[inline]
    fn get_mut(&mut self, node: NodeIndex) -> &mut NodeData<V> {
        &mut self.data[node.index()]
    }

    /// Inserts a new root node, returning its index.
    ///
    /// # Panics
    ///
    /// Panics when the hierarchy would hold more than `2^31 - 1` nodes.
    #[instrument(level = "trace", skip_all, ret)]
    pub fn add_node(&mut self, node: HierarchyNode<V>) -> NodeIndex {
        let index = NodeIndex::new(self.data.len());
        self.data.push(NodeData::new(node));
        index
    }

    /// Inserts a new node as the last child of `parent`, returning its index.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not in the hierarchy.
    #[instrument(level = "trace", skip(self, node), ret)]
    pub fn add(&mut self, parent: NodeIndex, node: HierarchyNode<V>) -> NodeIndex {
        assert!(self.contains(parent), "parent {parent} is not in the hierarchy");
        let child = self.add_node(node);
        // A fresh node has no children, so it cannot be an ancestor of `parent`.
        self.push_child(child, parent);
        child
    }

    /// Sets or clears the parent of a node.
    ///
    /// With `Some(parent)`, the node is removed from the children of its
    /// current parent, if any, and appended to the children of `parent`.
    /// Assigning the current parent again moves the node to the end of the
    /// parent's children. With `None`, the node is detached and becomes a root.
    ///
    /// # Errors
    ///
    ///  - When `node` or `parent` is not in the hierarchy.
    ///  - When `parent` is `node` itself or one of its descendants.
    ///
    /// The hierarchy is left untouched when an error is returned.
    #[instrument(level = "trace", skip(self))]
    pub fn set_parent(
        &mut self,
        node: NodeIndex,
        parent: Option<NodeIndex>,
    ) -> Result<(), ParentError> {
        if !self.contains(node) {
            return Err(ParentError::UnknownNode(node));
        }

        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(ParentError::UnknownNode(parent));
            } else if !self.cycle_check(node, parent) {
                return Err(ParentError::Cycle { node, parent });
            }
        }

        self.unlink(node);
        if let Some(parent) = parent {
            self.push_child(node, parent);
        }

        Ok(())
    }

    /// Detaches a node from its parent, returning the former parent.
    ///
    /// Does nothing and returns `None` when the node is a root or not in the
    /// hierarchy.
    #[instrument(level = "trace", skip(self), ret)]
    pub fn detach(&mut self, node: NodeIndex) -> Option<NodeIndex> {
        if !self.contains(node) {
            return None;
        }
        self.unlink(node)
    }

    /// Ensures that making `node` a child of `parent` would not introduce a cycle.
    fn cycle_check(&self, node: NodeIndex, parent: NodeIndex) -> bool {
        if node == parent {
            return false;
        }
        // When `node` does not have any children it can't contain `parent`.
        if self.is_leaf(node) {
            return true;
        }
        self.parents(parent).all(|ancestor| ancestor != node)
    }

    /// Appends `node` to the children of `parent`.
    ///
    /// The node must be a root and the attachment must not introduce a cycle.
    fn push_child(&mut self, node: NodeIndex, parent: NodeIndex) {
        debug_assert!(self.is_root(node));
        self.get_mut(parent).children.push(node);
        self.get_mut(node).parent = Some(parent);
    }

    /// Removes `node` from the children of its parent, returning the parent.
    fn unlink(&mut self, node: NodeIndex) -> Option<NodeIndex> {
        let parent = self.get_mut(node).parent.take()?;
        let siblings = &mut self.get_mut(parent).children;
        if let Some(position) = siblings.iter().position(|&child| child == node) {
            siblings.remove(position);
        }
        Some(parent)
    }

    /// Returns `true` if the node is part of the hierarchy.
    #[inline]
    pub fn contains(&self, node: NodeIndex) -> bool {
        node.index() < self.data.len()
    }

    /// Number of nodes in the hierarchy.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the hierarchy has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the payload of a node, if it is in the hierarchy.
    #[inline]
    pub fn node(&self, node: NodeIndex) -> Option<&HierarchyNode<V>> {
        self.try_get(node).map(|data| &data.node)
    }

    /// Mutably borrows the payload of a node, if it is in the hierarchy.
    #[inline]
    pub fn node_mut(&mut self, node: NodeIndex) -> Option<&mut HierarchyNode<V>> {
        self.data.get_mut(node.index()).map(|data| &mut data.node)
    }

    /// Returns a node's parent or `None` if it is a root.
    ///
    /// Nodes that are not in the hierarchy have no parent.
    #[inline]
    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.try_get(node).and_then(|data| data.parent)
    }

    /// Iterates over the ancestors of a node, from its parent up to the root.
    ///
    /// The node itself is not included. Empty for a root.
    #[inline]
    pub fn parents(&self, node: NodeIndex) -> Ancestors<'_, V> {
        Ancestors::new(self, node)
    }

    /// Returns the number of ancestors of a node; `0` for a root.
    #[inline]
    pub fn depth(&self, node: NodeIndex) -> usize {
        self.parents(node).count()
    }

    /// Iterates over the node's children, in order.
    #[inline]
    pub fn children(&self, node: NodeIndex) -> Children<'_> {
        let children = self
            .try_get(node)
            .map_or(&[][..], |data| data.children.as_slice());
        Children::new(children)
    }

    /// Returns the number of the node's children.
    #[inline]
    pub fn child_count(&self, node: NodeIndex) -> usize {
        self.try_get(node).map_or(0, |data| data.children.len())
    }

    /// Returns `true` if the node has no parent.
    #[inline]
    pub fn is_root(&self, node: NodeIndex) -> bool {
        self.parent(node).is_none()
    }

    /// Returns `true` if the node has no children.
    #[inline]
    pub fn is_leaf(&self, node: NodeIndex) -> bool {
        self.child_count(node) == 0
    }

    /// Iterates over all node indices in insertion order.
    pub fn nodes_iter(&self) -> impl Iterator<Item = NodeIndex> + Clone + '_ {
        (0..self.data.len()).map(NodeIndex::new)
    }

    /// Iterates over the root nodes in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeIndex> + Clone + '_ {
        self.nodes_iter().filter(|&node| self.is_root(node))
    }

    /// Traverses the subtree rooted at `node` in depth-first pre-order,
    /// starting with `node` itself.
    #[inline]
    pub fn descendants(&self, node: NodeIndex) -> Descendants<'_, V> {
        Descendants::new(self, [node])
    }

    /// Builds the mapping representation of a node.
    ///
    /// The mapping holds the node's fields in order, followed by the node's
    /// children key mapped to the mappings of its children.
    ///
    /// The subtree is converted without recursion. Dropping the returned
    /// mapping recurses once per level, however, so very deep subtrees can
    /// exhaust the stack when the result is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the hierarchy.
    pub fn to_mapping(&self, node: NodeIndex) -> Mapping<V>
    where
        V: Clone,
    {
        let order: Vec<NodeIndex> = self.descendants(node).collect();

        // In reverse pre-order every subtree leaves exactly one mapping on the
        // stack, and the first child's mapping ends up on top.
        let mut finished: Vec<Mapping<V>> = Vec::new();
        for &current in order.iter().rev() {
            let payload = &self[current];
            let mut mapping: Mapping<V> = payload
                .iter()
                .map(|(key, value)| (key.to_string(), Entry::Value(value.clone())))
                .collect();
            let first_child = finished.len() - self.child_count(current);
            let children = finished.drain(first_child..).rev().collect();
            mapping.insert(payload.children_key().to_string(), Entry::Children(children));
            finished.push(mapping);
        }

        // The subtree root is visited last.
        finished.pop().unwrap_or_default()
    }
}

impl<V> Index<NodeIndex> for Hierarchy<V> {
    type Output = HierarchyNode<V>;

    fn index(&self, node: NodeIndex) -> &Self::Output {
        &self.data[node.index()].node
    }
}

impl<V> IndexMut<NodeIndex> for Hierarchy<V> {
    fn index_mut(&mut self, node: NodeIndex) -> &mut Self::Output {
        &mut self.get_mut(node).node
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData<V> {
    /// The payload of the node.
    node: HierarchyNode<V>,
    /// The parent of the node, if any.
    parent: Option<NodeIndex>,
    /// The children of the node, in order.
    children: Vec<NodeIndex>,
}

impl<V> NodeData<V> {
    fn new(node: HierarchyNode<V>) -> Self {
        Self {
            node,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Error returned by [`Hierarchy::set_parent`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParentError {
    /// The node is not part of the hierarchy.
    #[error("node {0} is not in the hierarchy")]
    UnknownNode(NodeIndex),
    /// The new parent is the node itself or one of its descendants.
    #[error("making {parent} the parent of {node} would introduce a cycle")]
    Cycle {
        /// The node being attached.
        node: NodeIndex,
        /// The rejected parent.
        parent: NodeIndex,
    },
}
