//! Iterators over the structure of a [`Hierarchy`].

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use super::Hierarchy;
use crate::NodeIndex;

/// Iterator created by [`Hierarchy::children`].
#[derive(Debug, Clone)]
pub struct Children<'a> {
    iter: slice::Iter<'a, NodeIndex>,
}

impl<'a> Children<'a> {
    pub(super) fn new(children: &'a [NodeIndex]) -> Self {
        Self {
            iter: children.iter(),
        }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeIndex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().copied()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().copied()
    }
}

impl ExactSizeIterator for Children<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for Children<'_> {}

/// Iterator created by [`Hierarchy::parents`].
///
/// Walks from a node's parent up to the root of its tree.
pub struct Ancestors<'a, V> {
    hierarchy: &'a Hierarchy<V>,
    next: Option<NodeIndex>,
}

impl<'a, V> Ancestors<'a, V> {
    pub(super) fn new(hierarchy: &'a Hierarchy<V>, node: NodeIndex) -> Self {
        Self {
            hierarchy,
            next: hierarchy.parent(node),
        }
    }
}

impl<V> Clone for Ancestors<'_, V> {
    fn clone(&self) -> Self {
        Self {
            hierarchy: self.hierarchy,
            next: self.next,
        }
    }
}

impl<V> fmt::Debug for Ancestors<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ancestors")
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl<V> Iterator for Ancestors<'_, V> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.hierarchy.parent(current);
        Some(current)
    }
}

impl<V> FusedIterator for Ancestors<'_, V> {}

/// Depth-first pre-order traversal of one or more subtrees.
///
/// Every node is returned before its descendants, and all descendants of a
/// node are returned before its next sibling. Created by
/// [`Hierarchy::descendants`] and [`HierarchyList::iternodes`].
///
/// [`HierarchyList::iternodes`]: crate::list::HierarchyList::iternodes
pub struct Descendants<'a, V> {
    hierarchy: &'a Hierarchy<V>,
    /// Nodes left to visit, the next one on top.
    stack: Vec<NodeIndex>,
}

impl<'a, V> Descendants<'a, V> {
    /// Starts a traversal of the subtrees rooted at `roots`, in order.
    pub fn new(hierarchy: &'a Hierarchy<V>, roots: impl IntoIterator<Item = NodeIndex>) -> Self {
        let mut stack: Vec<NodeIndex> = roots.into_iter().collect();
        stack.reverse();
        Self { hierarchy, stack }
    }
}

impl<V> Clone for Descendants<'_, V> {
    fn clone(&self) -> Self {
        Self {
            hierarchy: self.hierarchy,
            stack: self.stack.clone(),
        }
    }
}

impl<V> fmt::Debug for Descendants<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descendants")
            .field("stack", &self.stack)
            .finish_non_exhaustive()
    }
}

impl<V> Iterator for Descendants<'_, V> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push the children in reverse so that the first child is visited next.
        self.stack.extend(self.hierarchy.children(node).rev());
        Some(node)
    }
}

impl<V> FusedIterator for Descendants<'_, V> {}

/// The childless nodes of a [`Descendants`] traversal, in the same order.
///
/// Created by [`HierarchyList::iterleaves`].
///
/// [`HierarchyList::iterleaves`]: crate::list::HierarchyList::iterleaves
pub struct Leaves<'a, V> {
    nodes: Descendants<'a, V>,
}

impl<'a, V> Leaves<'a, V> {
    /// Collects the leaves of the subtrees rooted at `roots`, in order.
    pub fn new(hierarchy: &'a Hierarchy<V>, roots: impl IntoIterator<Item = NodeIndex>) -> Self {
        Self {
            nodes: Descendants::new(hierarchy, roots),
        }
    }
}

impl<V> Clone for Leaves<'_, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<V> fmt::Debug for Leaves<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaves").field("nodes", &self.nodes).finish()
    }
}

impl<V> Iterator for Leaves<'_, V> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let hierarchy = self.nodes.hierarchy;
        self.nodes.find(|&node| hierarchy.is_leaf(node))
    }
}

impl<V> FusedIterator for Leaves<'_, V> {}
