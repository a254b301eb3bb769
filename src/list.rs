//! Forests built from flat, parent-referencing item lists.
//!
//! Each item exposes an id and the id of its parent through the [`Item`]
//! trait. [`HierarchyList`] creates one [`HierarchyNode`] per item, links the
//! nodes whose parent id resolves to another item, and keeps the others as
//! roots. Items may appear in any order: all nodes are created and indexed
//! before any parent is resolved.
//!
//! # Example
//!
//! ```
//! # use hierlist::HierarchyList;
//! let items = [(1, None), (3, Some(2)), (2, Some(1))];
//! let list: HierarchyList<u32, ()> = HierarchyList::new(items).unwrap();
//!
//! assert_eq!(list.len(), 1);
//! let leaf = list.get(&3).unwrap();
//! assert_eq!(list.depth(leaf), 2);
//! assert_eq!(list.iterleaves().collect::<Vec<_>>(), [leaf]);
//! ```

use std::hash::Hash;
use std::iter::Copied;
use std::mem::replace;
use std::ops::{Index, IndexMut};
use std::slice;

use delegate::delegate;
use indexmap::map::Entry as IdEntry;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::hierarchy::{Ancestors, Children, Descendants, Hierarchy, Leaves};
use crate::node::{HierarchyNode, Mapping, DEFAULT_CHILDREN_KEY};
use crate::NodeIndex;

/// A flat record that knows its own id and the id of its parent.
pub trait Item {
    /// Identifier type shared by an item and its parent reference.
    type Id: Hash + Eq;

    /// The id of the item.
    fn id(&self) -> Self::Id;

    /// The id of the item's parent, or `None` for a top-level item.
    ///
    /// Ids that do not match any item of the input also make a root.
    fn parent_id(&self) -> Option<Self::Id>;
}

impl<T: Item + ?Sized> Item for &T {
    type Id = T::Id;

    #[inline]
    fn id(&self) -> Self::Id {
        (**self).id()
    }

    #[inline]
    fn parent_id(&self) -> Option<Self::Id> {
        (**self).parent_id()
    }
}

/// `(id, parent_id)` pairs.
impl<K: Hash + Eq + Clone> Item for (K, Option<K>) {
    type Id = K;

    #[inline]
    fn id(&self) -> K {
        self.0.clone()
    }

    #[inline]
    fn parent_id(&self) -> Option<K> {
        self.1.clone()
    }
}

/// Options for [`HierarchyList::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    children_key: String,
    capacity: usize,
}

impl ListOptions {
    /// Default options: children under [`DEFAULT_CHILDREN_KEY`], no
    /// preallocation beyond the input's size hint.
    pub fn new() -> Self {
        Self {
            children_key: DEFAULT_CHILDREN_KEY.to_string(),
            capacity: 0,
        }
    }

    /// Sets the children key of every created node.
    pub fn children_key(mut self, key: impl Into<String>) -> Self {
        self.children_key = key.into();
        self
    }

    /// Preallocates room for `capacity` items.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A forest of [`HierarchyNode`]s built from a flat item list.
///
/// The list itself is the ordered sequence of roots, in the order their items
/// appeared in the input. Every node, at any depth, is reachable by item id
/// through [`HierarchyList::idx`].
#[derive(Debug, Clone)]
pub struct HierarchyList<K, V> {
    hierarchy: Hierarchy<V>,
    roots: Vec<NodeIndex>,
    idx: IndexMap<K, NodeIndex>,
}

impl<K, V> HierarchyList<K, V>
where
    K: Hash + Eq,
{
    /// Builds the forest described by `items`, with empty nodes.
    ///
    /// # Errors
    ///
    /// See [`HierarchyList::build`].
    pub fn new<I>(items: impl IntoIterator<Item = I>) -> Result<Self, BuildError>
    where
        I: Item<Id = K>,
    {
        Self::build(items, &ListOptions::default(), |_, _, _| {})
    }

    /// Builds the forest described by `items`, letting `callback` fill in
    /// each node.
    ///
    /// # Errors
    ///
    /// See [`HierarchyList::build`].
    pub fn with_callback<I, F>(
        items: impl IntoIterator<Item = I>,
        callback: F,
    ) -> Result<Self, BuildError>
    where
        I: Item<Id = K>,
        F: FnMut(&I, &mut HierarchyNode<V>, &Self),
    {
        Self::build(items, &ListOptions::default(), callback)
    }

    /// Builds the forest described by `items`.
    ///
    /// The input is consumed in a single pass that creates a node per item
    /// and indexes it by id. Right after that, `callback` receives the item,
    /// the new node, and the list built so far, so that it can copy item
    /// data onto the node. While the callback runs, the node's slot in the
    /// partial list holds an empty placeholder with the configured children
    /// key, so the node itself must be read through the callback argument.
    /// Once every node exists, parents are resolved in
    /// input order: a node whose parent id matches an indexed item becomes
    /// that node's last child, any other node becomes a root.
    ///
    /// # Errors
    ///
    ///  - [`BuildError::DuplicateId`] when two items share an id.
    ///  - [`BuildError::Cycle`] when an item is its own ancestor.
    #[instrument(level = "debug", skip_all, fields(children_key = %options.children_key))]
    pub fn build<I, F>(
        items: impl IntoIterator<Item = I>,
        options: &ListOptions,
        mut callback: F,
    ) -> Result<Self, BuildError>
    where
        I: Item<Id = K>,
        F: FnMut(&I, &mut HierarchyNode<V>, &Self),
    {
        let items = items.into_iter();
        let capacity = options.capacity.max(items.size_hint().0);
        let mut list = Self {
            hierarchy: Hierarchy::with_capacity(capacity),
            roots: Vec::new(),
            idx: IndexMap::with_capacity(capacity),
        };
        let mut links = Vec::with_capacity(capacity);

        for (position, item) in items.enumerate() {
            let node = list.hierarchy.add_node(
                HierarchyNode::new().with_children_key(options.children_key.as_str()),
            );
            match list.idx.entry(item.id()) {
                IdEntry::Occupied(_) => {
                    debug!(position, "rejecting item with a duplicate id");
                    return Err(BuildError::DuplicateId { position });
                }
                IdEntry::Vacant(entry) => {
                    entry.insert(node);
                }
            }

            // Lend the node to the callback while the list stays readable.
            let placeholder =
                HierarchyNode::new().with_children_key(options.children_key.as_str());
            let mut payload = replace(&mut list.hierarchy[node], placeholder);
            callback(&item, &mut payload, &list);
            list.hierarchy[node] = payload;

            links.push((node, item.parent_id()));
        }

        for (position, (node, parent_id)) in links.into_iter().enumerate() {
            let parent = parent_id.and_then(|id| list.idx.get(&id).copied());
            match parent {
                Some(parent) => {
                    if let Err(err) = list.hierarchy.set_parent(node, Some(parent)) {
                        debug!(position, %err, "rejecting cyclic parent reference");
                        return Err(BuildError::Cycle { position });
                    }
                }
                None => list.roots.push(node),
            }
        }

        debug!(
            nodes = list.hierarchy.len(),
            roots = list.roots.len(),
            "built hierarchy list"
        );
        Ok(list)
    }

    /// The map from item id to node, in input order.
    #[inline]
    pub fn idx(&self) -> &IndexMap<K, NodeIndex> {
        &self.idx
    }

    /// Returns the node built for the item with the given id.
    #[inline]
    pub fn get(&self, id: &K) -> Option<NodeIndex> {
        self.idx.get(id).copied()
    }
}

impl<K, V> HierarchyList<K, V> {
    /// The roots of the forest, in input order.
    #[inline]
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Iterates over the roots of the forest.
    #[inline]
    pub fn iter(&self) -> Copied<slice::Iter<'_, NodeIndex>> {
        self.roots.iter().copied()
    }

    /// Number of roots.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Returns `true` if the list has no roots, i.e. the input was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The arena holding every node of the forest.
    #[inline]
    pub fn hierarchy(&self) -> &Hierarchy<V> {
        &self.hierarchy
    }

    /// Every node in input order, regardless of the tree structure.
    pub fn iterindex(
        &self,
    ) -> impl DoubleEndedIterator<Item = NodeIndex> + ExactSizeIterator + '_ {
        self.idx.values().copied()
    }

    /// Traverses every tree of the forest in depth-first pre-order.
    ///
    /// Each call starts a fresh traversal.
    #[inline]
    pub fn iternodes(&self) -> Descendants<'_, V> {
        Descendants::new(&self.hierarchy, self.iter())
    }

    /// The nodes without children, in the order [`HierarchyList::iternodes`]
    /// visits them.
    #[inline]
    pub fn iterleaves(&self) -> Leaves<'_, V> {
        Leaves::new(&self.hierarchy, self.iter())
    }

    /// Builds the mapping representation of every root.
    pub fn to_mappings(&self) -> Vec<Mapping<V>>
    where
        V: Clone,
    {
        self.iter()
            .map(|root| self.hierarchy.to_mapping(root))
            .collect()
    }

    delegate! {
        to self.hierarchy {
            /// Returns a node's parent or `None` if it is a root.
            pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex>;
            /// Iterates over the ancestors of a node, from its parent up to the root.
            pub fn parents(&self, node: NodeIndex) -> Ancestors<'_, V>;
            /// Returns the number of ancestors of a node.
            pub fn depth(&self, node: NodeIndex) -> usize;
            /// Iterates over the node's children, in order.
            pub fn children(&self, node: NodeIndex) -> Children<'_>;
            /// Returns the number of the node's children.
            pub fn child_count(&self, node: NodeIndex) -> usize;
            /// Returns `true` if the node has no children.
            pub fn is_leaf(&self, node: NodeIndex) -> bool;
            /// Borrows the payload of a node.
            pub fn node(&self, node: NodeIndex) -> Option<&HierarchyNode<V>>;
            /// Mutably borrows the payload of a node.
            pub fn node_mut(&mut self, node: NodeIndex) -> Option<&mut HierarchyNode<V>>;
        }
    }

    /// Builds the mapping representation of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not in the list.
    pub fn to_mapping(&self, node: NodeIndex) -> Mapping<V>
    where
        V: Clone,
    {
        self.hierarchy.to_mapping(node)
    }
}

impl<K, V> Index<NodeIndex> for HierarchyList<K, V> {
    type Output = HierarchyNode<V>;

    fn index(&self, node: NodeIndex) -> &Self::Output {
        &self.hierarchy[node]
    }
}

impl<K, V> IndexMut<NodeIndex> for HierarchyList<K, V> {
    fn index_mut(&mut self, node: NodeIndex) -> &mut Self::Output {
        &mut self.hierarchy[node]
    }
}

impl<'a, K, V> IntoIterator for &'a HierarchyList<K, V> {
    type Item = NodeIndex;
    type IntoIter = Copied<slice::Iter<'a, NodeIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Error returned when building a [`HierarchyList`].
///
/// Positions are zero-based offsets into the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The item repeats the id of an earlier item.
    #[error("item at position {position} repeats the id of an earlier item")]
    DuplicateId {
        /// Position of the repeated item.
        position: usize,
    },
    /// The item's parent chain leads back to the item.
    #[error("item at position {position} is its own ancestor")]
    Cycle {
        /// Position of the item closing the cycle.
        position: usize,
    },
}
