//! Mapping-like node payloads.
//!
//! A [`HierarchyNode`] is an insertion-ordered map from string keys to values,
//! readable either by key (`node["name"]`) or attribute-style through
//! [`HierarchyNode::get_attr`], which reports absent keys as a typed error.
//!
//! The node also carries the name of its reserved *children key*. The
//! children themselves are owned by the [`Hierarchy`] the node lives in, and
//! only show up under that key in the node's mapping representation (see
//! [`Hierarchy::to_mapping`]).
//!
//! # Example
//!
//! ```
//! # use hierlist::HierarchyNode;
//! let mut node = HierarchyNode::from_parts([("a", 1)], [("b", 2), ("a", 3)]);
//!
//! // Extra pairs override the initial mapping.
//! assert_eq!(node["a"], 3);
//! assert_eq!(node.get_attr("b"), Ok(&2));
//! assert!(node.get_attr("c").is_err());
//!
//! node.rename_children("kinder");
//! assert_eq!(node.children_key(), "kinder");
//! ```
//!
//! [`Hierarchy`]: crate::hierarchy::Hierarchy
//! [`Hierarchy::to_mapping`]: crate::hierarchy::Hierarchy::to_mapping

use std::ops::{Index, IndexMut};

use indexmap::IndexMap;
use thiserror::Error;

/// Children key used by nodes unless configured otherwise.
pub const DEFAULT_CHILDREN_KEY: &str = "children";

/// A key/value node of a hierarchy.
///
/// Equality compares the fields as a map (ignoring their order) and the
/// children key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode<V> {
    fields: IndexMap<String, V>,
    children_key: String,
}

impl<V> HierarchyNode<V> {
    /// Creates an empty node using [`DEFAULT_CHILDREN_KEY`].
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            children_key: DEFAULT_CHILDREN_KEY.to_string(),
        }
    }

    /// Creates a node from an initial mapping and a set of extra pairs.
    ///
    /// Pairs are inserted in order, so an extra pair overrides an initial
    /// entry with the same key while keeping the entry's original position.
    pub fn from_parts<K1, K2>(
        initial: impl IntoIterator<Item = (K1, V)>,
        extra: impl IntoIterator<Item = (K2, V)>,
    ) -> Self
    where
        K1: Into<String>,
        K2: Into<String>,
    {
        let mut node = Self::new();
        node.extend(initial);
        node.extend(extra);
        node
    }

    /// Replaces the children key of the node.
    ///
    /// Shorthand for [`HierarchyNode::rename_children`] when building a node.
    pub fn with_children_key(mut self, key: impl Into<String>) -> Self {
        self.rename_children(key);
        self
    }

    /// Returns the key under which the node's children are exposed.
    #[inline]
    pub fn children_key(&self) -> &str {
        &self.children_key
    }

    /// Moves the children of the node to a new key.
    ///
    /// A field already stored under `new_name` is overwritten by the children
    /// sequence: it is removed from the node and returned.
    pub fn rename_children(&mut self, new_name: impl Into<String>) -> Option<V> {
        let new_name = new_name.into();
        let shadowed = self.fields.shift_remove(&new_name);
        self.children_key = new_name;
        shadowed
    }

    /// Attribute-style access to a field.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingKeyError`] naming `key` when the node has no such
    /// field.
    pub fn get_attr(&self, key: &str) -> Result<&V, MissingKeyError> {
        self.fields.get(key).ok_or_else(|| MissingKeyError {
            key: key.to_string(),
        })
    }

    /// Returns the value of a field, if present.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    /// Mutably borrows the value of a field, if present.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.fields.get_mut(key)
    }

    /// Inserts a field, returning the previous value stored under `key`.
    ///
    /// A field named like the children key is hidden by the children
    /// sequence in the node's mapping representation.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.fields.insert(key.into(), value)
    }

    /// Removes a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.fields.shift_remove(key)
    }

    /// Returns `true` if the node has a field named `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Iterates over the field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields, not counting the children key.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the node has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<V> Default for HierarchyNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for HierarchyNode<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.fields
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for HierarchyNode<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut node = Self::new();
        node.extend(iter);
        node
    }
}

impl<V> Index<&str> for HierarchyNode<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if the node has no field named `key`.
    fn index(&self, key: &str) -> &Self::Output {
        &self.fields[key]
    }
}

impl<V> IndexMut<&str> for HierarchyNode<V> {
    /// # Panics
    ///
    /// Panics if the node has no field named `key`.
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        &mut self.fields[key]
    }
}

/// Owned mapping representation of a node and its subtree.
///
/// Produced by [`Hierarchy::to_mapping`].
///
/// [`Hierarchy::to_mapping`]: crate::hierarchy::Hierarchy::to_mapping
pub type Mapping<V> = IndexMap<String, Entry<V>>;

/// A value in a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<V> {
    /// A field of the node.
    Value(V),
    /// The children sequence stored under the node's children key.
    Children(Vec<Mapping<V>>),
}

impl<V> Entry<V> {
    /// Returns the field value, or `None` for the children entry.
    pub fn as_value(&self) -> Option<&V> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Children(_) => None,
        }
    }

    /// Returns the children sequence, or `None` for a field value.
    pub fn as_children(&self) -> Option<&[Mapping<V>]> {
        match self {
            Entry::Value(_) => None,
            Entry::Children(children) => Some(children),
        }
    }
}

/// Error returned by [`HierarchyNode::get_attr`] for absent keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("node has no attribute {key:?}")]
pub struct MissingKeyError {
    /// The requested key.
    pub key: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn init_merges_parts() {
        let node = HierarchyNode::from_parts([("a", "b")], [("b", "c")]);

        assert_eq!(node.keys().collect_vec(), ["a", "b"]);
        assert_eq!(node["a"], "b");
        assert_eq!(node["b"], "c");
        assert_eq!(node.children_key(), DEFAULT_CHILDREN_KEY);
    }

    #[test]
    fn extra_pairs_win() {
        let node = HierarchyNode::from_parts([("a", 1), ("b", 2)], [("a", 10)]);

        assert_eq!(node.iter().collect_vec(), [("a", &10), ("b", &2)]);
    }

    #[test]
    fn keys_as_attributes() {
        let node: HierarchyNode<&str> = [("a", "b")].into_iter().collect();

        assert_eq!(node.get_attr("a"), Ok(&"b"));
        let err = node.get_attr("b").unwrap_err();
        assert_eq!(err.key, "b");
        assert_eq!(err.to_string(), "node has no attribute \"b\"");
    }

    #[test]
    #[should_panic]
    fn index_missing_key() {
        let node: HierarchyNode<u32> = HierarchyNode::new();
        let _ = node["nope"];
    }

    #[test]
    fn insert_and_remove() {
        let mut node = HierarchyNode::new();
        assert!(node.is_empty());

        assert_eq!(node.insert("x", 1), None);
        assert_eq!(node.insert("y", 2), None);
        assert_eq!(node.insert("x", 3), Some(1));
        node["y"] += 10;
        *node.get_mut("x").unwrap() += 1;

        assert_eq!(node.len(), 2);
        assert_eq!(node.remove("x"), Some(4));
        assert!(!node.contains_key("x"));
        assert_eq!(node.get("y"), Some(&12));
    }

    #[test]
    fn rename_children() {
        let mut node: HierarchyNode<u32> = HierarchyNode::new();
        assert_eq!(node.rename_children("kinder"), None);

        assert_eq!(node.children_key(), "kinder");
        assert!(node.is_empty());
    }

    #[test]
    fn rename_children_overwrites_field() {
        let mut node = HierarchyNode::from_parts([("kinder", 1), ("x", 2)], [] as [(&str, _); 0]);

        assert_eq!(node.rename_children("kinder"), Some(1));
        assert_eq!(node.keys().collect_vec(), ["x"]);
    }

    #[test]
    fn entry_accessors() {
        let value: Entry<u32> = Entry::Value(1);
        let children: Entry<u32> = Entry::Children(vec![Mapping::new()]);

        assert_eq!(value.as_value(), Some(&1));
        assert_eq!(value.as_children(), None);
        assert_eq!(children.as_value(), None);
        assert_eq!(children.as_children().map(<[_]>::len), Some(1));
    }
}
