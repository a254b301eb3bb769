#![warn(missing_docs)]
//! `hierlist` builds in-memory forests out of flat, parent-referencing record
//! lists.
//!
//! The nodes of a forest are [`HierarchyNode`]s: insertion-ordered key/value
//! maps that can also be read attribute-style through
//! [`HierarchyNode::get_attr`]. Nodes live in a [`Hierarchy`] arena which
//! identifies them via [`NodeIndex`] and keeps track of each node's parent and
//! ordered children. Changing a node's parent with
//! [`Hierarchy::set_parent`] removes it from its previous parent's children
//! and appends it to the new parent's.
//!
//! [`HierarchyList`] converts a flat collection of items, each exposing an id
//! and an optional parent id through the [`Item`] trait, into such a forest.
//! It keeps an index from item id to node and offers depth-first traversals
//! over all nodes or only the leaves.
//!
//! # Example
//!
//! ```
//! use hierlist::{HierarchyList, Item};
//!
//! struct Row {
//!     id: u32,
//!     parent: Option<u32>,
//!     title: &'static str,
//! }
//!
//! impl Item for Row {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!     fn parent_id(&self) -> Option<u32> {
//!         self.parent
//!     }
//! }
//!
//! let rows = [
//!     Row { id: 2, parent: Some(1), title: "chapter" },
//!     Row { id: 1, parent: None, title: "book" },
//!     Row { id: 3, parent: Some(2), title: "section" },
//! ];
//!
//! // Copy the titles onto the nodes while building the forest.
//! let list = HierarchyList::with_callback(&rows, |row, node, _| {
//!     node.insert("title", row.title);
//! })
//! .unwrap();
//!
//! let titles: Vec<_> = list.iternodes().map(|n| list[n]["title"]).collect();
//! assert_eq!(titles, ["book", "chapter", "section"]);
//!
//! let section = list.get(&3).unwrap();
//! assert_eq!(list.depth(section), 2);
//! ```
//!
//! # Features
//!
//! - `proptest` enables the [`proptest`] module with strategies generating
//!   random item lists.

pub mod hierarchy;
pub mod index;
pub mod list;
pub mod node;
pub mod render;

#[cfg(feature = "proptest")]
pub mod proptest;

#[doc(inline)]
pub use crate::hierarchy::{Hierarchy, ParentError};
#[doc(inline)]
pub use crate::index::{IndexError, NodeIndex};
#[doc(inline)]
pub use crate::list::{BuildError, HierarchyList, Item, ListOptions};
#[doc(inline)]
pub use crate::node::{Entry, HierarchyNode, Mapping, MissingKeyError};
