//! Handles for the nodes stored in a [`Hierarchy`].
//!
//! [`Hierarchy`]: crate::hierarchy::Hierarchy
use std::num::NonZeroU32;
use thiserror::Error;

/// Index of a node within a [`Hierarchy`].
///
/// Restricted to be at most `2^31 - 2`. This type admits the *null pointer
/// optimization* so that `Option<NodeIndex>` takes as much space as a
/// `NodeIndex` by itself, which keeps the parent slot of every node small.
///
/// [`Hierarchy`]: crate::hierarchy::Hierarchy
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(NonZeroU32);

impl NodeIndex {
    /// Maximum allowed index.
    const MAX: usize = (u32::MAX / 2) as usize - 1;

    /// Creates a new node index from a `usize`.
    ///
    /// # Panics
    ///
    /// Panics if the index is greater than `2^31 - 2`.
    #[inline]
    pub fn new(index: usize) -> Self {
        match Self::try_from(index) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the index as a `usize`.
    #[inline]
    pub fn index(self) -> usize {
        self.into()
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(index: NodeIndex) -> Self {
        u32::from(index.0) as usize - 1
    }
}

impl TryFrom<usize> for NodeIndex {
    type Error = IndexError;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index > Self::MAX {
            Err(IndexError { index })
        } else {
            Ok(Self(NonZeroU32::MIN.saturating_add(index as u32)))
        }
    }
}

impl std::fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // avoid unnecessary newlines in alternate mode
        write!(f, "NodeIndex({})", self.index())
    }
}

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Error indicating a [`NodeIndex`] is too large.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the index {index} is too large.")]
pub struct IndexError {
    index: usize,
}
