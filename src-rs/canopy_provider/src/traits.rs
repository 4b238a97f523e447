//! Traits for resolving the children and parent of hierarchy items.
//!
//! This module defines the adapter contracts that decouple traversal
//! and ordering logic from the concrete representation of a hierarchy.
//! An item type `T` is whatever handle is cheap to pass around for the
//! representation in question: an id for table-backed trees, a
//! reference for nested value trees.

use std::hash::Hash;

/// Trait for resolving the ordered children of an item.
///
/// Implementations must return an empty vec for a leaf (a leaf is a
/// normal item, not a failure) and must preserve the hierarchy's
/// sibling order.
pub trait ChildrenProvider<T> {
    /// Returns the ordered direct children of the item.
    ///
    /// # Arguments
    ///
    /// * `item` - The item whose children are requested
    ///
    /// # Returns
    ///
    /// The children in sibling order; empty for leaves and for items
    /// the provider does not recognize.
    fn children(&self, item: &T) -> Vec<T>;
}

/// Trait for resolving the parent of an item.
pub trait ParentProvider<T> {
    /// Returns the parent of the item.
    ///
    /// # Arguments
    ///
    /// * `item` - The item whose parent is requested
    ///
    /// # Returns
    ///
    /// `Some(parent)` for non-root items; `None` for roots and for
    /// items the provider does not recognize.
    fn parent(&self, item: &T) -> Option<T>;
}

/// Trait for resolving a keyed child under a given parent.
///
/// The contract promises a correct result only; lookup cost is a
/// property of the concrete provider (a hash-indexed provider resolves
/// in O(1), a linear-scan provider in O(children)).
pub trait ChildrenWithIdProvider<T, K>
where
    K: Eq + Hash,
{
    /// Returns the direct child of `parent` carrying the given key.
    ///
    /// # Arguments
    ///
    /// * `parent` - The item whose children are searched
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// `Some(child)` if exactly such a child exists, `None` otherwise.
    fn child_with_id(&self, parent: &T, key: &K) -> Option<T>;
}
