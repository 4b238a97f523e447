//! Error types for tree mutation.
//!
//! The core never logs, retries, or falls back: every failure is
//! reported to the caller through these types and the tree is left
//! unchanged.

use std::fmt;

use crate::item::ItemId;

/// Errors that can occur while mutating a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The referenced item is not attached to this tree handle.
    ///
    /// This is a precondition violation: either the id belongs to a
    /// different handle, or the item was already removed.
    UnknownItem(ItemId),
    /// The requested key is already taken in the active uniqueness
    /// scope. No item was created.
    DuplicateId,
    /// The root item cannot be detached from its own tree.
    CannotRemoveRoot,
}

impl TreeError {
    /// Creates an unknown-item error for the given id.
    #[must_use]
    pub const fn unknown_item(item: ItemId) -> Self {
        Self::UnknownItem(item)
    }

    /// Creates a duplicate-key error.
    #[must_use]
    pub const fn duplicate_id() -> Self {
        Self::DuplicateId
    }

    /// Creates a cannot-remove-root error.
    #[must_use]
    pub const fn cannot_remove_root() -> Self {
        Self::CannotRemoveRoot
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownItem(item) => {
                write!(f, "{item} is not attached to this tree")
            }
            Self::DuplicateId => {
                write!(f, "an item with this id already exists in the uniqueness scope")
            }
            Self::CannotRemoveRoot => {
                write!(f, "the root item cannot be removed from its own tree")
            }
        }
    }
}

impl std::error::Error for TreeError {}
