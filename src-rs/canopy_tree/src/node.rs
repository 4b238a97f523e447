//! Internal node storage.

use crate::item::ItemId;

/// One stored node: its value, a non-owning back-reference to its
/// parent, and the ordered ids of its children.
///
/// Ownership flows downward through the handle's node table; the
/// parent link exists only for upward lookup.
#[derive(Debug, Clone)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) parent: Option<ItemId>,
    pub(crate) children: Vec<ItemId>,
}

impl<V> Node<V> {
    pub(crate) const fn new(value: V, parent: Option<ItemId>) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }
}
