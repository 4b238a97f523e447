//! Structural-change hooks.

use crate::item::ItemId;

/// Hooks invoked by a tree handle after structural changes.
///
/// Implementations can observe item creation and removal, for example to
/// maintain a secondary index or collect statistics. Both hooks default
/// to no-ops, so an implementation only overrides what it needs.
///
/// The handle guarantees each hook fires exactly once per affected item:
/// removing a subtree invokes [`TreeHooks::on_remove_item`] for the
/// detached item *and* every one of its descendants.
pub trait TreeHooks<V> {
    /// Called after an item has been created and attached.
    fn on_add_item(&mut self, item: ItemId, value: &V) {
        let _ = (item, value);
    }

    /// Called after an item has been detached, once per removed item.
    ///
    /// The value is the removed item's value; the id is already dangling
    /// by the time the hook runs.
    fn on_remove_item(&mut self, item: ItemId, value: &V) {
        let _ = (item, value);
    }
}

/// The default hook implementation that observes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl<V> TreeHooks<V> for NoHooks {}
