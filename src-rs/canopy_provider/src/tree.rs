//! Provider adapters over the native tree handles.

use std::hash::Hash;

use canopy_tree::{ItemId, Tree, TreeHooks, TreeWithId};

use crate::traits::{ChildrenProvider, ChildrenWithIdProvider, ParentProvider};

/// Provider adapter over a [`Tree`] handle.
///
/// Items are the handle's [`ItemId`]s; children come back in stored
/// sibling order.
#[derive(Debug, Clone, Copy)]
pub struct TreeItemProvider<'a, V, H = canopy_tree::NoHooks> {
    tree: &'a Tree<V, H>,
}

impl<'a, V, H> TreeItemProvider<'a, V, H> {
    /// Creates a provider over the given handle.
    #[must_use]
    pub const fn new(tree: &'a Tree<V, H>) -> Self {
        Self { tree }
    }
}

impl<V, H> ChildrenProvider<ItemId> for TreeItemProvider<'_, V, H>
where
    H: TreeHooks<V>,
{
    fn children(&self, item: &ItemId) -> Vec<ItemId> {
        self.tree.children(*item).to_vec()
    }
}

impl<V, H> ParentProvider<ItemId> for TreeItemProvider<'_, V, H>
where
    H: TreeHooks<V>,
{
    fn parent(&self, item: &ItemId) -> Option<ItemId> {
        self.tree.parent(*item)
    }
}

/// Provider adapter over a [`TreeWithId`] handle.
///
/// In [`canopy_tree::IdScope::Global`] scope the keyed lookup resolves
/// through the handle's hash index; in sibling scope it scans the
/// parent's children.
#[derive(Debug, Clone, Copy)]
pub struct TreeItemWithIdProvider<'a, K, V, H = canopy_tree::NoHooks> {
    tree: &'a TreeWithId<K, V, H>,
}

impl<'a, K, V, H> TreeItemWithIdProvider<'a, K, V, H> {
    /// Creates a provider over the given keyed handle.
    #[must_use]
    pub const fn new(tree: &'a TreeWithId<K, V, H>) -> Self {
        Self { tree }
    }
}

impl<K, V, H> ChildrenProvider<ItemId> for TreeItemWithIdProvider<'_, K, V, H>
where
    K: Eq + Hash + Clone,
    H: TreeHooks<V>,
{
    fn children(&self, item: &ItemId) -> Vec<ItemId> {
        self.tree.children(*item).to_vec()
    }
}

impl<K, V, H> ParentProvider<ItemId> for TreeItemWithIdProvider<'_, K, V, H>
where
    K: Eq + Hash + Clone,
    H: TreeHooks<V>,
{
    fn parent(&self, item: &ItemId) -> Option<ItemId> {
        self.tree.parent(*item)
    }
}

impl<K, V, H> ChildrenWithIdProvider<ItemId, K> for TreeItemWithIdProvider<'_, K, V, H>
where
    K: Eq + Hash + Clone,
    H: TreeHooks<V>,
{
    fn child_with_id(&self, parent: &ItemId, key: &K) -> Option<ItemId> {
        self.tree.get_child_with_id(*parent, key)
    }
}
