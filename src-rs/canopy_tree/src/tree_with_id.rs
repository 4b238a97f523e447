//! Tree handle with keyed items and uniqueness enforcement.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Deref;

use canopy_shared::{Change, SortOrder};
use indexmap::IndexMap;

use crate::error::TreeError;
use crate::hooks::{NoHooks, TreeHooks};
use crate::item::ItemId;
use crate::tree::Tree;

/// The scope within which item keys must be unique.
///
/// The scope is a property of the handle, chosen at construction, and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum IdScope {
    /// No two attached items anywhere in the tree may share a key.
    Global,
    /// Only direct siblings must have distinct keys; the same key may
    /// appear under different parents.
    Siblings,
}

/// An owning tree handle whose items each carry a key.
///
/// This is [`Tree`] plus identity: every item has a key of type `K`,
/// and the handle rejects creations that would violate the uniqueness
/// scope ([`IdScope`]) it was constructed with. Under
/// [`IdScope::Global`] the handle maintains a key → item index, so
/// [`TreeWithId::get_item_with_id`] is a hash lookup; removing a
/// subtree releases every removed descendant's key from that index.
///
/// The read-only [`Tree`] contract (`children`, `parent`, `depth`, …)
/// is available through deref.
///
/// # Example
///
/// ```rust
/// use canopy_tree::{IdScope, TreeWithId};
///
/// let mut tree = TreeWithId::new(IdScope::Global, "root", 0);
/// let root = tree.root();
/// let a = tree.create_child(root, "a", 1).unwrap();
///
/// assert_eq!(tree.get_item_with_id(&"a"), Some(a));
/// assert!(tree.create_child(root, "a", 2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TreeWithId<K, V, H = NoHooks> {
    tree: Tree<V, H>,
    scope: IdScope,
    keys: HashMap<ItemId, K>,
    index: IndexMap<K, ItemId>,
}

impl<K, V> TreeWithId<K, V, NoHooks>
where
    K: Eq + Hash + Clone,
{
    /// Creates a keyed tree consisting of a single root item.
    #[must_use]
    pub fn new(scope: IdScope, root_key: K, root_value: V) -> Self {
        Self::with_hooks(scope, root_key, root_value, NoHooks)
    }
}

impl<K, V, H> TreeWithId<K, V, H>
where
    K: Eq + Hash + Clone,
    H: TreeHooks<V>,
{
    /// Creates a keyed tree with the given uniqueness scope and
    /// structural hooks.
    pub fn with_hooks(scope: IdScope, root_key: K, root_value: V, hooks: H) -> Self {
        let tree = Tree::with_hooks(root_value, hooks);
        let root = tree.root();

        let mut keys = HashMap::new();
        keys.insert(root, root_key.clone());

        let mut index = IndexMap::new();
        if scope == IdScope::Global {
            index.insert(root_key, root);
        }

        Self {
            tree,
            scope,
            keys,
            index,
        }
    }

    /// Returns the uniqueness scope this handle enforces.
    #[must_use]
    pub const fn scope(&self) -> IdScope {
        self.scope
    }

    /// Returns a reference to the item's key, or `None` if the item is
    /// not attached.
    #[must_use]
    pub fn key(&self, item: ItemId) -> Option<&K> {
        self.keys.get(&item)
    }

    /// Looks up an item anywhere in the tree by its key.
    ///
    /// Under [`IdScope::Global`] this is a hash lookup. Under
    /// [`IdScope::Siblings`] keys may repeat across parents, so the
    /// first match in depth-first pre-order is returned, at linear
    /// cost.
    #[must_use]
    pub fn get_item_with_id(&self, key: &K) -> Option<ItemId> {
        match self.scope {
            IdScope::Global => self.index.get(key).copied(),
            IdScope::Siblings => {
                let mut pending = vec![self.tree.root()];
                while let Some(current) = pending.pop() {
                    if self.keys.get(&current) == Some(key) {
                        return Some(current);
                    }
                    pending.extend(self.tree.children(current).iter().rev());
                }
                None
            }
        }
    }

    /// Looks up the direct child of `parent` carrying the given key.
    #[must_use]
    pub fn get_child_with_id(&self, parent: ItemId, key: &K) -> Option<ItemId> {
        self.tree
            .children(parent)
            .iter()
            .copied()
            .find(|child| self.keys.get(child) == Some(key))
    }

    /// Returns a mutable reference to the item's value, or `None` if
    /// the item is not attached.
    pub fn value_mut(&mut self, item: ItemId) -> Option<&mut V> {
        self.tree.value_mut(item)
    }

    /// Replaces the item's value, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if the item is not attached.
    pub fn set_value(&mut self, item: ItemId, value: V) -> Result<V, TreeError> {
        self.tree.set_value(item, value)
    }

    /// Returns a mutable reference to the structural hooks.
    pub const fn hooks_mut(&mut self) -> &mut H {
        self.tree.hooks_mut()
    }

    /// Creates a new keyed item, appended to the end of the parent's
    /// child sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached,
    /// and [`TreeError::DuplicateId`] if the key is already taken in
    /// the active uniqueness scope. On failure no item is created and
    /// the tree is unchanged.
    pub fn create_child(&mut self, parent: ItemId, key: K, value: V) -> Result<ItemId, TreeError> {
        if !self.tree.contains(parent) {
            return Err(TreeError::unknown_item(parent));
        }
        if self.is_key_taken(parent, &key) {
            return Err(TreeError::duplicate_id());
        }

        let item = self.tree.create_child(parent, value)?;
        self.keys.insert(item, key.clone());
        if self.scope == IdScope::Global {
            self.index.insert(key, item);
        }
        Ok(item)
    }

    /// Detaches `child` (and recursively its whole subtree) from
    /// `parent`, releasing every removed item's key from the
    /// uniqueness index.
    ///
    /// Returns [`Change::Unchanged`] if `child` is not a direct child
    /// of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached,
    /// and [`TreeError::CannotRemoveRoot`] if `child` is the root.
    pub fn remove_child(&mut self, parent: ItemId, child: ItemId) -> Result<Change, TreeError> {
        let removed = self.tree.remove_child_collect(parent, child)?;
        for item in &removed {
            if let Some(key) = self.keys.remove(item) {
                if self.scope == IdScope::Global {
                    self.index.shift_remove(&key);
                }
            }
        }
        Ok(Change::from_bool(!removed.is_empty()))
    }

    /// Detaches the item from its parent, removing its whole subtree
    /// and releasing all removed keys.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if the item is not attached,
    /// and [`TreeError::CannotRemoveRoot`] for the root.
    pub fn remove(&mut self, item: ItemId) -> Result<Change, TreeError> {
        if !self.tree.contains(item) {
            return Err(TreeError::unknown_item(item));
        }
        let Some(parent) = self.tree.parent(item) else {
            return Err(TreeError::cannot_remove_root());
        };
        self.remove_child(parent, item)
    }

    /// Re-sorts the parent's stored child sequence in place by
    /// comparing child values.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached.
    pub fn sort_children_by(
        &mut self,
        parent: ItemId,
        compare: impl FnMut(&V, &V) -> Ordering,
    ) -> Result<Change, TreeError> {
        self.tree.sort_children_by(parent, compare)
    }

    fn is_key_taken(&self, parent: ItemId, key: &K) -> bool {
        match self.scope {
            IdScope::Global => self.index.contains_key(key),
            IdScope::Siblings => self.get_child_with_id(parent, key).is_some(),
        }
    }
}

impl<K, V, H> TreeWithId<K, V, H>
where
    K: Eq + Hash + Clone + Ord,
    H: TreeHooks<V>,
{
    /// Re-sorts the parent's stored child sequence in place by key, in
    /// the given direction.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached.
    pub fn sort_children_by_key(
        &mut self,
        parent: ItemId,
        order: SortOrder,
    ) -> Result<Change, TreeError> {
        if !self.tree.contains(parent) {
            return Err(TreeError::unknown_item(parent));
        }

        let mut sorted: Vec<ItemId> = self.tree.children(parent).to_vec();
        sorted.sort_by(|a, b| order.apply(self.keys[a].cmp(&self.keys[b])));

        if sorted == self.tree.children(parent) {
            return Ok(Change::Unchanged);
        }
        self.tree.set_child_order(parent, sorted);
        Ok(Change::Changed)
    }
}

impl<K, V, H> Deref for TreeWithId<K, V, H> {
    type Target = Tree<V, H>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}
