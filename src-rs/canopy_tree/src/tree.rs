//! The owning tree handle.

use std::cmp::Ordering;
use std::collections::HashMap;

use canopy_shared::Change;

use crate::error::TreeError;
use crate::hooks::{NoHooks, TreeHooks};
use crate::item::ItemId;
use crate::node::Node;

/// An owning handle over one tree of valued items.
///
/// The handle stores every node, allocates [`ItemId`]s for them, and
/// mediates all structural changes. A handle always has exactly one
/// root; independent trees are independent handles.
///
/// Sibling order is insertion order: [`Tree::create_child`] appends to
/// the end of the parent's child sequence, and the order only changes
/// when a caller explicitly re-sorts via [`Tree::sort_children_by`].
///
/// # Example
///
/// ```rust
/// use canopy_tree::Tree;
///
/// let mut tree = Tree::new("root");
/// let root = tree.root();
/// let child = tree.create_child(root, "child").unwrap();
///
/// assert_eq!(tree.parent(child), Some(root));
/// assert_eq!(tree.children(root), &[child]);
/// ```
#[derive(Debug, Clone)]
pub struct Tree<V, H = NoHooks> {
    nodes: HashMap<ItemId, Node<V>>,
    root: ItemId,
    next_id: u64,
    hooks: H,
}

impl<V> Tree<V, NoHooks> {
    /// Creates a tree consisting of a single root item with the given
    /// value.
    #[must_use]
    pub fn new(root_value: V) -> Self {
        Self::with_hooks(root_value, NoHooks)
    }
}

impl<V, H> Tree<V, H>
where
    H: TreeHooks<V>,
{
    /// Creates a tree with the given root value and structural hooks.
    ///
    /// The hooks' `on_add_item` fires for the root as well, so every
    /// item the handle ever holds is announced exactly once.
    pub fn with_hooks(root_value: V, mut hooks: H) -> Self {
        let root = ItemId::new(0);
        hooks.on_add_item(root, &root_value);

        let mut nodes = HashMap::new();
        nodes.insert(root, Node::new(root_value, None));
        Self {
            nodes,
            root,
            next_id: 1,
            hooks,
        }
    }

    /// Returns the id of the root item.
    #[must_use]
    pub const fn root(&self) -> ItemId {
        self.root
    }

    /// Returns `true` if the item is currently attached to this handle.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.nodes.contains_key(&item)
    }

    /// Returns the number of items attached to this handle, including
    /// the root.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of items attached to this handle. Alias of
    /// [`Tree::item_count`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_count()
    }

    /// Returns `true` if the handle holds no items.
    ///
    /// Always `false` in practice; a handle owns at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the item's value, or `None` if the item
    /// is not attached.
    #[must_use]
    pub fn value(&self, item: ItemId) -> Option<&V> {
        self.nodes.get(&item).map(|node| &node.value)
    }

    /// Returns a mutable reference to the item's value, or `None` if
    /// the item is not attached.
    pub fn value_mut(&mut self, item: ItemId) -> Option<&mut V> {
        self.nodes.get_mut(&item).map(|node| &mut node.value)
    }

    /// Replaces the item's value, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if the item is not attached.
    pub fn set_value(&mut self, item: ItemId, value: V) -> Result<V, TreeError> {
        match self.nodes.get_mut(&item) {
            Some(node) => Ok(std::mem::replace(&mut node.value, value)),
            None => Err(TreeError::unknown_item(item)),
        }
    }

    /// Returns the parent of the item.
    ///
    /// Returns `None` for the root and for items that are not attached;
    /// use [`Tree::contains`] to distinguish the two.
    #[must_use]
    pub fn parent(&self, item: ItemId) -> Option<ItemId> {
        self.nodes.get(&item).and_then(|node| node.parent)
    }

    /// Returns the ordered direct children of the item.
    ///
    /// The slice is empty for leaves and for items that are not
    /// attached; it is never "null".
    #[must_use]
    pub fn children(&self, item: ItemId) -> &[ItemId] {
        self.nodes
            .get(&item)
            .map_or(&[], |node| node.children.as_slice())
    }

    /// Returns `true` if the item has at least one child.
    #[must_use]
    pub fn has_children(&self, item: ItemId) -> bool {
        !self.children(item).is_empty()
    }

    /// Returns the number of direct children of the item.
    #[must_use]
    pub fn child_count(&self, item: ItemId) -> usize {
        self.children(item).len()
    }

    /// Returns the depth of the item: the number of parent hops to the
    /// root. The root has depth 0.
    ///
    /// Returns `None` if the item is not attached.
    #[must_use]
    pub fn depth(&self, item: ItemId) -> Option<usize> {
        let mut node = self.nodes.get(&item)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = self.nodes.get(&parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Returns an iterator over the ids of all attached items, in no
    /// particular order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.nodes.keys().copied()
    }

    /// Returns a reference to the structural hooks.
    #[must_use]
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns a mutable reference to the structural hooks.
    pub const fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Creates a new item with the given value, appended to the end of
    /// the parent's child sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached
    /// to this handle.
    pub fn create_child(&mut self, parent: ItemId, value: V) -> Result<ItemId, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::unknown_item(parent));
        }

        let item = self.allocate_id();
        self.nodes.insert(item, Node::new(value, Some(parent)));
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(item);
        }

        if let Some(node) = self.nodes.get(&item) {
            self.hooks.on_add_item(item, &node.value);
        }
        Ok(item)
    }

    /// Detaches `child` (and recursively its whole subtree) from
    /// `parent`'s child sequence.
    ///
    /// Returns [`Change::Unchanged`] if `child` is not a direct child
    /// of `parent`; nothing to remove is a normal outcome, not an
    /// error. On removal, `on_remove_item` fires once for the detached
    /// item and once for each of its descendants.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached,
    /// and [`TreeError::CannotRemoveRoot`] if `child` is the root.
    pub fn remove_child(&mut self, parent: ItemId, child: ItemId) -> Result<Change, TreeError> {
        self.remove_child_collect(parent, child)
            .map(|removed| Change::from_bool(!removed.is_empty()))
    }

    /// Detaches the item from its parent, removing its whole subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if the item is not attached,
    /// and [`TreeError::CannotRemoveRoot`] for the root.
    pub fn remove(&mut self, item: ItemId) -> Result<Change, TreeError> {
        let Some(node) = self.nodes.get(&item) else {
            return Err(TreeError::unknown_item(item));
        };
        let Some(parent) = node.parent else {
            return Err(TreeError::cannot_remove_root());
        };
        self.remove_child(parent, item)
    }

    /// Returns a sorted copy of the parent's child sequence, ordered by
    /// the given comparator. The stored order is untouched.
    ///
    /// Returns an empty vec if the parent is not attached.
    #[must_use]
    pub fn sorted_children(
        &self,
        parent: ItemId,
        mut compare: impl FnMut(ItemId, ItemId) -> Ordering,
    ) -> Vec<ItemId> {
        let mut order: Vec<ItemId> = self.children(parent).to_vec();
        order.sort_by(|&a, &b| compare(a, b));
        order
    }

    /// Re-sorts the parent's stored child sequence in place by
    /// comparing child values. Subsequent traversals see the new order.
    ///
    /// The sort is stable, so equal values keep their insertion order.
    /// Returns [`Change::Unchanged`] when the sequence was already in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownItem`] if `parent` is not attached.
    pub fn sort_children_by(
        &mut self,
        parent: ItemId,
        mut compare: impl FnMut(&V, &V) -> Ordering,
    ) -> Result<Change, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::unknown_item(parent));
        }

        let mut order: Vec<ItemId> = self.children(parent).to_vec();
        order.sort_by(|a, b| compare(&self.nodes[a].value, &self.nodes[b].value));

        let changed = order != self.children(parent);
        if changed {
            if let Some(parent_node) = self.nodes.get_mut(&parent) {
                parent_node.children = order;
            }
        }
        Ok(Change::from_bool(changed))
    }

    /// Replaces the parent's stored child sequence. The caller must
    /// pass a permutation of the current sequence.
    pub(crate) fn set_child_order(&mut self, parent: ItemId, order: Vec<ItemId>) {
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            debug_assert_eq!(order.len(), parent_node.children.len());
            parent_node.children = order;
        }
    }

    /// Removes the subtree rooted at `child` and returns the removed
    /// ids in pre-order (the detached item first). An empty vec means
    /// there was nothing to remove.
    pub(crate) fn remove_child_collect(
        &mut self,
        parent: ItemId,
        child: ItemId,
    ) -> Result<Vec<ItemId>, TreeError> {
        if !self.nodes.contains_key(&parent) {
            return Err(TreeError::unknown_item(parent));
        }
        if child == self.root {
            return Err(TreeError::cannot_remove_root());
        }

        let child_position = self
            .children(parent)
            .iter()
            .position(|&existing| existing == child);
        let Some(child_position) = child_position else {
            return Ok(Vec::new());
        };

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.remove(child_position);
        }

        let removed = self.collect_subtree(child);
        for &item in &removed {
            if let Some(node) = self.nodes.remove(&item) {
                self.hooks.on_remove_item(item, &node.value);
            }
        }
        Ok(removed)
    }

    /// Collects the ids of the subtree rooted at `item` in pre-order.
    fn collect_subtree(&self, item: ItemId) -> Vec<ItemId> {
        let mut collected = Vec::new();
        let mut pending = vec![item];
        while let Some(current) = pending.pop() {
            collected.push(current);
            // reversed so the stack pops children in stored order
            pending.extend(self.children(current).iter().rev());
        }
        collected
    }

    const fn allocate_id(&mut self) -> ItemId {
        let item = ItemId::new(self.next_id);
        self.next_id += 1;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper hooks that record every add/remove notification
    #[derive(Debug, Default)]
    struct RecordingHooks {
        added: Vec<ItemId>,
        removed: Vec<ItemId>,
    }

    impl<V> TreeHooks<V> for RecordingHooks {
        fn on_add_item(&mut self, item: ItemId, _value: &V) {
            self.added.push(item);
        }

        fn on_remove_item(&mut self, item: ItemId, _value: &V) {
            self.removed.push(item);
        }
    }

    // Helper function to build root -> {a, b}, a -> {a1}
    fn build_small_tree() -> (Tree<&'static str>, ItemId, ItemId, ItemId) {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let a = tree.create_child(root, "a").unwrap();
        let b = tree.create_child(root, "b").unwrap();
        let a1 = tree.create_child(a, "a1").unwrap();
        (tree, a, b, a1)
    }

    #[test]
    fn root_has_no_parent_and_depth_zero() {
        let tree = Tree::new(1);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.depth(tree.root()), Some(0));
        assert_eq!(tree.item_count(), 1);
    }

    #[test]
    fn children_preserve_insertion_order() {
        let (tree, a, b, _a1) = build_small_tree();
        assert_eq!(tree.children(tree.root()), &[a, b]);
        assert!(tree.has_children(a));
        assert!(!tree.has_children(b));
        assert_eq!(tree.child_count(tree.root()), 2);
    }

    #[test]
    fn parent_chain_reaches_root_at_depth_steps() {
        let (tree, a, _b, a1) = build_small_tree();
        assert_eq!(tree.depth(a1), Some(2));
        assert_eq!(tree.parent(a1), Some(a));
        assert_eq!(tree.parent(a), Some(tree.root()));
    }

    #[test]
    fn create_child_under_unknown_parent_fails() {
        let mut tree = Tree::new("root");
        let a = tree.create_child(tree.root(), "a").unwrap();
        tree.remove(a).unwrap();

        assert_eq!(
            tree.create_child(a, "orphan"),
            Err(TreeError::UnknownItem(a))
        );
        assert_eq!(tree.item_count(), 1);
    }

    #[test]
    fn value_access_and_mutation() {
        let (mut tree, a, _b, _a1) = build_small_tree();
        assert_eq!(tree.value(a), Some(&"a"));
        if let Some(value) = tree.value_mut(a) {
            *value = "renamed";
        }
        assert_eq!(tree.value(a), Some(&"renamed"));
        assert_eq!(tree.value(ItemId::new(42)), None);
    }

    #[test]
    fn set_value_replaces_and_returns_the_previous_value() {
        let (mut tree, a, _b, _a1) = build_small_tree();
        assert_eq!(tree.set_value(a, "renamed"), Ok("a"));
        assert_eq!(tree.value(a), Some(&"renamed"));

        let dangling = ItemId::new(42);
        assert_eq!(
            tree.set_value(dangling, "x"),
            Err(TreeError::UnknownItem(dangling))
        );
        assert_eq!(tree.len(), 4);
        assert!(!tree.is_empty());
    }

    #[test]
    fn remove_child_detaches_whole_subtree() {
        let (mut tree, a, b, a1) = build_small_tree();
        let root = tree.root();

        assert_eq!(tree.remove_child(root, a), Ok(Change::Changed));
        assert!(!tree.contains(a));
        assert!(!tree.contains(a1));
        assert!(tree.contains(b));
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.item_count(), 2);
    }

    #[test]
    fn remove_missing_child_is_unchanged_not_error() {
        let (mut tree, _a, b, a1) = build_small_tree();
        // a1 is a grandchild of root, not a direct child
        assert_eq!(tree.remove_child(tree.root(), a1), Ok(Change::Unchanged));
        assert_eq!(tree.remove_child(b, a1), Ok(Change::Unchanged));
        assert_eq!(tree.item_count(), 4);
    }

    #[test]
    fn remove_root_is_rejected() {
        let (mut tree, _a, _b, _a1) = build_small_tree();
        let root = tree.root();
        assert_eq!(tree.remove(root), Err(TreeError::CannotRemoveRoot));
        assert_eq!(tree.remove_child(root, root), Err(TreeError::CannotRemoveRoot));
    }

    #[test]
    fn remove_by_item_uses_its_parent() {
        let (mut tree, a, _b, a1) = build_small_tree();
        assert_eq!(tree.remove(a1), Ok(Change::Changed));
        assert_eq!(tree.children(a), &[]);
        assert_eq!(tree.remove(a1), Err(TreeError::UnknownItem(a1)));
    }

    #[test]
    fn hooks_fire_once_per_item_including_descendants() {
        let mut tree = Tree::with_hooks("root", RecordingHooks::default());
        let root = tree.root();
        let a = tree.create_child(root, "a").unwrap();
        let a1 = tree.create_child(a, "a1").unwrap();
        let a2 = tree.create_child(a, "a2").unwrap();

        assert_eq!(tree.hooks().added, vec![root, a, a1, a2]);

        tree.remove_child(root, a).unwrap();
        // removal fans out over the whole subtree, detached item first
        assert_eq!(tree.hooks().removed, vec![a, a1, a2]);
    }

    #[test]
    fn removed_ids_stay_dangling() {
        let (mut tree, a, _b, a1) = build_small_tree();
        tree.remove(a).unwrap();
        let fresh = tree.create_child(tree.root(), "fresh").unwrap();
        assert_ne!(fresh, a);
        assert_ne!(fresh, a1);
        assert_eq!(tree.value(a), None);
    }

    #[test]
    fn sorted_children_returns_copy_without_mutating() {
        let mut tree = Tree::new(0);
        let root = tree.root();
        let three = tree.create_child(root, 3).unwrap();
        let one = tree.create_child(root, 1).unwrap();
        let two = tree.create_child(root, 2).unwrap();

        let sorted = tree.sorted_children(root, |a, b| {
            tree.value(a).cmp(&tree.value(b))
        });
        assert_eq!(sorted, vec![one, two, three]);
        // stored order untouched
        assert_eq!(tree.children(root), &[three, one, two]);
    }

    #[test]
    fn sort_children_by_mutates_stored_order() {
        let mut tree = Tree::new(0);
        let root = tree.root();
        let three = tree.create_child(root, 3).unwrap();
        let one = tree.create_child(root, 1).unwrap();
        let two = tree.create_child(root, 2).unwrap();

        assert_eq!(
            tree.sort_children_by(root, |a, b| a.cmp(b)),
            Ok(Change::Changed)
        );
        assert_eq!(tree.children(root), &[one, two, three]);

        // already sorted: nothing to do
        assert_eq!(
            tree.sort_children_by(root, |a, b| a.cmp(b)),
            Ok(Change::Unchanged)
        );
    }
}
