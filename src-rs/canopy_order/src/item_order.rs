//! Comparators over tree items.

use std::cmp::Ordering;
use std::hash::Hash;

use canopy_shared::{AbsentOrder, SortOrder};
use canopy_tree::{ItemId, NoHooks, Tree, TreeHooks, TreeWithId};

use crate::compare::compare_optional;

/// Orders the items of a [`Tree`] by their values.
///
/// The value comparison is caller-supplied; direction and absent-value
/// policy are explicit. Items that do not resolve to a value (dangling
/// ids) are ordered by the absent policy instead of panicking.
///
/// # Example
///
/// ```rust
/// use canopy_order::ValueOrder;
/// use canopy_tree::Tree;
///
/// let mut tree = Tree::new(0);
/// let root = tree.root();
/// let b = tree.create_child(root, 2).unwrap();
/// let a = tree.create_child(root, 1).unwrap();
///
/// let order = ValueOrder::new(&tree, Ord::cmp);
/// let sorted = tree.sorted_children(root, |x, y| order.compare(x, y));
/// assert_eq!(sorted, vec![a, b]);
/// ```
#[derive(Debug, Clone)]
pub struct ValueOrder<'a, V, F, H = NoHooks> {
    tree: &'a Tree<V, H>,
    compare_values: F,
    direction: SortOrder,
    absent: AbsentOrder,
}

impl<'a, V, F, H> ValueOrder<'a, V, F, H>
where
    F: Fn(&V, &V) -> Ordering,
    H: TreeHooks<V>,
{
    /// Creates an ascending value order with the default absent policy.
    pub const fn new(tree: &'a Tree<V, H>, compare_values: F) -> Self {
        Self {
            tree,
            compare_values,
            direction: SortOrder::Ascending,
            absent: AbsentOrder::First,
        }
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: SortOrder) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the absent-value policy.
    #[must_use]
    pub const fn with_absent(mut self, absent: AbsentOrder) -> Self {
        self.absent = absent;
        self
    }

    /// Compares two items of the underlying tree.
    pub fn compare(&self, a: ItemId, b: ItemId) -> Ordering {
        let ordering = compare_optional(
            self.tree.value(a),
            self.tree.value(b),
            self.absent,
            &self.compare_values,
        );
        self.direction.apply(ordering)
    }
}

/// Orders the items of a [`TreeWithId`] by their keys.
///
/// Requires `K: Ord`; the natural key order is used, adjusted by the
/// configured direction and absent policy.
#[derive(Debug, Clone)]
pub struct KeyOrder<'a, K, V, H = NoHooks> {
    tree: &'a TreeWithId<K, V, H>,
    direction: SortOrder,
    absent: AbsentOrder,
}

impl<'a, K, V, H> KeyOrder<'a, K, V, H>
where
    K: Eq + Hash + Clone + Ord,
    H: TreeHooks<V>,
{
    /// Creates an ascending key order with the default absent policy.
    pub const fn new(tree: &'a TreeWithId<K, V, H>) -> Self {
        Self {
            tree,
            direction: SortOrder::Ascending,
            absent: AbsentOrder::First,
        }
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: SortOrder) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the absent-value policy.
    #[must_use]
    pub const fn with_absent(mut self, absent: AbsentOrder) -> Self {
        self.absent = absent;
        self
    }

    /// Compares two items of the underlying tree by key.
    pub fn compare(&self, a: ItemId, b: ItemId) -> Ordering {
        let ordering = compare_optional(self.tree.key(a), self.tree.key(b), self.absent, Ord::cmp);
        self.direction.apply(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_tree::{Change, IdScope};

    // Helper function to build a tree with shuffled numeric children
    fn build_numeric_tree() -> (Tree<i32>, ItemId, ItemId, ItemId) {
        let mut tree = Tree::new(0);
        let root = tree.root();
        let three = tree.create_child(root, 3).unwrap();
        let one = tree.create_child(root, 1).unwrap();
        let two = tree.create_child(root, 2).unwrap();
        (tree, three, one, two)
    }

    #[test]
    fn value_order_sorts_ascending_by_default() {
        let (tree, three, one, two) = build_numeric_tree();
        let order = ValueOrder::new(&tree, Ord::cmp);
        let sorted = tree.sorted_children(tree.root(), |a, b| order.compare(a, b));
        assert_eq!(sorted, vec![one, two, three]);
    }

    #[test]
    fn value_order_respects_direction() {
        let (tree, three, one, two) = build_numeric_tree();
        let order = ValueOrder::new(&tree, Ord::cmp).with_direction(SortOrder::Descending);
        let sorted = tree.sorted_children(tree.root(), |a, b| order.compare(a, b));
        assert_eq!(sorted, vec![three, two, one]);
    }

    #[test]
    fn dangling_items_follow_the_absent_policy() {
        let (mut tree, three, _one, _two) = build_numeric_tree();
        tree.remove(three).unwrap();
        let attached = tree.children(tree.root())[0];

        let first = ValueOrder::new(&tree, Ord::cmp);
        assert_eq!(first.compare(three, attached), Ordering::Less);

        let last = ValueOrder::new(&tree, Ord::cmp).with_absent(AbsentOrder::Last);
        assert_eq!(last.compare(three, attached), Ordering::Greater);
    }

    #[test]
    fn key_order_sorts_by_natural_key_order() {
        let mut tree = TreeWithId::new(IdScope::Global, "root", 0);
        let root = tree.root();
        let c = tree.create_child(root, "c", 0).unwrap();
        let a = tree.create_child(root, "a", 0).unwrap();
        let b = tree.create_child(root, "b", 0).unwrap();

        let order = KeyOrder::new(&tree);
        let sorted = tree.sorted_children(root, |x, y| order.compare(x, y));
        assert_eq!(sorted, vec![a, b, c]);

        let reversed = KeyOrder::new(&tree).with_direction(SortOrder::Descending);
        let sorted = tree.sorted_children(root, |x, y| reversed.compare(x, y));
        assert_eq!(sorted, vec![c, b, a]);
    }

    #[test]
    fn sorted_copy_leaves_stored_order_alone_until_inline_sort() {
        let (mut tree, three, one, two) = build_numeric_tree();
        let root = tree.root();

        {
            let order = ValueOrder::new(&tree, Ord::cmp);
            let _sorted = tree.sorted_children(root, |a, b| order.compare(a, b));
        }
        assert_eq!(tree.children(root), &[three, one, two]);

        assert_eq!(tree.sort_children_by(root, Ord::cmp), Ok(Change::Changed));
        assert_eq!(tree.children(root), &[one, two, three]);
    }
}
