//! A plain recursive value tree and its provider adapter.
//!
//! [`NestedItem`] is the simplest possible hierarchy: a value plus
//! directly owned children, with no handle, no ids, and no parent
//! links. It exists to show (and test) that the provider contract is
//! enough for generic algorithms to run over shapes that were not
//! built from [`canopy_tree`] items.

use crate::traits::ChildrenProvider;

/// One item of a plain nested value tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedItem<V> {
    value: V,
    children: Vec<NestedItem<V>>,
}

impl<V> NestedItem<V> {
    /// Creates a leaf item with the given value.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Appends a child item, builder style.
    #[must_use]
    pub fn child(mut self, item: Self) -> Self {
        self.children.push(item);
        self
    }

    /// Returns the item's value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns the item's children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Provider adapter over [`NestedItem`] references.
///
/// Items are `&NestedItem<V>`. Nested items record no parent link, so
/// this provider resolves children only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedItemProvider;

impl<'a, V> ChildrenProvider<&'a NestedItem<V>> for NestedItemProvider {
    fn children(&self, item: &&'a NestedItem<V>) -> Vec<&'a NestedItem<V>> {
        item.children().iter().collect()
    }
}
