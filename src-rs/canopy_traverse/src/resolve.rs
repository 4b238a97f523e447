//! Upward and keyed path resolution over providers.

use std::hash::Hash;

use canopy_provider::{ChildrenWithIdProvider, ParentProvider};

/// Returns the chain of items from `item` up to its hierarchy's root,
/// starting with `item` itself.
///
/// For a root item the path contains just that item. The provider's
/// parent resolution must be acyclic; a cyclic provider makes this loop
/// forever.
#[must_use]
pub fn ancestor_path<T, P>(provider: &P, item: T) -> Vec<T>
where
    P: ParentProvider<T>,
{
    let mut path = Vec::new();
    let mut current = Some(item);
    while let Some(item) = current {
        current = provider.parent(&item);
        path.push(item);
    }
    path
}

/// Resolves a chain of keys downward from `start`, one keyed child per
/// step.
///
/// An empty key slice resolves to `start` itself. Returns `None` as
/// soon as one step has no child with the requested key.
#[must_use]
pub fn resolve_path<T, K, P>(provider: &P, start: T, keys: &[K]) -> Option<T>
where
    K: Eq + Hash,
    P: ChildrenWithIdProvider<T, K>,
{
    let mut current = start;
    for key in keys {
        current = provider.child_with_id(&current, key)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_provider::{TreeItemProvider, TreeItemWithIdProvider};
    use canopy_tree::{IdScope, Tree, TreeWithId};

    #[test]
    fn ancestor_path_walks_up_to_the_root() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let a = tree.create_child(root, "a").unwrap();
        let a1 = tree.create_child(a, "a1").unwrap();

        let provider = TreeItemProvider::new(&tree);
        assert_eq!(ancestor_path(&provider, a1), vec![a1, a, root]);
        assert_eq!(ancestor_path(&provider, root), vec![root]);
    }

    #[test]
    fn resolve_path_follows_keys_stepwise() {
        let mut tree = TreeWithId::new(IdScope::Global, "root", 0);
        let root = tree.root();
        let docs = tree.create_child(root, "docs", 1).unwrap();
        let guide = tree.create_child(docs, "guide", 2).unwrap();

        let provider = TreeItemWithIdProvider::new(&tree);
        assert_eq!(resolve_path(&provider, root, &["docs", "guide"]), Some(guide));
        assert_eq!(resolve_path(&provider, root, &[]), Some(root));
        assert_eq!(resolve_path(&provider, root, &["docs", "missing"]), None);
        assert_eq!(resolve_path(&provider, root, &["guide"]), None);
    }
}
