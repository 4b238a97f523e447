#![no_main]

use canopy_tree::{IdScope, ItemId, TreeError, TreeWithId};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Op {
    CreateChild { parent: u8, key: u16 },
    RemoveChild { parent: u8, child: u8 },
    Remove { item: u8 },
    SortByKey { parent: u8 },
}

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzData {
    scope: IdScope,
    ops: Vec<Op>,
}

const ROOT_KEY: u16 = 0;

fn pick(minted: &[ItemId], byte: u8) -> ItemId {
    minted[byte as usize % minted.len()]
}

fn check_invariants(tree: &TreeWithId<u16, ()>) {
    let total = tree.item_count();

    for item in tree.items() {
        // parent chain reaches the root in fewer steps than there are items
        let depth = tree.depth(item).expect("attached item has a depth");
        assert!(depth < total, "parent chain of {item} does not terminate");

        // children point back at their parent
        for &child in tree.children(item) {
            assert_eq!(tree.parent(child), Some(item));
        }

        let key = tree.key(item).expect("attached item has a key");
        match tree.scope() {
            IdScope::Global => {
                // the index is a bijection over attached items
                assert_eq!(tree.get_item_with_id(key), Some(item));
            }
            IdScope::Siblings => {
                if let Some(parent) = tree.parent(item) {
                    let same_key = tree
                        .children(parent)
                        .iter()
                        .filter(|&&sibling| tree.key(sibling) == Some(key))
                        .count();
                    assert_eq!(same_key, 1, "siblings of {item} share key {key}");
                }
            }
        }
    }

    // every attached item is reachable from the root
    let mut reachable = 0;
    let mut pending = vec![tree.root()];
    while let Some(current) = pending.pop() {
        reachable += 1;
        pending.extend(tree.children(current));
    }
    assert_eq!(reachable, total);
}

fuzz_target!(|data: FuzzData| {
    let mut tree = TreeWithId::new(data.scope, ROOT_KEY, ());
    let mut minted: Vec<ItemId> = vec![tree.root()];

    for op in &data.ops {
        match *op {
            Op::CreateChild { parent, key } => {
                let parent = pick(&minted, parent);
                let count_before = tree.item_count();
                match tree.create_child(parent, key, ()) {
                    Ok(item) => minted.push(item),
                    Err(TreeError::DuplicateId) | Err(TreeError::UnknownItem(_)) => {
                        // failed creation must leave the tree unchanged
                        assert_eq!(tree.item_count(), count_before);
                    }
                    Err(error) => panic!("unexpected error from create_child: {error}"),
                }
            }
            Op::RemoveChild { parent, child } => {
                let parent = pick(&minted, parent);
                let child = pick(&minted, child);
                match tree.remove_child(parent, child) {
                    Ok(_)
                    | Err(TreeError::UnknownItem(_))
                    | Err(TreeError::CannotRemoveRoot) => {}
                    Err(error) => panic!("unexpected error from remove_child: {error}"),
                }
            }
            Op::Remove { item } => {
                let item = pick(&minted, item);
                match tree.remove(item) {
                    Ok(_)
                    | Err(TreeError::UnknownItem(_))
                    | Err(TreeError::CannotRemoveRoot) => {}
                    Err(error) => panic!("unexpected error from remove: {error}"),
                }
            }
            Op::SortByKey { parent } => {
                let parent = pick(&minted, parent);
                let _ = tree.sort_children_by_key(parent, canopy_tree::SortOrder::Ascending);
            }
        }

        check_invariants(&tree);
    }
});
