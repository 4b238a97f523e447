#![no_main]

use canopy_tree::{IdScope, ItemId, TreeWithId};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct FuzzData {
    // (parent pick, key) pairs used to grow the tree
    creations: Vec<(u8, u16)>,
    victim: u8,
}

const ROOT_KEY: u16 = u16::MAX;

fuzz_target!(|data: FuzzData| {
    let mut tree = TreeWithId::new(IdScope::Global, ROOT_KEY, ());
    let mut minted: Vec<ItemId> = vec![tree.root()];

    for &(parent, key) in &data.creations {
        let parent = minted[parent as usize % minted.len()];
        if let Ok(item) = tree.create_child(parent, key, ()) {
            minted.push(item);
        }
    }

    let victim = minted[data.victim as usize % minted.len()];
    if victim == tree.root() {
        return;
    }
    if !tree.contains(victim) {
        return;
    }

    // collect the keys of the whole victim subtree before removing it
    let mut subtree_keys = Vec::new();
    let mut pending = vec![victim];
    while let Some(current) = pending.pop() {
        subtree_keys.push(*tree.key(current).expect("attached item has a key"));
        pending.extend(tree.children(current));
    }
    let removed_count = subtree_keys.len();
    let count_before = tree.item_count();

    tree.remove(victim).expect("victim is attached and not the root");

    // every removed key must be released from the index, and the
    // node table must shrink by exactly the subtree size
    assert_eq!(tree.item_count(), count_before - removed_count);
    for key in &subtree_keys {
        assert_eq!(tree.get_item_with_id(key), None);
    }

    // released keys are immediately reusable
    let root = tree.root();
    for key in subtree_keys {
        tree.create_child(root, key, ())
            .expect("released key is reusable");
    }
});
