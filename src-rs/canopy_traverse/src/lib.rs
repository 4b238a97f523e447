//! Depth-first traversal for Canopy hierarchies.
//!
//! The walker visits a hierarchy in pre/post-order through a
//! [`ChildrenProvider`](canopy_provider::ChildrenProvider), invoking a
//! caller-supplied [`TreeVisitor`] before and after each item's
//! children. The visitor's hooks steer the traversal by returning a
//! [`TraversalFlow`] directive: continue, skip a subtree, skip the rest
//! of the siblings, or stop the whole traversal.
//!
//! Depth bookkeeping lives in a per-call [`Walker`] session handed to
//! every hook; there is no shared traversal state between calls.
//!
//! Beyond the walker, [`ancestor_path`] and [`resolve_path`] resolve
//! upward and keyed paths through the corresponding provider traits.

mod flow;
mod resolve;
mod visitor;
mod walker;

pub use flow::TraversalFlow;
pub use resolve::{ancestor_path, resolve_path};
pub use visitor::{AlwaysContinue, ItemCallback, TreeVisitor};
pub use walker::{
    Walker, walk, walk_from_level, walk_sorted, walk_sorted_from_level, walk_tree,
    walk_tree_sorted, walk_tree_with_id,
};
