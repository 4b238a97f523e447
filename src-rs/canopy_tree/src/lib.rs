//! Core hierarchical tree model for Canopy.
//!
//! A tree is an owning handle over a set of nodes: the handle stores the
//! nodes, hands out opaque [`ItemId`]s for them, and mediates every
//! structural change. Two handle types are provided:
//!
//! - [`Tree`]: nodes carry a value; sibling order is insertion order.
//! - [`TreeWithId`]: nodes additionally carry a key, and the handle
//!   enforces key uniqueness under a scope fixed at construction
//!   ([`IdScope::Global`] or [`IdScope::Siblings`]).
//!
//! Structural hooks ([`TreeHooks`]) fire exactly once per created and
//! removed node, including every descendant of a removed subtree.
//!
//! A handle is not safe for concurrent mutation; mutation requires
//! exclusive access (`&mut`), which callers needing shared ownership must
//! serialize externally.

mod error;
mod hooks;
mod item;
mod node;
mod tree;
mod tree_with_id;

pub use canopy_shared::{Change, SortOrder};
pub use error::TreeError;
pub use hooks::{NoHooks, TreeHooks};
pub use item::ItemId;
pub use tree::Tree;
pub use tree_with_id::{IdScope, TreeWithId};
