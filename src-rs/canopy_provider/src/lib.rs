//! Children/parent resolution for arbitrary hierarchies.
//!
//! Generic algorithms (the walker, ordering code) do not care how a
//! hierarchy is represented. These traits describe the one thing they
//! need ("give me the children of this item") so that the same
//! algorithms run over [`canopy_tree`] handles and over foreign shapes
//! alike.
//!
//! Adapters for both are provided: [`TreeItemProvider`] /
//! [`TreeItemWithIdProvider`] for the native handles, and
//! [`NestedItemProvider`] for a plain recursive value tree
//! ([`NestedItem`]).

mod nested;
mod traits;
mod tree;

pub use nested::{NestedItem, NestedItemProvider};
pub use traits::{ChildrenProvider, ChildrenWithIdProvider, ParentProvider};
pub use tree::{TreeItemProvider, TreeItemWithIdProvider};
