//! Shared value types used across the Canopy crates.
//!
//! This crate holds the small leaf enums that the tree, ordering, and
//! traversal crates all agree on: the direction of a sort, the placement
//! of absent values within a sort, and the "did anything happen" result
//! of a mutation.

mod change;
mod order;

pub use change::Change;
pub use order::{AbsentOrder, SortOrder};
