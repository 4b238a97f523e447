//! Sibling ordering for Canopy trees.
//!
//! Comparators here define total orders over tree items for display or
//! deterministic traversal: by value with a caller-supplied comparison,
//! or by key where the key type is ordered. Every comparator carries an
//! explicit [`SortOrder`](canopy_shared::SortOrder) direction and an
//! [`AbsentOrder`](canopy_shared::AbsentOrder) policy so that items
//! whose value cannot be resolved are ordered consistently rather than
//! ad hoc.

mod compare;
mod item_order;

pub use compare::compare_optional;
pub use item_order::{KeyOrder, ValueOrder};
