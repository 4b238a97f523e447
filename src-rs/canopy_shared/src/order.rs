//! Sort direction and absent-value placement flags.

use std::cmp::Ordering;

/// The direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first (default).
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ascending comparison result.
    ///
    /// For `Ascending` the ordering is returned unchanged; for
    /// `Descending` it is reversed.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Where absent values sort relative to present ones.
///
/// Comparators that may encounter items without a value use this policy
/// so that absent values are handled consistently instead of ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AbsentOrder {
    /// Absent values sort before all present values (default).
    #[default]
    First,
    /// Absent values sort after all present values.
    Last,
}
