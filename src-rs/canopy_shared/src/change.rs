//! Result type for mutations where "nothing to do" is a normal outcome.

/// Indicates whether a mutating operation actually changed anything.
///
/// Operations like "remove this child" can legitimately find nothing to
/// remove. That is not an error, so instead of failing they report
/// `Change::Unchanged` and leave the structure as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The operation modified the structure.
    Changed,
    /// The operation found nothing to do.
    Unchanged,
}

impl Change {
    /// Creates a change value from a boolean, where `true` means changed.
    #[must_use]
    pub const fn from_bool(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Unchanged }
    }

    /// Returns `true` if the operation modified the structure.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }

    /// Returns `true` if the operation found nothing to do.
    #[must_use]
    pub const fn is_unchanged(self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Combines two change results, reporting changed if either changed.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        if self.is_changed() || other.is_changed() {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool_maps_both_values() {
        assert_eq!(Change::from_bool(true), Change::Changed);
        assert_eq!(Change::from_bool(false), Change::Unchanged);
    }

    #[test]
    fn predicates_are_exclusive() {
        assert!(Change::Changed.is_changed());
        assert!(!Change::Changed.is_unchanged());
        assert!(Change::Unchanged.is_unchanged());
        assert!(!Change::Unchanged.is_changed());
    }

    #[test]
    fn or_reports_changed_if_either_changed() {
        assert_eq!(Change::Changed.or(Change::Unchanged), Change::Changed);
        assert_eq!(Change::Unchanged.or(Change::Changed), Change::Changed);
        assert_eq!(Change::Unchanged.or(Change::Unchanged), Change::Unchanged);
    }
}
