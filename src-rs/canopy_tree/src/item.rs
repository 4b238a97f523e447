//! Opaque identifiers for tree items.

/// An opaque identifier for a single item within one tree handle.
///
/// Item ids are allocated by the owning [`Tree`](crate::Tree) and are
/// only meaningful to the handle that produced them. They are never
/// reused within a handle, so an id stays dangling (rather than aliasing
/// a new item) after its item is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value of this id.
    ///
    /// Useful for debug output; the value has no meaning outside the
    /// handle that allocated it.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}
