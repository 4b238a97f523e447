//! Traversal flow directives.

/// Directive returned by visitor hooks to steer the traversal.
///
/// From the *enter* hook every variant is meaningful. From the *leave*
/// hook the item's children have already been visited, so
/// [`TraversalFlow::SkipChildren`] behaves like
/// [`TraversalFlow::Continue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub enum TraversalFlow {
    /// Descend into the item's children (enter) or move on to the next
    /// sibling (leave). The normal path.
    #[default]
    Continue,
    /// Skip this item's children entirely and proceed to its next
    /// sibling. The item's leave hook still fires.
    SkipChildren,
    /// Abandon the rest of this item's siblings as well; proceed to
    /// the parent's next sibling. The item's leave hook still fires.
    SkipSiblings,
    /// Terminate the entire traversal immediately. No further enter or
    /// leave hooks are invoked; the visitor's `end` hook still runs.
    Stop,
}

impl TraversalFlow {
    /// Returns `true` for the directive that terminates the traversal.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}
