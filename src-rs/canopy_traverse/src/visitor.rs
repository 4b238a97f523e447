//! Visitor contracts for traversal.

use crate::flow::TraversalFlow;
use crate::walker::Walker;

/// Trait for receiving traversal events with flow control.
///
/// The walker calls [`TreeVisitor::enter`] before an item's children
/// are visited and [`TreeVisitor::leave`] after, exactly once each per
/// visited item and in that relative order. The returned
/// [`TraversalFlow`] steers the traversal.
///
/// Lifecycle hooks bracket the whole call: `begin` once before the
/// first item, `end` once after the last; `end` also runs when the
/// traversal is cut short by [`TraversalFlow::Stop`]. `on_level_down` /
/// `on_level_up` bracket each descent into a non-empty child sequence.
/// All lifecycle hooks default to no-ops.
pub trait TreeVisitor<T> {
    /// Called once before traversal starts.
    fn begin(&mut self) {}

    /// Called once after traversal completes, even on early stop.
    fn end(&mut self) {}

    /// Called when the walker descends into an item's children.
    fn on_level_down(&mut self) {}

    /// Called when the walker returns from an item's children.
    fn on_level_up(&mut self) {}

    /// Called before the item's children are visited.
    ///
    /// The walker argument exposes the current nesting level.
    fn enter(&mut self, walker: &Walker, item: &T) -> TraversalFlow;

    /// Called after the item's children are visited (or skipped).
    ///
    /// Defaults to [`TraversalFlow::Continue`].
    fn leave(&mut self, walker: &Walker, item: &T) -> TraversalFlow {
        let _ = (walker, item);
        TraversalFlow::Continue
    }
}

/// Trait for receiving traversal events without flow control.
///
/// The static counterpart of [`TreeVisitor`]: hooks return nothing and
/// the traversal always runs to completion. Adapt an implementation to
/// the dynamic contract with [`AlwaysContinue`].
pub trait ItemCallback<T> {
    /// Called before the item's children are visited.
    fn on_enter(&mut self, walker: &Walker, item: &T);

    /// Called after the item's children are visited.
    fn on_leave(&mut self, walker: &Walker, item: &T) {
        let _ = (walker, item);
    }
}

/// Adapts an [`ItemCallback`] to the [`TreeVisitor`] contract by
/// answering [`TraversalFlow::Continue`] from every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysContinue<C> {
    callback: C,
}

impl<C> AlwaysContinue<C> {
    /// Wraps the given callback.
    pub const fn new(callback: C) -> Self {
        Self { callback }
    }

    /// Returns the wrapped callback.
    pub fn into_inner(self) -> C {
        self.callback
    }

    /// Returns a reference to the wrapped callback.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.callback
    }
}

impl<T, C> TreeVisitor<T> for AlwaysContinue<C>
where
    C: ItemCallback<T>,
{
    fn enter(&mut self, walker: &Walker, item: &T) -> TraversalFlow {
        self.callback.on_enter(walker, item);
        TraversalFlow::Continue
    }

    fn leave(&mut self, walker: &Walker, item: &T) -> TraversalFlow {
        self.callback.on_leave(walker, item);
        TraversalFlow::Continue
    }
}
