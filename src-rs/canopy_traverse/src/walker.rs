//! The depth-first traversal engine.

use std::cmp::Ordering;
use std::hash::Hash;

use canopy_provider::{ChildrenProvider, TreeItemProvider, TreeItemWithIdProvider};
use canopy_tree::{ItemId, Tree, TreeHooks, TreeWithId};

use crate::flow::TraversalFlow;
use crate::visitor::TreeVisitor;

/// One traversal session's depth bookkeeping.
///
/// A walker is created per call, handed to every visitor hook, and
/// discarded when the call returns; it is never shared between
/// traversals. The level starts at the caller-specified initial level
/// (default 0), is incremented on each descent, and decremented on
/// each return.
#[derive(Debug)]
pub struct Walker {
    level: usize,
}

impl Walker {
    const fn at_level(level: usize) -> Self {
        Self { level }
    }

    /// Returns the current nesting level.
    ///
    /// During an `enter`/`leave` hook this equals the visited item's
    /// depth from the traversal root plus the initial level, which
    /// makes it directly usable as an indentation count.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }
}

/// Outcome of visiting one subtree, propagated to the sibling loop.
enum Step {
    Next,
    SkipRemainingSiblings,
    Stop,
}

/// Walks the hierarchy rooted at `root` depth-first, starting at level
/// 0.
///
/// Children are visited in the provider's sibling order. `begin` fires
/// once before the root's enter hook, `end` once after traversal
/// completes, including completion via [`TraversalFlow::Stop`].
pub fn walk<T, P, C>(provider: &P, root: T, visitor: &mut C)
where
    P: ChildrenProvider<T>,
    C: TreeVisitor<T>,
{
    walk_from_level(provider, root, visitor, 0);
}

/// Walks the hierarchy rooted at `root` depth-first, starting the
/// level counter at `initial_level`.
pub fn walk_from_level<T, P, C>(provider: &P, root: T, visitor: &mut C, initial_level: usize)
where
    P: ChildrenProvider<T>,
    C: TreeVisitor<T>,
{
    let mut walker = Walker::at_level(initial_level);
    visitor.begin();
    let _ = visit(provider, &root, visitor, &mut walker, &mut None);
    visitor.end();
}

/// Walks the hierarchy rooted at `root`, visiting each item's children
/// in comparator order for this call only.
///
/// The provider's stored order is not touched; for an owning tree
/// handle, use [`Tree::sort_children_by`] instead to reorder
/// permanently.
pub fn walk_sorted<T, P, C>(
    provider: &P,
    root: T,
    visitor: &mut C,
    compare: impl FnMut(&T, &T) -> Ordering,
) where
    P: ChildrenProvider<T>,
    C: TreeVisitor<T>,
{
    walk_sorted_from_level(provider, root, visitor, compare, 0);
}

/// Walks the hierarchy rooted at `root` in comparator order, starting
/// the level counter at `initial_level`.
pub fn walk_sorted_from_level<T, P, C>(
    provider: &P,
    root: T,
    visitor: &mut C,
    mut compare: impl FnMut(&T, &T) -> Ordering,
    initial_level: usize,
) where
    P: ChildrenProvider<T>,
    C: TreeVisitor<T>,
{
    let mut walker = Walker::at_level(initial_level);
    visitor.begin();
    let mut compare: Option<&mut dyn FnMut(&T, &T) -> Ordering> = Some(&mut compare);
    let _ = visit(provider, &root, visitor, &mut walker, &mut compare);
    visitor.end();
}

/// Walks a [`Tree`] handle from its root in stored sibling order.
pub fn walk_tree<V, H, C>(tree: &Tree<V, H>, visitor: &mut C)
where
    H: TreeHooks<V>,
    C: TreeVisitor<ItemId>,
{
    walk(&TreeItemProvider::new(tree), tree.root(), visitor);
}

/// Walks a [`TreeWithId`] handle from its root in stored sibling
/// order.
pub fn walk_tree_with_id<K, V, H, C>(tree: &TreeWithId<K, V, H>, visitor: &mut C)
where
    K: Eq + Hash + Clone,
    H: TreeHooks<V>,
    C: TreeVisitor<ItemId>,
{
    walk(&TreeItemWithIdProvider::new(tree), tree.root(), visitor);
}

/// Walks a [`Tree`] handle, visiting siblings in comparator order for
/// this call only.
pub fn walk_tree_sorted<V, H, C>(
    tree: &Tree<V, H>,
    visitor: &mut C,
    mut compare: impl FnMut(ItemId, ItemId) -> Ordering,
) where
    H: TreeHooks<V>,
    C: TreeVisitor<ItemId>,
{
    walk_sorted(
        &TreeItemProvider::new(tree),
        tree.root(),
        visitor,
        |a, b| compare(*a, *b),
    );
}

fn visit<T, P, C>(
    provider: &P,
    item: &T,
    visitor: &mut C,
    walker: &mut Walker,
    compare: &mut Option<&mut dyn FnMut(&T, &T) -> Ordering>,
) -> Step
where
    P: ChildrenProvider<T>,
    C: TreeVisitor<T>,
{
    match visitor.enter(walker, item) {
        TraversalFlow::Stop => return Step::Stop,
        TraversalFlow::Continue => {
            let mut children = provider.children(item);
            if let Some(compare) = compare.as_deref_mut() {
                children.sort_by(|a, b| compare(a, b));
            }
            if !children.is_empty() {
                visitor.on_level_down();
                walker.level += 1;
                let mut stopped = false;
                for child in &children {
                    match visit(provider, child, visitor, walker, compare) {
                        Step::Next => {}
                        Step::SkipRemainingSiblings => break,
                        Step::Stop => {
                            stopped = true;
                            break;
                        }
                    }
                }
                walker.level -= 1;
                visitor.on_level_up();
                if stopped {
                    // no leave hook for this item: stop means no
                    // further hooks at all
                    return Step::Stop;
                }
            }
        }
        TraversalFlow::SkipChildren => {}
        TraversalFlow::SkipSiblings => {
            return match visitor.leave(walker, item) {
                TraversalFlow::Stop => Step::Stop,
                TraversalFlow::Continue
                | TraversalFlow::SkipChildren
                | TraversalFlow::SkipSiblings => Step::SkipRemainingSiblings,
            };
        }
    }

    match visitor.leave(walker, item) {
        TraversalFlow::Continue | TraversalFlow::SkipChildren => Step::Next,
        TraversalFlow::SkipSiblings => Step::SkipRemainingSiblings,
        TraversalFlow::Stop => Step::Stop,
    }
}
