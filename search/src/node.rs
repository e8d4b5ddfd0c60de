//! The capability set a problem state implements to be searchable.

/// A problem state the engine can search over.
///
/// Implementations carry domain data only. Depth and parent bookkeeping are
/// owned by the engine's [`SearchTree`](crate::tree::SearchTree): the root is
/// always re-rooted at depth 0 and every generated child is linked to the
/// node it was generated from.
///
/// # Contract
///
/// - `is_goal` is side-effect free.
/// - `generate_children` returns a finite list. Breadth-first and heuristic
///   search preserve its order; depth-first search shuffles it.
/// - `states_equal` compares states, not identities, and must be reflexive
///   and symmetric. Duplicate pruning is incorrect otherwise.
/// - `heuristic` is non-negative and stable for the lifetime of the value. The
///   engine calls it once per node and caches the result. It should not
///   overestimate the remaining distance, but nothing checks that.
pub trait SearchNode: Sized {
    /// Whether this state satisfies the target condition.
    fn is_goal(&self) -> bool;

    /// All states reachable from this one in a single step.
    fn generate_children(&self) -> Vec<Self>;

    /// Domain-level state equality.
    fn states_equal(&self, other: &Self) -> bool;

    /// Estimated remaining distance to a goal state.
    ///
    /// Only heuristic search reads this. The default estimate is 0, which
    /// turns heuristic search into a uniform expansion by depth.
    fn heuristic(&self) -> u64 {
        0
    }
}
