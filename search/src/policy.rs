//! Search policy: duplicate pruning and depth limit.

use crate::error::SearchError;

/// Depth limit meaning "no practical bound".
pub const UNBOUNDED_DEPTH: u32 = u32::MAX;

/// Default for [`SearchPolicy::prune_expanded`].
pub const DEFAULT_PRUNE_EXPANDED: bool = true;

/// Options shared by the depth-first and breadth-first strategies.
///
/// Heuristic search reads only `depth_limit`; its duplicate rule is fixed
/// (see [`heuristic_search`](crate::search::heuristic_search)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Reject generated nodes whose state equals an already expanded node.
    pub prune_expanded: bool,
    /// Depth of the deepest node that is goal-tested. Nodes at this depth are
    /// never added to the fringe. Must be at least 1.
    pub depth_limit: u32,
}

impl SearchPolicy {
    /// Policy with explicit pruning flag and depth limit.
    #[must_use]
    pub fn new(prune_expanded: bool, depth_limit: u32) -> Self {
        Self {
            prune_expanded,
            depth_limit,
        }
    }

    /// Default pruning with the given depth limit.
    #[must_use]
    pub fn depth_limited(depth_limit: u32) -> Self {
        Self {
            depth_limit,
            ..Self::default()
        }
    }

    /// Same policy with the pruning flag replaced.
    #[must_use]
    pub fn with_pruning(self, prune_expanded: bool) -> Self {
        Self {
            prune_expanded,
            ..self
        }
    }

    /// Whether the depth limit is [`UNBOUNDED_DEPTH`].
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.depth_limit == UNBOUNDED_DEPTH
    }

    /// Check the policy before any search work.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidDepthLimit`] if `depth_limit` is 0.
    pub fn validate(&self) -> Result<(), SearchError> {
        validate_depth_limit(self.depth_limit)
    }

    /// Whether children of a node at `parent_depth` may enter the fringe.
    ///
    /// Children at `depth_limit` are still goal-tested, but never expanded.
    #[must_use]
    pub(crate) fn admits_children_of(&self, parent_depth: u32) -> bool {
        admits_children_of(self.depth_limit, parent_depth)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            prune_expanded: DEFAULT_PRUNE_EXPANDED,
            depth_limit: UNBOUNDED_DEPTH,
        }
    }
}

pub(crate) fn validate_depth_limit(depth_limit: u32) -> Result<(), SearchError> {
    if depth_limit < 1 {
        return Err(SearchError::InvalidDepthLimit { depth_limit });
    }
    Ok(())
}

pub(crate) fn admits_children_of(depth_limit: u32, parent_depth: u32) -> bool {
    parent_depth < depth_limit.saturating_sub(1)
}
