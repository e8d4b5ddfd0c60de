//! Per-invocation search counters.

/// Counters collected during one search.
///
/// Every generated child ends up in exactly one of `enqueued`,
/// `rejected_by_depth` or `pruned_duplicates`, except a goal child, which is
/// returned instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the fringe and expanded.
    pub expansions: u64,
    /// Generated children that were examined (goal-tested). Children listed
    /// after a goal in the same expansion are never examined.
    pub generated: u64,
    /// Goal tests performed, the root's included.
    pub goal_tests: u64,
    /// Children pushed onto the fringe.
    pub enqueued: u64,
    /// Children kept out of the fringe by the depth limit.
    pub rejected_by_depth: u64,
    /// Children kept out of the fringe as duplicates (expanded set, or the
    /// immediate parent for heuristic search).
    pub pruned_duplicates: u64,
    /// Largest fringe size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    /// Children that were goal-tested but never entered the fringe.
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.rejected_by_depth + self.pruned_duplicates
    }
}
