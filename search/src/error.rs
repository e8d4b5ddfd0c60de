//! Typed search errors.
//!
//! `SearchError` carries exactly two failure kinds so callers can tell bad
//! input apart from "no solution within the bound". Neither carries partial
//! results.

use crate::policy::UNBOUNDED_DEPTH;

/// Failure of a search invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The depth limit was below 1. Raised before any search work begins.
    #[error("a depth limit of {depth_limit} is too low, expected at least 1")]
    InvalidDepthLimit { depth_limit: u32 },

    /// The fringe emptied without any generated node satisfying the goal.
    #[error("{}", goal_not_found_message(.depth_limit))]
    GoalNotFound { depth_limit: u32 },
}

impl SearchError {
    /// Returns `true` for configuration errors detected before searching.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidDepthLimit { .. })
    }

    /// Returns `true` if the search ran to exhaustion without a goal.
    #[must_use]
    pub fn is_goal_not_found(&self) -> bool {
        matches!(self, Self::GoalNotFound { .. })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn goal_not_found_message(depth_limit: &u32) -> String {
    if *depth_limit == UNBOUNDED_DEPTH {
        "no solution found at the maximum depth limit".to_string()
    } else {
        format!("no solution found up to a depth of {depth_limit}")
    }
}
