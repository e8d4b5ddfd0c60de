//! Run reports: what a harness run did, as canonical JSON with a digest.
//!
//! Canonical form: sorted object keys, compact separators, integers only.
//! `serde_json::Value` objects are `BTreeMap`-backed (the workspace does not
//! enable `preserve_order`), so `serde_json::to_vec` already sorts keys.
//!
//! Digest: `"sha256:" + hex(sha256(DOMAIN_RUN_REPORT || canonical_bytes))`.

use sha2::{Digest, Sha256};
use waypoint_search::{SearchStats, Strategy};

use crate::config::RunConfig;
use crate::error::HarnessError;

/// Domain prefix for run report digests. Null-terminated.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYPOINT::RUN_REPORT::V1\0";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A goal was reached.
    Solved {
        /// Depth of the goal node.
        goal_depth: u32,
        /// `ReportState::state_json` of each node, root first.
        path: Vec<serde_json::Value>,
        /// Engine counters.
        stats: SearchStats,
    },
    /// The search exhausted its fringe. The engine returns no partial
    /// results, so there are no counters.
    GoalNotFound {
        /// The depth limit the search ran under.
        depth_limit: u32,
    },
}

/// Record of one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// World the root state belongs to.
    pub world_id: String,
    /// Resolved run configuration.
    pub config: RunConfig,
    /// How the run ended.
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Strategy the run used.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Whether a goal was reached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, RunOutcome::Solved { .. })
    }

    /// Goal depth, if solved.
    #[must_use]
    pub fn goal_depth(&self) -> Option<u32> {
        match &self.outcome {
            RunOutcome::Solved { goal_depth, .. } => Some(*goal_depth),
            RunOutcome::GoalNotFound { .. } => None,
        }
    }

    /// Engine counters, if solved.
    #[must_use]
    pub fn stats(&self) -> Option<&SearchStats> {
        match &self.outcome {
            RunOutcome::Solved { stats, .. } => Some(stats),
            RunOutcome::GoalNotFound { .. } => None,
        }
    }

    /// The report as a JSON value.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "config": self.config.to_json(),
            "outcome": outcome_to_json(&self.outcome),
            "world_id": self.world_id,
        })
    }

    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Serialize`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        serde_json::to_vec(&self.to_json_value()).map_err(|e| HarnessError::Serialize {
            detail: e.to_string(),
        })
    }

    /// Content digest of the canonical bytes, `"sha256:<hex>"`.
    ///
    /// # Errors
    ///
    /// Same as [`RunReport::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<String, HarnessError> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_RUN_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

fn outcome_to_json(outcome: &RunOutcome) -> serde_json::Value {
    match outcome {
        RunOutcome::Solved {
            goal_depth,
            path,
            stats,
        } => serde_json::json!({
            "goal_depth": goal_depth,
            "path": path,
            "stats": stats_to_json(stats),
            "type": "solved",
        }),
        RunOutcome::GoalNotFound { depth_limit } => serde_json::json!({
            "depth_limit": depth_limit,
            "type": "goal_not_found",
        }),
    }
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "enqueued": stats.enqueued,
        "expansions": stats.expansions,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "goal_tests": stats.goal_tests,
        "pruned_duplicates": stats.pruned_duplicates,
        "rejected_by_depth": stats.rejected_by_depth,
    })
}
