//! World contract: what a problem domain exposes to the runner.
//!
//! Worlds implement [`SearchNode`](waypoint_search::SearchNode) for the
//! engine and [`ReportState`] for run reports. Worlds may NOT implement
//! search logic, digests, or policy selection; those are engine and runner
//! concerns.

/// A searchable state that can describe itself in a run report.
pub trait ReportState {
    /// Unique world identifier (e.g., `"sliding_tile"`).
    fn world_id(&self) -> &str;

    /// JSON description of this state.
    ///
    /// Must be deterministic and use integers only, so report digests are
    /// stable across runs and platforms.
    fn state_json(&self) -> serde_json::Value;
}
