//! Harness runner: dispatch one search according to a [`RunConfig`] and
//! package the result as a [`RunReport`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use waypoint_search::{
    breadth_first_search, depth_first_search, depth_first_search_with_rng, heuristic_search,
    SearchError, SearchNode, SearchOutcome, Strategy,
};

use crate::config::RunConfig;
use crate::contract::ReportState;
use crate::error::HarnessError;
use crate::report::{RunOutcome, RunReport};

/// Run one search from `root`.
///
/// An exhausted search is a normal outcome and yields a report with
/// [`RunOutcome::GoalNotFound`].
///
/// # Errors
///
/// Returns [`HarnessError::Search`] if the engine rejects the configuration
/// (a depth limit of 0). The root is not inspected in that case.
pub fn run<N>(root: N, config: &RunConfig) -> Result<RunReport, HarnessError>
where
    N: SearchNode + ReportState,
{
    let world_id = root.world_id().to_owned();
    let policy = config.search_policy();

    tracing::info!(
        world_id = %world_id,
        strategy = %config.strategy,
        depth_limit = policy.depth_limit,
        prune_expanded = policy.prune_expanded,
        seeded = config.seed.is_some(),
        "run started"
    );

    let result = match (config.strategy, config.seed) {
        (Strategy::DepthFirst, Some(seed)) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            depth_first_search_with_rng(root, &policy, &mut rng)
        }
        (Strategy::DepthFirst, None) => depth_first_search(root, &policy),
        (Strategy::BreadthFirst, _) => breadth_first_search(root, &policy),
        (Strategy::Heuristic, _) => heuristic_search(root, policy.depth_limit),
    };

    let outcome = match result {
        Ok(found) => solved(&found),
        Err(SearchError::GoalNotFound { depth_limit }) => {
            tracing::info!(world_id = %world_id, depth_limit, "run exhausted");
            RunOutcome::GoalNotFound { depth_limit }
        }
        Err(err) => {
            tracing::warn!(world_id = %world_id, error = %err, "run rejected");
            return Err(err.into());
        }
    };

    if let RunOutcome::Solved {
        goal_depth, stats, ..
    } = &outcome
    {
        tracing::info!(
            world_id = %world_id,
            goal_depth,
            expansions = stats.expansions,
            "run solved"
        );
    }

    Ok(RunReport {
        world_id,
        config: *config,
        outcome,
    })
}

fn solved<N: ReportState>(found: &SearchOutcome<N>) -> RunOutcome {
    RunOutcome::Solved {
        goal_depth: found.goal_depth(),
        path: found.path().into_iter().map(ReportState::state_json).collect(),
        stats: found.stats,
    }
}
