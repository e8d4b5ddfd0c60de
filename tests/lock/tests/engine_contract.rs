//! Cross-strategy contract: root goal short-circuit, invalid limits,
//! state equality, and the expansion statistics.

use lock_tests::{four_move_puzzle, two_by_two_puzzle};
use waypoint_harness::worlds::sliding_tile::SlidingTile;
use waypoint_search::{
    breadth_first_search, depth_first_search, heuristic_search, SearchError, SearchNode,
    SearchOutcome, SearchPolicy, UNBOUNDED_DEPTH,
};

type Runner = fn(SlidingTile, u32) -> Result<SearchOutcome<SlidingTile>, SearchError>;

fn all_strategies() -> [(&'static str, Runner); 3] {
    [
        ("depth_first", |root, limit| {
            depth_first_search(root, &SearchPolicy::depth_limited(limit))
        }),
        ("breadth_first", |root, limit| {
            breadth_first_search(root, &SearchPolicy::depth_limited(limit))
        }),
        ("heuristic", heuristic_search),
    ]
}

#[test]
fn goal_root_returns_with_zero_expansions() {
    for (name, search) in all_strategies() {
        let outcome = search(SlidingTile::solved(3).unwrap(), UNBOUNDED_DEPTH).unwrap();
        assert_eq!(outcome.goal_depth(), 0, "{name}");
        assert_eq!(outcome.stats.expansions, 0, "{name}");
        assert_eq!(outcome.stats.goal_tests, 1, "{name}");
        assert_eq!(outcome.tree.len(), 1, "{name}");
    }
}

#[test]
fn zero_depth_limit_is_rejected_by_every_strategy() {
    for (name, search) in all_strategies() {
        // Even a goal root is rejected: validation precedes the root test.
        let err = search(SlidingTile::solved(3).unwrap(), 0).unwrap_err();
        assert_eq!(err, SearchError::InvalidDepthLimit { depth_limit: 0 }, "{name}");
        assert!(err.is_invalid_configuration());
        assert_eq!(
            err.to_string(),
            "a depth limit of 0 is too low, expected at least 1"
        );
    }
}

#[test]
fn limit_one_still_goal_tests_the_children() {
    let one_move = SlidingTile::solved(3).unwrap().generate_children().remove(0);
    for (name, search) in all_strategies() {
        let outcome = search(one_move.clone(), 1).unwrap();
        assert_eq!(outcome.goal_depth(), 1, "{name}");
        assert_eq!(outcome.stats.expansions, 1, "{name}");
    }
}

#[test]
fn states_equal_is_reflexive_for_every_reached_node() {
    let outcome = breadth_first_search(four_move_puzzle(), &SearchPolicy::default()).unwrap();
    for node in outcome.path() {
        assert!(node.states_equal(node));
    }
}

#[test]
fn every_examined_child_is_accounted_for() {
    for (name, search) in all_strategies() {
        let outcome = search(two_by_two_puzzle(), 6).unwrap();
        let stats = outcome.stats;
        // The goal child is examined but returned, never enqueued or rejected.
        assert_eq!(
            stats.generated,
            stats.enqueued + stats.rejected() + 1,
            "{name}: {stats:?}"
        );
        assert_eq!(stats.goal_tests, stats.generated + 1, "{name}");
        assert!(stats.frontier_high_water >= 1, "{name}");
    }
}

#[test]
fn tree_links_walk_back_to_the_root() {
    let outcome = breadth_first_search(four_move_puzzle(), &SearchPolicy::default()).unwrap();
    let ids = outcome.tree.path_to(outcome.goal);
    assert_eq!(ids.len(), 5);
    assert_eq!(outcome.tree.parent(ids[0]), None);
    for (depth, pair) in ids.windows(2).enumerate() {
        assert_eq!(outcome.tree.parent(pair[1]), Some(pair[0]));
        assert_eq!(outcome.tree.depth(pair[1]) as usize, depth + 1);
    }
}
