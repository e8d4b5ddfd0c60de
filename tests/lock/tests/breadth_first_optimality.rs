//! Breadth-first search returns a shallowest goal, with or without
//! expanded-set pruning, and fails cleanly below the optimal depth.

use lock_tests::{eight_move_puzzle, four_move_puzzle, init_tracing};
use waypoint_search::{
    breadth_first_search, SearchError, SearchNode, SearchPolicy, UNBOUNDED_DEPTH,
};

#[test]
fn eight_move_puzzle_solved_at_depth_eight() {
    init_tracing();
    for prune in [true, false] {
        for limit in [8, UNBOUNDED_DEPTH] {
            let policy = SearchPolicy::new(prune, limit);
            let outcome = breadth_first_search(eight_move_puzzle(), &policy).unwrap();
            assert_eq!(
                outcome.goal_depth(),
                8,
                "prune={prune} limit={limit}: expected depth 8"
            );
            assert!(outcome.goal().is_goal());
        }
    }
}

#[test]
fn limit_below_optimum_is_goal_not_found() {
    init_tracing();
    for prune in [true, false] {
        let err = breadth_first_search(eight_move_puzzle(), &SearchPolicy::new(prune, 7))
            .unwrap_err();
        assert_eq!(err, SearchError::GoalNotFound { depth_limit: 7 });
        assert_eq!(err.to_string(), "no solution found up to a depth of 7");
    }
}

#[test]
fn pruning_keeps_the_result_and_saves_expansions() {
    let pruned = breadth_first_search(four_move_puzzle(), &SearchPolicy::new(true, 10)).unwrap();
    let unpruned =
        breadth_first_search(four_move_puzzle(), &SearchPolicy::new(false, 10)).unwrap();

    assert_eq!(pruned.goal_depth(), 4);
    assert_eq!(unpruned.goal_depth(), 4);
    assert!(pruned.goal().states_equal(unpruned.goal()));
    assert!(
        pruned.stats.expansions < unpruned.stats.expansions,
        "pruned {} vs unpruned {}",
        pruned.stats.expansions,
        unpruned.stats.expansions
    );
    assert!(pruned.stats.pruned_duplicates > 0);
    assert_eq!(unpruned.stats.pruned_duplicates, 0);
}

#[test]
fn path_is_a_chain_of_single_moves() {
    let outcome = breadth_first_search(eight_move_puzzle(), &SearchPolicy::default()).unwrap();
    let path = outcome.path();
    assert_eq!(path.len(), 9);
    assert_eq!(path[0].tiles(), eight_move_puzzle().tiles());
    for pair in path.windows(2) {
        let next_states = pair[0].generate_children();
        assert!(
            next_states.iter().any(|c| c.states_equal(pair[1])),
            "consecutive path states must be one move apart"
        );
    }
}
