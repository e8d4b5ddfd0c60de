//! Shared fixtures for the lock tests.
//!
//! Every fixture is deterministic: scrambles are fixed move lists, never
//! random walks, so expected depths can be pinned in assertions.

use std::sync::Arc;

use waypoint_harness::worlds::explicit_graph::{ExplicitGraph, GraphCursor};
use waypoint_harness::worlds::sliding_tile::{Move, SlidingTile};

/// Blank moves that scramble the solved 4x4 board to an optimal distance of 8.
pub const EIGHT_MOVE_SCRAMBLE: [Move; 8] = [
    Move::Up,
    Move::Left,
    Move::Up,
    Move::Left,
    Move::Up,
    Move::Right,
    Move::Down,
    Move::Right,
];

/// Install a test-writer `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The 4x4 board [`EIGHT_MOVE_SCRAMBLE`] away from solved.
///
/// # Panics
///
/// Never for side 4; the side is a supported constant.
#[must_use]
pub fn eight_move_puzzle() -> SlidingTile {
    SlidingTile::solved(4)
        .expect("side 4 is supported")
        .apply_moves(&EIGHT_MOVE_SCRAMBLE)
}

/// A 3x3 board four blank moves from solved (blank in the top-left corner).
///
/// # Panics
///
/// Never for side 3.
#[must_use]
pub fn four_move_puzzle() -> SlidingTile {
    SlidingTile::solved(3)
        .expect("side 3 is supported")
        .apply_moves(&[Move::Up, Move::Left, Move::Up, Move::Left])
}

/// A 2x2 board two blank moves from solved. Its whole space is 12 states.
///
/// # Panics
///
/// Never for side 2.
#[must_use]
pub fn two_by_two_puzzle() -> SlidingTile {
    SlidingTile::solved(2)
        .expect("side 2 is supported")
        .apply_moves(&[Move::Up, Move::Left])
}

/// Graph whose heuristic lures best-first search away from the shallow goal.
///
/// ```text
/// 0 ─┬─ 1 (h=100) ── 5 (goal)
///    └─ 2 ── 3 ── 4 ── 6 (goal)
/// ```
///
/// Breadth-first finds vertex 5 at depth 2; heuristic search follows the
/// zero-heuristic chain and returns vertex 6 at depth 4.
///
/// # Panics
///
/// Never; every vertex index is in range.
#[must_use]
pub fn misleading_graph() -> GraphCursor {
    let mut graph =
        ExplicitGraph::from_edges(7, &[(0, 1), (0, 2), (1, 5), (2, 3), (3, 4), (4, 6)])
            .expect("edges in range");
    graph.set_heuristic(1, 100).expect("vertex in range");
    graph.mark_goal(5).expect("vertex in range");
    graph.mark_goal(6).expect("vertex in range");
    GraphCursor::new(Arc::new(graph), 0).expect("vertex in range")
}

/// A directed cycle `0 -> 1 -> ... -> n-1 -> 0` with no goal.
///
/// # Panics
///
/// Panics if `n` is 0.
#[must_use]
pub fn goalless_cycle(n: usize) -> GraphCursor {
    let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    ExplicitGraph::from_edges(n, &edges)
        .and_then(|graph| graph.cursor(0))
        .expect("cycle of at least one vertex")
}
