//! Shared helpers for waypoint benchmark suites.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use waypoint_harness::worlds::sliding_tile::SlidingTile;
use waypoint_harness::HarnessError;
use waypoint_search::{NodeId, SearchTree};

/// Scrambled boards for a benchmark regime.
///
/// Seeds `0..count` give the same boards on every machine, so regressions
/// compare like with like.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] for an unsupported side.
pub fn scrambled_boards(
    side: usize,
    moves: usize,
    count: u64,
) -> Result<Vec<SlidingTile>, HarnessError> {
    (0..count)
        .map(|seed| SlidingTile::shuffled(side, moves, &mut ChaCha8Rng::seed_from_u64(seed)))
        .collect()
}

/// A flat tree of `n` children under a solved 3x3 root, plus their ids.
///
/// Fringe benchmarks only need valid ids; the nodes themselves are never read.
///
/// # Errors
///
/// Never in practice; side 3 is supported.
pub fn flat_tree(n: usize) -> Result<(SearchTree<SlidingTile>, Vec<NodeId>), HarnessError> {
    let root = SlidingTile::solved(3)?;
    let mut tree = SearchTree::with_root(root.clone());
    let ids = (0..n)
        .map(|_| tree.insert_child(NodeId::ROOT, root.clone()))
        .collect();
    Ok((tree, ids))
}
