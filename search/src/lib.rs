//! Waypoint Search: depth-first, breadth-first and heuristic best-first
//! search over caller-defined problem states.
//!
//! The engine owns the fringe, the expansion order, duplicate pruning and the
//! failure semantics. Problem domains only implement [`SearchNode`]; they
//! contain no search logic.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_search  ←  waypoint_harness  ←  lock-tests / benchmarks
//! (engine, fringes)   (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`]: capability set a problem state implements
//! - [`SearchTree`]: per-invocation node arena with index-based parent links
//! - [`SearchPolicy`]: pruning flag and depth limit
//! - [`SearchOutcome`]: goal node, the tree that reached it, and [`SearchStats`]
//! - [`SearchError`]: invalid configuration or goal not found
//!
//! # Entry points
//!
//! - [`depth_first_search`] / [`depth_first_search_with_rng`]
//! - [`breadth_first_search`]
//! - [`heuristic_search`]

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;


pub use error::SearchError;
pub use node::SearchNode;
pub use policy::{SearchPolicy, UNBOUNDED_DEPTH};
pub use search::{
    breadth_first_search, depth_first_search, depth_first_search_with_rng, heuristic_search,
    SearchOutcome, Strategy,
};
pub use stats::SearchStats;
pub use tree::{NodeId, SearchTree};
