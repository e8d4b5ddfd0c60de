//! Example problem domains for the engine.

pub mod explicit_graph;
pub mod sliding_tile;
