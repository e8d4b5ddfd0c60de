//! `ExplicitGraph`: a finite directed graph spelled out vertex by vertex.
//!
//! Each vertex has an ordered successor list (its child generation order), a
//! heuristic value, and a goal flag. The graph is frozen behind an `Arc`
//! once a [`GraphCursor`] is taken, so every generated child shares it.

use std::collections::BTreeSet;
use std::sync::Arc;

use waypoint_search::SearchNode;

use crate::contract::ReportState;
use crate::error::HarnessError;

/// A directed graph with per-vertex heuristic values and goal set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitGraph {
    edges: Vec<Vec<usize>>,
    heuristic: Vec<u64>,
    goals: BTreeSet<usize>,
}

impl ExplicitGraph {
    /// A graph of `vertex_count` isolated vertices, heuristic 0, no goals.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); vertex_count],
            heuristic: vec![0; vertex_count],
            goals: BTreeSet::new(),
        }
    }

    /// Build from an edge list. Successor order follows the list.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if an edge names a vertex
    /// outside `0..vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, HarnessError> {
        let mut graph = Self::new(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Append `to` to the successors of `from`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for unknown vertices.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), HarnessError> {
        self.check_vertex(to)?;
        self.check_vertex(from)?;
        self.edges[from].push(to);
        Ok(())
    }

    /// Set the heuristic value of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for unknown vertices.
    pub fn set_heuristic(&mut self, vertex: usize, value: u64) -> Result<(), HarnessError> {
        self.check_vertex(vertex)?;
        self.heuristic[vertex] = value;
        Ok(())
    }

    /// Mark `vertex` as a goal.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for unknown vertices.
    pub fn mark_goal(&mut self, vertex: usize) -> Result<(), HarnessError> {
        self.check_vertex(vertex)?;
        self.goals.insert(vertex);
        Ok(())
    }

    /// Successors of `vertex` in generation order.
    #[must_use]
    pub fn successors(&self, vertex: usize) -> &[usize] {
        self.edges
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Freeze the graph and position a cursor on `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for unknown vertices.
    pub fn cursor(self, vertex: usize) -> Result<GraphCursor, HarnessError> {
        GraphCursor::new(Arc::new(self), vertex)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), HarnessError> {
        if vertex >= self.vertex_count() {
            return Err(HarnessError::invalid_config(format!(
                "vertex {vertex} outside 0..{}",
                self.vertex_count()
            )));
        }
        Ok(())
    }
}

/// A position in a shared [`ExplicitGraph`]; the searchable state.
#[derive(Debug, Clone)]
pub struct GraphCursor {
    graph: Arc<ExplicitGraph>,
    vertex: usize,
}

impl GraphCursor {
    /// Position a cursor on `vertex` of an already shared graph.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for unknown vertices.
    pub fn new(graph: Arc<ExplicitGraph>, vertex: usize) -> Result<Self, HarnessError> {
        graph.check_vertex(vertex)?;
        Ok(Self { graph, vertex })
    }

    /// The vertex this cursor sits on.
    #[must_use]
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// The graph this cursor walks.
    #[must_use]
    pub fn graph(&self) -> &Arc<ExplicitGraph> {
        &self.graph
    }
}

impl SearchNode for GraphCursor {
    fn is_goal(&self) -> bool {
        self.graph.goals.contains(&self.vertex)
    }

    fn generate_children(&self) -> Vec<Self> {
        self.graph
            .successors(self.vertex)
            .iter()
            .map(|&vertex| Self {
                graph: Arc::clone(&self.graph),
                vertex,
            })
            .collect()
    }

    fn states_equal(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }

    fn heuristic(&self) -> u64 {
        self.graph.heuristic[self.vertex]
    }
}

impl ReportState for GraphCursor {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "explicit_graph"
    }

    fn state_json(&self) -> serde_json::Value {
        serde_json::json!({ "vertex": self.vertex })
    }
}
