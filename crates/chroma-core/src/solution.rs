//! Coloring results as handed to a presenter.

use crate::coloring::{find_conflicts, greedy_coloring, uncolored_vertices, Coloring};
use crate::errors::Result;
use crate::types::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A coloring together with its validity and color count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoringSolution {
    /// Color assignment (vertex -> color)
    pub coloring: Coloring,

    /// Number of distinct colors used. Not necessarily the chromatic number.
    pub num_colors: usize,

    /// No edge joins two vertices of the same color
    pub valid: bool,

    /// Edges whose endpoints share a color
    pub conflicts: Vec<(VertexId, VertexId)>,

    /// Vertices of the graph with no color
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uncolored: Vec<VertexId>,

    /// Computation time in milliseconds
    pub computation_time_ms: f64,
}

impl ColoringSolution {
    /// Runs greedy coloring on `graph` and scores the result.
    pub fn greedy(graph: &Graph) -> Result<Self> {
        let start = Instant::now();
        let coloring = greedy_coloring(graph)?;
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        let mut solution = Self::evaluate(graph, coloring);
        solution.computation_time_ms = elapsed;

        log::info!(
            "Greedy coloring: {} colors (bound {}), valid={}, {:.3}ms",
            solution.num_colors,
            max_colors_bound(graph),
            solution.valid,
            solution.computation_time_ms
        );

        Ok(solution)
    }

    /// Scores a coloring that came from somewhere else.
    pub fn evaluate(graph: &Graph, coloring: Coloring) -> Self {
        let conflicts = find_conflicts(graph, &coloring);
        let uncolored = uncolored_vertices(graph, &coloring);
        if !uncolored.is_empty() {
            log::warn!(
                "{} of {} vertices have no color",
                uncolored.len(),
                graph.num_vertices
            );
        }

        Self {
            num_colors: coloring.num_colors(),
            valid: conflicts.is_empty(),
            conflicts,
            uncolored,
            coloring,
            computation_time_ms: 0.0,
        }
    }

    /// Valid and covering every vertex.
    pub fn is_complete(&self) -> bool {
        self.valid && self.uncolored.is_empty()
    }
}

/// Upper bound on the colors greedy coloring can use: `max_degree + 1`.
pub fn max_colors_bound(graph: &Graph) -> usize {
    if graph.is_empty() {
        0
    } else {
        graph.max_degree() + 1
    }
}
