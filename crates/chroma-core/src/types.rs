//! Core data types for graph coloring.

use crate::errors::{ChromaError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// Vertex ID type alias for clarity.
pub type VertexId = usize;

/// Color label. Colors start at 0 and grow by one as needed.
pub type Color = usize;

/// Undirected graph with adjacency-list structure.
///
/// Vertices are the contiguous range `0..num_vertices`. The order in which
/// the coloring engine visits them is part of the graph: `order` is either
/// empty (ascending vertex order) or an explicit permutation of the vertices.
///
/// ## Invariants
/// - `adjacency.len() == num_vertices`
/// - every neighbor is `< num_vertices` and never the vertex itself
/// - `v ∈ adjacency[u]` ⇔ `u ∈ adjacency[v]`, with no duplicates
/// - `num_edges` equals the number of undirected edges
///
/// Graphs built through [`Graph::new`] and [`Graph::add_edge`] always hold
/// these. Graphs assembled field-by-field or deserialized are checked by
/// [`Graph::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Number of vertices in the graph
    pub num_vertices: usize,

    /// Number of undirected edges in the graph
    pub num_edges: usize,

    /// Adjacency list representation: vertex -> list of neighbors
    pub adjacency: Vec<Vec<VertexId>>,

    /// Explicit visiting order. Empty means ascending `0..num_vertices`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<VertexId>,
}

impl Graph {
    /// Creates a new graph with `num_vertices` isolated vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            num_edges: 0,
            adjacency: vec![Vec::new(); num_vertices],
            order: Vec::new(),
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// Duplicate edges (in either orientation) are collapsed.
    pub fn from_edges(num_vertices: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut graph = Self::new(num_vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge between two vertices.
    ///
    /// Returns `Ok(false)` if the edge already exists.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool> {
        if u >= self.num_vertices || v >= self.num_vertices {
            return Err(ChromaError::invalid_graph(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                u, v, self.num_vertices
            )));
        }
        if u == v {
            return Err(ChromaError::invalid_graph(format!(
                "self-loop on vertex {}",
                u
            )));
        }
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.num_edges += 1;
        Ok(true)
    }

    /// Sets an explicit visiting order for the coloring engine.
    ///
    /// `order` must be a permutation of `0..num_vertices`.
    pub fn with_order(mut self, order: Vec<VertexId>) -> Result<Self> {
        check_permutation(&order, self.num_vertices)?;
        self.order = order;
        Ok(self)
    }

    /// The order in which vertices are visited during coloring.
    pub fn visit_order(&self) -> Cow<'_, [VertexId]> {
        if self.order.is_empty() {
            Cow::Owned((0..self.num_vertices).collect())
        } else {
            Cow::Borrowed(&self.order)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    /// Neighbors of `vertex`, empty for an unknown vertex.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Graph density: |E| / (|V| * (|V| - 1) / 2)
    pub fn density(&self) -> f64 {
        if self.num_vertices <= 1 {
            return 0.0;
        }
        (2.0 * self.num_edges as f64) / (self.num_vertices * (self.num_vertices - 1)) as f64
    }

    /// Each undirected edge once as `(u, v)` with `u < v`, ascending.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges: Vec<_> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| (u, v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Checks every structural invariant listed on [`Graph`].
    pub fn validate(&self) -> Result<()> {
        let n = self.num_vertices;
        if self.adjacency.len() != n {
            return Err(ChromaError::invalid_graph(format!(
                "adjacency has {} lists for {} vertices",
                self.adjacency.len(),
                n
            )));
        }

        let mut arcs = HashSet::new();
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                if v >= n {
                    return Err(ChromaError::invalid_graph(format!(
                        "edge ({}, {}) references a vertex outside 0..{}",
                        u, v, n
                    )));
                }
                if u == v {
                    return Err(ChromaError::invalid_graph(format!(
                        "self-loop on vertex {}",
                        u
                    )));
                }
                if !arcs.insert((u, v)) {
                    return Err(ChromaError::invalid_graph(format!(
                        "duplicate edge ({}, {})",
                        u, v
                    )));
                }
            }
        }

        if let Some(&(u, v)) = arcs.iter().find(|&&(u, v)| !arcs.contains(&(v, u))) {
            return Err(ChromaError::invalid_graph(format!(
                "edge ({}, {}) has no reverse entry ({}, {})",
                u, v, v, u
            )));
        }

        if arcs.len() / 2 != self.num_edges {
            return Err(ChromaError::invalid_graph(format!(
                "num_edges is {} but adjacency holds {} edges",
                self.num_edges,
                arcs.len() / 2
            )));
        }

        if !self.order.is_empty() {
            check_permutation(&self.order, n)?;
        }
        Ok(())
    }
}

fn check_permutation(order: &[VertexId], num_vertices: usize) -> Result<()> {
    if order.len() != num_vertices {
        return Err(ChromaError::invalid_graph(format!(
            "visit order has {} entries for {} vertices",
            order.len(),
            num_vertices
        )));
    }
    let mut seen = vec![false; num_vertices];
    for &v in order {
        match seen.get_mut(v) {
            Some(flag) if !*flag => *flag = true,
            Some(_) => {
                return Err(ChromaError::invalid_graph(format!(
                    "vertex {} appears twice in visit order",
                    v
                )))
            }
            None => {
                return Err(ChromaError::invalid_graph(format!(
                    "visit order names vertex {} outside 0..{}",
                    v, num_vertices
                )))
            }
        }
    }
    Ok(())
}

/// Summary statistics reported alongside a coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of vertices
    pub num_vertices: usize,

    /// Number of edges
    pub num_edges: usize,

    /// Graph density: |E| / (|V| * (|V| - 1) / 2)
    pub density: f64,

    /// Average vertex degree
    pub avg_degree: f64,

    /// Maximum vertex degree
    pub max_degree: usize,
}

impl GraphStats {
    /// Computes statistics from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.num_vertices;
        let avg_degree = if n > 0 {
            (2.0 * graph.num_edges as f64) / n as f64
        } else {
            0.0
        };

        Self {
            num_vertices: n,
            num_edges: graph.num_edges,
            density: graph.density(),
            avg_degree,
            max_degree: graph.max_degree(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn test_add_edge_is_undirected() {
        let mut graph = Graph::new(3);
        assert!(graph.add_edge(0, 2).unwrap());
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert_eq!(graph.num_edges, 1);

        // Same edge, either orientation
        assert!(!graph.add_edge(0, 2).unwrap());
        assert!(!graph.add_edge(2, 0).unwrap());
        assert_eq!(graph.num_edges, 1);
    }

    #[test]
    fn test_add_edge_rejects_bad_endpoints() {
        let mut graph = Graph::new(3);
        assert!(matches!(
            graph.add_edge(0, 3),
            Err(ChromaError::InvalidGraph(_))
        ));
        assert!(matches!(
            graph.add_edge(1, 1),
            Err(ChromaError::InvalidGraph(_))
        ));
        assert_eq!(graph.num_edges, 0);
    }

    #[test]
    fn test_edges_listed_once() {
        let graph = Graph::from_edges(4, &[(2, 3), (1, 0), (0, 2)]).unwrap();
        assert_eq!(graph.edges(), vec![(0, 1), (0, 2), (2, 3)]);
    }

    #[test]
    fn test_degree_and_density() {
        let graph = triangle();
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.max_degree(), 2);
        assert!((graph.density() - 1.0).abs() < 1e-12);

        assert_eq!(Graph::new(0).max_degree(), 0);
        assert_eq!(Graph::new(1).density(), 0.0);
        assert_eq!(graph.degree(42), 0);
    }

    #[test]
    fn test_default_visit_order_is_ascending() {
        let graph = Graph::new(4);
        assert_eq!(graph.visit_order().as_ref(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_with_order_requires_permutation() {
        let graph = triangle().with_order(vec![2, 0, 1]).unwrap();
        assert_eq!(graph.visit_order().as_ref(), &[2, 0, 1]);

        assert!(triangle().with_order(vec![0, 1]).is_err());
        assert!(triangle().with_order(vec![0, 1, 1]).is_err());
        assert!(triangle().with_order(vec![0, 1, 3]).is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(triangle().validate().is_ok());
        assert!(Graph::new(0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_asymmetric_adjacency() {
        let graph = Graph {
            num_vertices: 2,
            num_edges: 1,
            adjacency: vec![vec![1], vec![]],
            order: Vec::new(),
        };
        let err = graph.validate().unwrap_err();
        assert!(err.to_string().contains("no reverse entry"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_and_loops() {
        let out_of_range = Graph {
            num_vertices: 2,
            num_edges: 1,
            adjacency: vec![vec![5], vec![]],
            order: Vec::new(),
        };
        assert!(matches!(
            out_of_range.validate(),
            Err(ChromaError::InvalidGraph(_))
        ));

        let self_loop = Graph {
            num_vertices: 1,
            num_edges: 1,
            adjacency: vec![vec![0]],
            order: Vec::new(),
        };
        assert!(self_loop.validate().is_err());

        let short = Graph {
            num_vertices: 3,
            num_edges: 0,
            adjacency: vec![vec![], vec![]],
            order: Vec::new(),
        };
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_edge_count() {
        let mut graph = triangle();
        graph.num_edges = 5;
        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_graph_stats() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let stats = GraphStats::from_graph(&graph);
        assert_eq!(stats.num_vertices, 4);
        assert_eq!(stats.num_edges, 3);
        assert_eq!(stats.max_degree, 2);
        assert!((stats.avg_degree - 1.5).abs() < 1e-12);
        assert!((stats.density - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serde_omits_default_order() {
        let graph = triangle();
        let json = serde_json::to_string(&graph).unwrap();
        assert!(!json.contains("order"));

        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }
}
