//! Greedy first-fit coloring and coloring validation.
//!
//! Vertices are visited once, in the graph's [`visit_order`](Graph::visit_order).
//! Each vertex takes the smallest color not already used by a neighbor that
//! was visited before it. The result is a proper coloring with at most
//! `max_degree + 1` colors. Nothing here looks for fewer colors: changing the
//! visit order changes the result, and that is expected.
//!
//! ## Unassigned vertices
//! [`is_valid_coloring`] accepts partial colorings. A vertex with no color
//! never matches another vertex, not even a second uncolored one, so missing
//! entries are never reported as conflicts. Use [`uncolored_vertices`] to
//! check completeness separately.

use crate::errors::Result;
use crate::types::{Color, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Mapping from vertex to color.
///
/// Entries are kept in ascending vertex order. Once a vertex has a color,
/// [`Coloring::with`] never replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring {
    colors: BTreeMap<VertexId, Color>,
}

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total coloring of `0..colors.len()` from a per-vertex color vector.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        colors.into_iter().enumerate().collect()
    }

    /// Returns the coloring extended with `vertex -> color`.
    ///
    /// A vertex that already has a color keeps it.
    #[must_use]
    pub fn with(mut self, vertex: VertexId, color: Color) -> Self {
        self.colors.entry(vertex).or_insert(color);
        self
    }

    pub fn get(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(&vertex).copied()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.colors.contains_key(&vertex)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(vertex, color)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.colors.iter().map(|(&v, &c)| (v, c))
    }

    /// Number of distinct colors used.
    pub fn num_colors(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }
}

impl FromIterator<(VertexId, Color)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (VertexId, Color)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Coloring::new(), |coloring, (v, c)| coloring.with(v, c))
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (v, c)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", v, c)?;
        }
        write!(f, "}}")
    }
}

/// Colors already taken by the neighbors of `vertex`.
///
/// Neighbors without a color contribute nothing.
pub fn adjacent_colors(graph: &Graph, vertex: VertexId, coloring: &Coloring) -> HashSet<Color> {
    graph
        .neighbors(vertex)
        .iter()
        .filter_map(|&neighbor| coloring.get(neighbor))
        .collect()
}

/// Smallest non-negative color not in `taken`.
pub fn first_fit(taken: &HashSet<Color>) -> Color {
    let mut color = 0;
    while taken.contains(&color) {
        color += 1;
    }
    color
}

/// Colors every vertex of `graph` with the greedy first-fit rule.
///
/// Fails only if the graph itself is malformed, in which case the error is
/// [`ChromaError::InvalidGraph`](crate::ChromaError::InvalidGraph).
pub fn greedy_coloring(graph: &Graph) -> Result<Coloring> {
    graph.validate()?;

    let coloring = graph
        .visit_order()
        .iter()
        .fold(Coloring::new(), |coloring, &vertex| {
            let color = first_fit(&adjacent_colors(graph, vertex, &coloring));
            coloring.with(vertex, color)
        });

    log::debug!(
        "Greedy coloring: {} vertices, {} edges -> {} colors",
        graph.num_vertices,
        graph.num_edges,
        coloring.num_colors()
    );

    Ok(coloring)
}

/// Edges whose endpoints share a color.
///
/// Endpoints without a color are never in conflict.
pub fn find_conflicts(graph: &Graph, coloring: &Coloring) -> Vec<(VertexId, VertexId)> {
    graph
        .edges()
        .into_iter()
        .filter(|&(u, v)| match (coloring.get(u), coloring.get(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false,
        })
        .collect()
}

/// True when no edge of `graph` joins two vertices of the same color.
///
/// Never fails: colorings that skip vertices or mention unknown ones are
/// still judged edge by edge.
pub fn is_valid_coloring(graph: &Graph, coloring: &Coloring) -> bool {
    graph.adjacency.iter().enumerate().all(|(u, neighbors)| {
        neighbors.iter().all(|&v| match (coloring.get(u), coloring.get(v)) {
            (Some(cu), Some(cv)) => cu != cv,
            _ => true,
        })
    })
}

/// Vertices of `graph` with no color, in ascending order.
pub fn uncolored_vertices(graph: &Graph, coloring: &Coloring) -> Vec<VertexId> {
    (0..graph.num_vertices)
        .filter(|&v| !coloring.contains(v))
        .collect()
}
