//! # chroma-core
//!
//! Greedy graph coloring engine.
//!
//! - **Types**: [`Graph`] with an explicit visit order, [`GraphStats`]
//! - **Coloring**: first-fit [`greedy_coloring`], [`is_valid_coloring`] and
//!   conflict diagnostics
//! - **Solution**: [`ColoringSolution`], the summary handed to presenters
//! - **Errors**: [`ChromaError`] and the crate [`Result`] alias
//!
//! ```
//! use chroma_core::{greedy_coloring, is_valid_coloring, Graph};
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])?;
//! let coloring = greedy_coloring(&graph)?;
//! assert!(is_valid_coloring(&graph, &coloring));
//! assert_eq!(coloring.num_colors(), 3);
//! # Ok::<(), chroma_core::ChromaError>(())
//! ```

pub mod coloring;
pub mod errors;
pub mod solution;
pub mod types;

pub use coloring::{
    adjacent_colors, find_conflicts, first_fit, greedy_coloring, is_valid_coloring,
    uncolored_vertices, Coloring,
};
pub use errors::{ChromaError, Result};
pub use solution::{max_colors_bound, ColoringSolution};
pub use types::{Color, Graph, GraphStats, VertexId};
