//! # chroma-io
//!
//! Graph providers for the chroma coloring engine.
//!
//! - [`matrix`]: adjacency-matrix text, as typed by a user
//! - [`random`]: G(n, p) random graphs, seeded or from entropy
//! - [`dimacs`]: DIMACS `.col` benchmark files
//! - [`json`]: serialized graphs and externally supplied colorings
//!
//! Every provider returns a well-formed [`chroma_core::Graph`] or a
//! [`chroma_core::ChromaError`].

pub mod dimacs;
pub mod json;
pub mod matrix;
pub mod random;

pub use dimacs::{
    parse_dimacs, parse_dimacs_file, parse_dimacs_file_with_limit, parse_dimacs_str,
    parse_dimacs_with_limit,
};
pub use json::{load_coloring_json, load_graph_json, parse_coloring_json, parse_graph_json};
pub use matrix::{parse_adjacency_matrix, parse_adjacency_matrix_file};
pub use random::{generate_random_graph, RandomGraphConfig};
