//! JSON graph and coloring files.
//!
//! A graph file is a serialized [`Graph`]; a coloring file is an object
//! mapping vertex ids to colors, e.g. `{"0": 0, "1": 1, "2": 0}`.

use chroma_core::{Coloring, Graph, Result};
use std::fs;
use std::path::Path;

/// Deserializes a graph and checks it is well formed.
pub fn parse_graph_json(text: &str) -> Result<Graph> {
    let graph: Graph = serde_json::from_str(text)?;
    graph.validate()?;
    Ok(graph)
}

pub fn load_graph_json<P: AsRef<Path>>(path: P) -> Result<Graph> {
    parse_graph_json(&fs::read_to_string(path.as_ref())?)
}

/// Deserializes an externally supplied coloring. No graph checks happen here.
pub fn parse_coloring_json(text: &str) -> Result<Coloring> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_coloring_json<P: AsRef<Path>>(path: P) -> Result<Coloring> {
    parse_coloring_json(&fs::read_to_string(path.as_ref())?)
}
