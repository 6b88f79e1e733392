//! Adjacency-matrix text input.
//!
//! One matrix row per line, entries are whitespace-separated integers:
//!
//! ```text
//! 0 1 1
//! 1 0 1
//! 1 1 0
//! ```
//!
//! Only the strict upper triangle is read. An entry of exactly `1` at
//! `(i, j)` with `i < j` adds the edge `{i, j}`; any other integer adds
//! nothing. The diagonal and the lower triangle are ignored.

use chroma_core::{ChromaError, Graph, Result};
use std::fs;
use std::path::Path;

/// Parses adjacency-matrix text into a graph.
///
/// `expected_vertices`, when given, must match the matrix dimension.
pub fn parse_adjacency_matrix(text: &str, expected_vertices: Option<usize>) -> Result<Graph> {
    let text = text.trim();
    // An all-blank input is the empty matrix. Blank lines inside the matrix
    // are empty rows and fail the dimension check below.
    let rows = if text.is_empty() {
        Vec::new()
    } else {
        text.lines()
            .enumerate()
            .map(|(i, line)| parse_row(line, i + 1))
            .collect::<Result<Vec<_>>>()?
    };
    let n = rows.len();

    if let Some(expected) = expected_vertices {
        if expected != n {
            return Err(ChromaError::validation(format!(
                "Adjacency matrix dimensions do not match the number of nodes: \
                 expected {} rows, got {}",
                expected, n
            )));
        }
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(ChromaError::validation(format!(
            "Adjacency matrix dimensions do not match the number of nodes: \
             row {} has {} entries, expected {}",
            i + 1,
            row.len(),
            n
        )));
    }

    let mut graph = Graph::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rows[i][j] == 1 {
                graph.add_edge(i, j)?;
            }
            if rows[i][j] != rows[j][i] {
                log::debug!(
                    "Asymmetric entries at ({}, {}): {} vs {}; using upper triangle",
                    i,
                    j,
                    rows[i][j],
                    rows[j][i]
                );
            }
        }
    }

    log::debug!(
        "Parsed {}x{} adjacency matrix with {} edges",
        n,
        n,
        graph.num_edges
    );
    Ok(graph)
}

/// Reads an adjacency matrix from a file.
pub fn parse_adjacency_matrix_file<P: AsRef<Path>>(
    path: P,
    expected_vertices: Option<usize>,
) -> Result<Graph> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_adjacency_matrix(&text, expected_vertices)
}

fn parse_row(line: &str, line_num: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                ChromaError::validation(format!(
                    "Invalid input format at row {}: '{}' is not an integer. \
                     Please enter integers separated by spaces.",
                    line_num, token
                ))
            })
        })
        .collect()
}
