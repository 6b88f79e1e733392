//! DIMACS `.col` graph reader.
//!
//! - `c ...` lines are comments
//! - `p edge N M` declares N vertices and M edges
//! - `e U V` declares an edge between U and V (1-indexed)
//!
//! ```text
//! c Triangle graph example
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```
//!
//! Duplicate edges are collapsed and self-loops are skipped with a warning.
//! Unknown line types are ignored. Problem lines declaring more than the
//! vertex limit ([`DEFAULT_MAX_VERTICES`] unless given) are rejected before
//! any allocation.

use chroma_core::{ChromaError, Graph, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Vertex limit applied when the caller does not pass one.
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;

/// Parses a DIMACS graph from a string.
pub fn parse_dimacs_str(content: &str) -> Result<Graph> {
    parse_dimacs(content.as_bytes())
}

/// Parses a DIMACS `.col` file.
pub fn parse_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    parse_dimacs_file_with_limit(path, DEFAULT_MAX_VERTICES)
}

/// Parses a DIMACS `.col` file declaring at most `max_vertices` vertices.
pub fn parse_dimacs_file_with_limit<P: AsRef<Path>>(path: P, max_vertices: usize) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        log::error!("Failed to open DIMACS file '{}': {}", path.display(), e);
        ChromaError::IoError(e)
    })?;
    parse_dimacs_with_limit(BufReader::new(file), max_vertices)
}

/// Parses DIMACS text from any buffered reader.
pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<Graph> {
    parse_dimacs_with_limit(reader, DEFAULT_MAX_VERTICES)
}

/// Parses DIMACS text, refusing problem lines above `max_vertices`.
pub fn parse_dimacs_with_limit<R: BufRead>(reader: R, max_vertices: usize) -> Result<Graph> {
    let mut graph: Option<Graph> = None;
    let mut declared_edges = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        let mut fields = line.split_whitespace();

        match fields.next() {
            None | Some("c") => {}
            Some("p") => {
                let fields: Vec<&str> = fields.collect();
                if fields.len() < 3 {
                    return Err(ChromaError::validation(format!(
                        "Invalid problem line at line {}: expected 'p edge N M', got '{}'",
                        line_num,
                        line.trim()
                    )));
                }
                if fields[0] != "edge" {
                    return Err(ChromaError::validation(format!(
                        "Unsupported problem type '{}' at line {}: only 'edge' is supported",
                        fields[0], line_num
                    )));
                }
                let n = parse_count(fields[1], "vertex count", line_num)?;
                if n > max_vertices {
                    return Err(ChromaError::validation(format!(
                        "Vertex count {} at line {} exceeds the limit of {}",
                        n, line_num, max_vertices
                    )));
                }
                declared_edges = parse_count(fields[2], "edge count", line_num)?;
                graph = Some(Graph::new(n));
            }
            Some("e") => {
                let graph = graph.as_mut().ok_or_else(|| {
                    ChromaError::validation(format!(
                        "Edge at line {} before problem line (expected 'p edge N M' first)",
                        line_num
                    ))
                })?;
                let (u, v) = match (fields.next(), fields.next()) {
                    (Some(u), Some(v)) => (
                        parse_vertex(u, graph.num_vertices, line_num)?,
                        parse_vertex(v, graph.num_vertices, line_num)?,
                    ),
                    _ => {
                        return Err(ChromaError::validation(format!(
                            "Invalid edge line at line {}: expected 'e U V', got '{}'",
                            line_num,
                            line.trim()
                        )))
                    }
                };
                if u == v {
                    log::warn!("Skipping self-loop on vertex {} at line {}", u + 1, line_num);
                    continue;
                }
                graph.add_edge(u, v)?;
            }
            Some(other) => {
                log::debug!("Ignoring DIMACS line type '{}' at line {}", other, line_num);
            }
        }
    }

    let graph = graph.ok_or_else(|| {
        ChromaError::validation("No problem line found in DIMACS input (expected 'p edge N M')")
    })?;

    if graph.num_edges != declared_edges {
        log::warn!(
            "DIMACS input declared {} edges but contains {} distinct edges",
            declared_edges,
            graph.num_edges
        );
    }
    Ok(graph)
}

fn parse_count(token: &str, what: &str, line_num: usize) -> Result<usize> {
    token.parse::<usize>().map_err(|_| {
        ChromaError::validation(format!(
            "Invalid {} '{}' at line {}: must be a non-negative integer",
            what, token, line_num
        ))
    })
}

/// 1-indexed DIMACS vertex to 0-indexed vertex.
fn parse_vertex(token: &str, num_vertices: usize, line_num: usize) -> Result<usize> {
    let id = token.parse::<usize>().map_err(|_| {
        ChromaError::validation(format!(
            "Invalid vertex ID '{}' at line {}: must be a positive integer",
            token, line_num
        ))
    })?;
    if id == 0 || id > num_vertices {
        return Err(ChromaError::validation(format!(
            "Vertex ID {} at line {} out of range [1, {}]",
            id, line_num, num_vertices
        )));
    }
    Ok(id - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn expect_validation(content: &str, needle: &str) {
        match parse_dimacs_str(content) {
            Err(ChromaError::ValidationError(message)) => assert!(
                message.contains(needle),
                "expected '{}' in '{}'",
                needle,
                message
            ),
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_triangle() {
        let graph = parse_dimacs_str("c Triangle\np edge 3 3\ne 1 2\ne 2 3\ne 1 3\n").unwrap();
        assert_eq!(graph.num_vertices, 3);
        assert_eq!(graph.edges(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_duplicates_and_self_loops() {
        let graph = parse_dimacs_str("p edge 3 4\ne 1 2\ne 2 1\ne 1 1\ne 2 3\n").unwrap();
        assert_eq!(graph.num_edges, 2);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_isolated_vertices_kept() {
        let graph = parse_dimacs_str("p edge 5 1\ne 1 2\n").unwrap();
        assert_eq!(graph.num_vertices, 5);
        assert_eq!(graph.degree(4), 0);
    }

    #[test]
    fn test_blank_lines_and_unknown_types() {
        let graph = parse_dimacs_str("\np edge 2 1\n\nn 1 5\ne 1 2\n").unwrap();
        assert_eq!(graph.num_edges, 1);
    }

    #[test]
    fn test_errors() {
        expect_validation("e 1 2\n", "before problem line");
        expect_validation("p edge 3\n", "Invalid problem line");
        expect_validation("p col 3 1\n", "Unsupported problem type");
        expect_validation("p edge x 1\n", "Invalid vertex count");
        expect_validation("p edge 3 1\ne 1\n", "Invalid edge line");
        expect_validation("p edge 3 1\ne 1 abc\n", "Invalid vertex ID");
        expect_validation("p edge 3 1\ne 1 5\n", "out of range");
        expect_validation("p edge 3 1\ne 0 1\n", "out of range");
        expect_validation("c nothing here\n", "No problem line");
    }

    #[test]
    fn test_huge_vertex_count_rejected() {
        expect_validation("p edge 18446744073709551615 0\n", "exceeds the limit");

        let result = parse_dimacs_with_limit("p edge 11 0\n".as_bytes(), 10);
        assert!(matches!(result, Err(ChromaError::ValidationError(_))));

        let graph = parse_dimacs_with_limit("p edge 10 0\n".as_bytes(), 10).unwrap();
        assert_eq!(graph.num_vertices, 10);
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"p edge 4 3\ne 1 2\ne 2 3\ne 3 4\n")
            .expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");

        let graph = parse_dimacs_file(file.path()).unwrap();
        assert_eq!(graph.num_vertices, 4);
        assert_eq!(graph.num_edges, 3);
    }

    #[test]
    fn test_missing_file() {
        let result = parse_dimacs_file("/nonexistent/path/graph.col");
        assert!(matches!(result, Err(ChromaError::IoError(_))));
    }
}
