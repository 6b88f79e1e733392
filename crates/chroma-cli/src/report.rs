//! Run report: text rendering and JSONL telemetry.

use anyhow::{Context, Result};
use chroma_core::{max_colors_bound, ColoringSolution, Graph, GraphStats};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Everything the CLI shows about one coloring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringReport {
    /// RFC 3339 UTC timestamp
    pub timestamp: String,

    /// Graph source mode (matrix, random, dimacs, json)
    pub mode: String,

    /// Input path, or a description of the generated graph
    pub source: String,

    /// True when the coloring came from a file rather than the engine
    pub external_coloring: bool,

    pub stats: GraphStats,

    /// max_degree + 1
    pub color_bound: usize,

    pub solution: ColoringSolution,
}

impl ColoringReport {
    pub fn new(
        graph: &Graph,
        mode: impl Into<String>,
        source: impl Into<String>,
        external_coloring: bool,
        solution: ColoringSolution,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            mode: mode.into(),
            source: source.into(),
            external_coloring,
            stats: GraphStats::from_graph(graph),
            color_bound: max_colors_bound(graph),
            solution,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let s = &self.stats;
        let _ = writeln!(
            out,
            "Graph ({}): {} vertices, {} edges, density {:.3}, max degree {}",
            self.source, s.num_vertices, s.num_edges, s.density, s.max_degree
        );
        let _ = writeln!(out, "Coloring: {}", self.solution.coloring);
        let _ = writeln!(out, "Valid: {}", self.solution.valid);
        let _ = writeln!(
            out,
            "Number of Colors Used (K): {}",
            self.solution.num_colors
        );

        if !self.solution.is_complete() {
            if !self.solution.conflicts.is_empty() {
                let edges: Vec<String> = self
                    .solution
                    .conflicts
                    .iter()
                    .map(|(u, v)| format!("({}, {})", u, v))
                    .collect();
                let _ = writeln!(out, "Conflicting edges: {}", edges.join(", "));
            }
            if !self.solution.uncolored.is_empty() {
                let _ = writeln!(out, "Uncolored vertices: {:?}", self.solution.uncolored);
            }
        }
        if !self.external_coloring {
            let _ = writeln!(
                out,
                "Greedy bound (max degree + 1): {}, time {:.3}ms",
                self.color_bound, self.solution.computation_time_ms
            );
        }
        out
    }

    /// Appends this report as one JSON line.
    pub fn append_telemetry(&self, path: &Path) -> Result<()> {
        let line = serde_json::to_string(self)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open telemetry file {}", path.display()))?;
        writeln!(file, "{}", line)
            .with_context(|| format!("Failed to write telemetry to {}", path.display()))?;
        log::debug!("Telemetry appended to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::Coloring;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn test_render_greedy_triangle() {
        let graph = triangle();
        let solution = ColoringSolution::greedy(&graph).unwrap();
        let text = ColoringReport::new(&graph, "matrix", "stdin", false, solution).render_text();

        assert!(text.contains("Coloring: {0: 0, 1: 1, 2: 2}"));
        assert!(text.contains("Valid: true"));
        assert!(text.contains("Number of Colors Used (K): 3"));
        assert!(text.contains("Greedy bound (max degree + 1): 3"));
        assert!(!text.contains("Conflicting edges"));
    }

    #[test]
    fn test_render_invalid_external_coloring() {
        let graph = triangle();
        let solution =
            ColoringSolution::evaluate(&graph, Coloring::new().with(0, 0).with(1, 0));
        let text = ColoringReport::new(&graph, "json", "g.json", true, solution).render_text();

        assert!(text.contains("Valid: false"));
        assert!(text.contains("Conflicting edges: (0, 1)"));
        assert!(text.contains("Uncolored vertices: [2]"));
        assert!(!text.contains("Greedy bound"));
    }

    #[test]
    fn test_render_partial_but_valid_coloring() {
        let graph = triangle();
        let solution =
            ColoringSolution::evaluate(&graph, Coloring::new().with(0, 0).with(1, 1));
        let text = ColoringReport::new(&graph, "json", "g.json", true, solution).render_text();

        assert!(text.contains("Valid: true"));
        assert!(!text.contains("Conflicting edges"));
        assert!(text.contains("Uncolored vertices: [2]"));
    }

    #[test]
    fn test_append_telemetry_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.jsonl");
        let graph = triangle();

        for _ in 0..2 {
            let solution = ColoringSolution::greedy(&graph).unwrap();
            ColoringReport::new(&graph, "random", "G(3, 1.00)", false, solution)
                .append_telemetry(&path)
                .unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let record: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(record["mode"], "random");
        assert_eq!(record["solution"]["num_colors"], 3);
        assert_eq!(record["solution"]["valid"], true);
        assert_eq!(record["solution"]["coloring"]["2"], 2);
        assert_eq!(record["color_bound"], 3);
    }
}
