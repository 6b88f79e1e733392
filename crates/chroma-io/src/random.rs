//! Random graph generation (Erdős–Rényi G(n, p)).

use chroma_core::{ChromaError, Graph, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters for a random graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphConfig {
    /// Number of vertices
    #[serde(default = "default_num_vertices")]
    pub num_vertices: usize,

    /// Probability that any given pair of vertices is joined
    #[serde(default = "default_edge_probability")]
    pub edge_probability: f64,

    /// Seed for reproducible graphs (entropy when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_num_vertices() -> usize {
    10
}

fn default_edge_probability() -> f64 {
    0.5
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            num_vertices: default_num_vertices(),
            edge_probability: default_edge_probability(),
            seed: None,
        }
    }
}

impl RandomGraphConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.edge_probability.is_finite()
            || !(0.0..=1.0).contains(&self.edge_probability)
        {
            return Err(ChromaError::config(format!(
                "edge_probability must be in [0.0, 1.0], got {}",
                self.edge_probability
            )));
        }
        Ok(())
    }

    /// Builds the graph, seeding from `seed` or from entropy.
    pub fn generate(&self) -> Result<Graph> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let graph = generate_random_graph(self.num_vertices, self.edge_probability, &mut rng)?;

        log::info!(
            "Generated a random graph with {} nodes and edge probability {:.2} ({} edges)",
            self.num_vertices,
            self.edge_probability,
            graph.num_edges
        );
        Ok(graph)
    }
}

/// G(n, p): each pair `i < j`, in lexicographic order, is joined when one
/// uniform draw from `[0, 1)` falls below `edge_probability`.
pub fn generate_random_graph<R: Rng>(
    num_vertices: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<Graph> {
    RandomGraphConfig {
        num_vertices,
        edge_probability,
        seed: None,
    }
    .validate()?;

    let mut graph = Graph::new(num_vertices);
    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            if rng.gen::<f64>() < edge_probability {
                graph.add_edge(i, j)?;
            }
        }
    }
    Ok(graph)
}
