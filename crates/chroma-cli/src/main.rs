//! chroma CLI entry point.
//!
//! Loads or generates a graph, colors it with the greedy first-fit engine
//! (or checks a supplied coloring), and reports validity and color count.

mod config;
mod report;

use anyhow::{Context, Result};
use chroma_core::{ChromaError, ColoringSolution, Graph};
use chroma_io::{
    load_coloring_json, load_graph_json, parse_adjacency_matrix, parse_dimacs_file_with_limit,
};
use clap::Parser;
use config::{ChromaConfig, VALID_MODES};
use report::ColoringReport;
use std::path::Path;

/// chroma version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "chroma-cli")]
#[command(version = VERSION)]
#[command(about = "Greedy first-fit graph coloring", long_about = None)]
struct Args {
    /// Graph source: matrix, random (default), dimacs, json
    ///
    /// - matrix: adjacency matrix text from --input, or stdin
    /// - random: G(n, p) graph from --vertices / --edge-probability / --seed
    /// - dimacs: DIMACS .col file from --input
    /// - json: serialized graph from --input
    #[arg(short, long)]
    mode: Option<String>,

    /// Input graph file path ("-" or absent reads stdin in matrix mode)
    #[arg(short, long)]
    input: Option<String>,

    /// Number of vertices (random mode), or expected matrix size (matrix mode)
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    /// Edge probability for random graphs, in [0.0, 1.0]
    #[arg(short = 'p', long)]
    edge_probability: Option<f64>,

    /// Seed for reproducible random graphs
    #[arg(long)]
    seed: Option<u64>,

    /// Validate this JSON coloring ({"vertex": color, ...}) instead of computing one
    #[arg(long)]
    coloring: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Append a JSON line describing the run to this file
    #[arg(long)]
    telemetry: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Command-line flags take precedence over the configuration file.
    fn apply_to(&self, config: &mut ChromaConfig) {
        if let Some(ref mode) = self.mode {
            config.global.mode = mode.clone();
        }
        if config.global.mode == "random" {
            if let Some(n) = self.vertices {
                config.random.num_vertices = n;
            }
        }
        if let Some(p) = self.edge_probability {
            config.random.edge_probability = p;
        }
        if self.seed.is_some() {
            config.random.seed = self.seed;
        }
        if self.telemetry.is_some() {
            config.output.telemetry_path = self.telemetry.clone();
        }
        if self.json {
            config.output.json = true;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("chroma {} - Starting", VERSION);

    let mut config = match args.config {
        Some(ref path) => ChromaConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => ChromaConfig::default(),
    };
    args.apply_to(&mut config);
    config.validate()?;
    if config.global.mode == "matrix" {
        if let Some(n) = args.vertices {
            if n > config.global.max_vertices {
                anyhow::bail!(
                    "--vertices {} exceeds max_vertices = {}",
                    n,
                    config.global.max_vertices
                );
            }
        }
    }

    let (graph, source) = load_graph(&args, &config)?;
    // Matrix and JSON inputs only reveal their size once parsed.
    if graph.num_vertices > config.global.max_vertices {
        anyhow::bail!(
            "Graph has {} vertices, above max_vertices = {}",
            graph.num_vertices,
            config.global.max_vertices
        );
    }

    let solution = match args.coloring {
        Some(ref path) => {
            log::info!("Validating coloring from {}", path);
            let coloring = load_coloring_json(path)
                .with_context(|| format!("Failed to load coloring {}", path))?;
            ColoringSolution::evaluate(&graph, coloring)
        }
        None => ColoringSolution::greedy(&graph)?,
    };

    let report = ColoringReport::new(
        &graph,
        config.global.mode.as_str(),
        source,
        args.coloring.is_some(),
        solution,
    );

    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if let Some(ref path) = config.output.telemetry_path {
        report.append_telemetry(Path::new(path))?;
    }

    Ok(())
}

/// Obtains the graph for the configured mode, plus a description of where it came from.
fn load_graph(args: &Args, config: &ChromaConfig) -> Result<(Graph, String)> {
    match config.global.mode.as_str() {
        "matrix" => {
            let (text, source) = match args.input.as_deref() {
                None | Some("-") => (
                    std::io::read_to_string(std::io::stdin())
                        .context("Failed to read adjacency matrix from stdin")?,
                    "stdin".to_string(),
                ),
                Some(path) => (
                    std::fs::read_to_string(path)
                        .with_context(|| format!("Failed to read {}", path))?,
                    path.to_string(),
                ),
            };
            let graph = parse_adjacency_matrix(&text, args.vertices).map_err(provider_error)?;
            Ok((graph, source))
        }
        "random" => {
            let random = &config.random;
            let graph = random.generate()?;
            let source = format!(
                "G({}, {:.2}){}",
                random.num_vertices,
                random.edge_probability,
                random
                    .seed
                    .map(|s| format!(" seed {}", s))
                    .unwrap_or_default()
            );
            Ok((graph, source))
        }
        "dimacs" => {
            let path = require_input(args)?;
            let graph = parse_dimacs_file_with_limit(path, config.global.max_vertices)
                .map_err(provider_error)
                .with_context(|| format!("Failed to parse DIMACS file {}", path))?;
            Ok((graph, path.to_string()))
        }
        "json" => {
            let path = require_input(args)?;
            let graph = load_graph_json(path)
                .map_err(provider_error)
                .with_context(|| format!("Failed to load graph {}", path))?;
            Ok((graph, path.to_string()))
        }
        unknown => {
            anyhow::bail!(
                "Unknown mode: {}. Valid modes: {}",
                unknown,
                VALID_MODES.join(", ")
            );
        }
    }
}

/// Bad input gets the guidance text; anything else keeps its source chain.
fn provider_error(e: ChromaError) -> anyhow::Error {
    if e.is_input_error() {
        anyhow::anyhow!(e.user_message())
    } else {
        anyhow::Error::from(e)
    }
}

fn require_input(args: &Args) -> Result<&str> {
    args.input
        .as_deref()
        .context("--input is required for this mode")
}
