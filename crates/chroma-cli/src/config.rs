//! Chroma Configuration Module
//!
//! serde-based TOML configuration for the command-line front end. Every
//! section is optional; command-line flags override file values.
//!
//! ```toml
//! [global]
//! mode = "random"
//! max_vertices = 5000
//!
//! [random]
//! num_vertices = 20
//! edge_probability = 0.3
//! seed = 42
//!
//! [output]
//! json = false
//! telemetry_path = "telemetry_coloring.jsonl"
//! ```

use anyhow::Result;
use chroma_io::RandomGraphConfig;
use serde::{Deserialize, Serialize};

/// Graph sources understood by the CLI.
pub const VALID_MODES: &[&str] = &["matrix", "random", "dimacs", "json"];

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChromaConfig {
    #[serde(default)]
    pub global: GlobalConfig,

    #[serde(default)]
    pub random: RandomGraphConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl ChromaConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if !VALID_MODES.contains(&self.global.mode.as_str()) {
            anyhow::bail!(
                "Unknown mode: {}. Valid modes: {}",
                self.global.mode,
                VALID_MODES.join(", ")
            );
        }
        if self.global.max_vertices == 0 {
            anyhow::bail!("global.max_vertices must be > 0");
        }
        // Rejected before any pair is drawn.
        if self.global.mode == "random" && self.random.num_vertices > self.global.max_vertices {
            anyhow::bail!(
                "random.num_vertices = {} exceeds max_vertices = {}",
                self.random.num_vertices,
                self.global.max_vertices
            );
        }
        self.random.validate()?;
        Ok(())
    }
}

// =============================================================================
// Global Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Graphs larger than this are refused before coloring.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            max_vertices: default_max_vertices(),
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the report as JSON instead of text
    #[serde(default)]
    pub json: bool,

    /// Append one JSON line per run to this file
    #[serde(default)]
    pub telemetry_path: Option<String>,
}

fn default_mode() -> String {
    "random".to_string()
}

fn default_max_vertices() -> usize {
    10_000
}
