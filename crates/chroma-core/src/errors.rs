//! Error types for chroma.
//!
//! Coloring itself never fails on a well-formed graph. Every variant here
//! describes bad input handed to the engine or to one of the graph providers.

use thiserror::Error;

/// Unified error type for all chroma operations.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// The graph violates a structural invariant (endpoint out of range,
    /// self-loop, asymmetric adjacency, bad visit order).
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Malformed user input (adjacency matrix text, DIMACS lines)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors (graph files, coloring files, telemetry)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ChromaError {
    /// Creates an invalid-graph error.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        ChromaError::InvalidGraph(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ChromaError::ValidationError(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ChromaError::ConfigError(message.into())
    }

    /// True when the error is the upstream provider's fault rather than an
    /// environment problem (file missing, unreadable, ...).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ChromaError::InvalidGraph(_) | ChromaError::ValidationError(_)
        )
    }

    /// Returns a user-friendly error message with actionable guidance.
    pub fn user_message(&self) -> String {
        match self {
            ChromaError::InvalidGraph(msg) => {
                format!(
                    "Invalid graph: {}\n\
                     → Edges must connect two distinct vertices in 0..n.\n\
                     → Adjacency lists must be symmetric (undirected graph).",
                    msg
                )
            }
            ChromaError::ValidationError(msg) => {
                format!(
                    "Validation error: {}\n\
                     → Adjacency matrices are n rows of n integers separated by spaces.",
                    msg
                )
            }
            ChromaError::ConfigError(msg) => {
                format!(
                    "Configuration error: {}\n\
                     → Review your configuration file; edge probability must lie in [0.0, 1.0].",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for chroma operations.
pub type Result<T> = std::result::Result<T, ChromaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let graph_err = ChromaError::invalid_graph("edge (0, 7) out of range");
        assert!(matches!(graph_err, ChromaError::InvalidGraph(_)));

        let validation_err = ChromaError::validation("row 2 has 3 entries");
        assert!(matches!(validation_err, ChromaError::ValidationError(_)));

        let config_err = ChromaError::config("edge_probability = 1.5");
        assert!(matches!(config_err, ChromaError::ConfigError(_)));
    }

    #[test]
    fn test_input_errors() {
        assert!(ChromaError::invalid_graph("self-loop").is_input_error());
        assert!(ChromaError::validation("bad row").is_input_error());

        let io = ChromaError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_input_error());
        assert!(!ChromaError::config("edge_probability = 2").is_input_error());
    }

    #[test]
    fn test_user_message_guidance() {
        let msg = ChromaError::invalid_graph("self-loop on vertex 3").user_message();
        assert!(msg.starts_with("Invalid graph: self-loop on vertex 3"));
        assert!(msg.contains("distinct vertices"));

        let io = ChromaError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.user_message(), "I/O error: gone");
    }
}
