//! Error types for the command-line front end.

use std::path::PathBuf;

/// Errors that can occur while reading a query or printing its result.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The query file could not be read.
    #[error("Failed to read query file '{path}': {source}")]
    ReadFile {
        /// Path given with `--file`.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read query from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No query text, no file, and stdin is a terminal.
    #[error("No query given: pass SQL text, use --file, or pipe it on stdin")]
    NoInput,
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
