//! Error types for readyprobe-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for readyprobe-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readyprobe-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the probe libraries
    #[error(transparent)]
    Probe(#[from] readyprobe::Error),

    /// Report could not be rendered as JSON
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report could not be written to the output stream
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// `scan` was pointed at something other than a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// Offending path
        path: PathBuf,
    },
}
