//! Error types for readyprobe-core.
//!
//! A missing content region is never an error: it is reported through the
//! diagnostic channel. These variants cover the tooling around the probe.

use std::path::{Path, PathBuf};

/// Result type alias for readyprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in readyprobe
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A content region selector could not be parsed.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector text as given
        selector: String,
        /// Parser message
        message: String,
    },

    /// I/O error tied to a specific path
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new selector error.
    pub fn invalid_selector<S, M>(selector: S, message: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Error::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
