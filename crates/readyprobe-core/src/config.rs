//! Probe configuration.
//!
//! Configuration is a small TOML document:
//!
//! ```toml
//! selector = "main"
//! size_measure = "chars"
//! ```
//!
//! Resolution order for the config file is: explicit path, then the
//! `READYPROBE_CONFIG` environment variable, then built-in defaults.
//!
//! # Example
//!
//! ```rust
//! use readyprobe_core::{ProbeConfig, SizeMeasure};
//!
//! let config = ProbeConfig::from_toml_str("size_measure = \"bytes\"").unwrap();
//! assert_eq!(config.selector, "main");
//! assert_eq!(config.size_measure, SizeMeasure::Bytes);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "READYPROBE_CONFIG";

/// Selector for the primary content region.
pub const DEFAULT_SELECTOR: &str = "main";

/// How the size of a content region's serialized markup is counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeMeasure {
    /// Unicode scalar values.
    #[default]
    #[serde(rename = "chars")]
    Chars,
    /// UTF-16 code units, matching a browser's `innerHTML.length`.
    #[serde(rename = "utf16")]
    Utf16Units,
    /// UTF-8 bytes.
    #[serde(rename = "bytes")]
    Bytes,
}

impl SizeMeasure {
    /// Measure `markup` in this unit.
    pub fn measure(self, markup: &str) -> usize {
        match self {
            SizeMeasure::Chars => markup.chars().count(),
            SizeMeasure::Utf16Units => markup.encode_utf16().count(),
            SizeMeasure::Bytes => markup.len(),
        }
    }

    /// Human-readable unit name used in diagnostics.
    pub fn unit(self) -> &'static str {
        match self {
            SizeMeasure::Chars => "characters",
            SizeMeasure::Utf16Units => "UTF-16 code units",
            SizeMeasure::Bytes => "bytes",
        }
    }

    /// Config/CLI spelling of this measure.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeMeasure::Chars => "chars",
            SizeMeasure::Utf16Units => "utf16",
            SizeMeasure::Bytes => "bytes",
        }
    }
}

impl fmt::Display for SizeMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chars" | "characters" => Ok(SizeMeasure::Chars),
            "utf16" | "utf-16" => Ok(SizeMeasure::Utf16Units),
            "bytes" => Ok(SizeMeasure::Bytes),
            other => Err(Error::config(format!(
                "Unknown size measure '{other}' (expected chars, utf16, or bytes)"
            ))),
        }
    }
}

/// Configuration for a readiness probe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeConfig {
    /// Selector for the primary content region.
    pub selector: String,
    /// Unit used to report the region's size.
    pub size_measure: SizeMeasure,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            size_measure: SizeMeasure::default(),
        }
    }
}

impl ProbeConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize this config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Pick the config file to read, if any.
    ///
    /// An explicit path wins over the environment value. Empty environment
    /// values are ignored.
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
    }

    /// Load configuration, falling back to defaults when no file is named.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit, std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => {
                log::debug!("Loading probe config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
