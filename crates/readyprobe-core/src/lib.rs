//! Readyprobe Core — shared types, errors, configuration, and diagnostics.
//!
//! This crate provides the foundational types used across all readyprobe
//! crates. It has no internal readyprobe dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Probe configuration and content size measures
//! - [`diagnostics`]: Severity-partitioned diagnostic sinks

pub mod config;
pub mod diagnostics;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{CONFIG_ENV_VAR, DEFAULT_SELECTOR, ProbeConfig, SizeMeasure};
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, Severity, TracingSink};
pub use error::{Error, Result};
