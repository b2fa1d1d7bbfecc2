//! Diagnostic channel.
//!
//! A diagnostic sink is an append-only stream of human-readable messages,
//! partitioned by severity. Two severities are used: informational and
//! error.
//!
//! - [`TracingSink`] forwards each message to `tracing`, tagged with the
//!   page it concerns.
//! - [`RecordingSink`] keeps every message in order, for callers that want
//!   to inspect what was reported.
//!
//! # Example
//!
//! ```rust
//! use readyprobe_core::{DiagnosticSink, RecordingSink, Severity};
//!
//! let mut sink = RecordingSink::new();
//! sink.info("init success");
//! sink.error("content not found");
//!
//! assert_eq!(sink.messages(), vec!["init success", "content not found"]);
//! assert_eq!(sink.count(Severity::Error), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Error-level message.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single message emitted on the diagnostic channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Message severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create an informational diagnostic.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Create an error-level diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Output side of the diagnostic channel.
pub trait DiagnosticSink {
    /// Emit an informational message.
    fn info(&mut self, message: &str);

    /// Emit an error-level message.
    fn error(&mut self, message: &str);

    /// Emit a prepared diagnostic at its own severity.
    fn emit(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Info => self.info(&diagnostic.message),
            Severity::Error => self.error(&diagnostic.message),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn info(&mut self, message: &str) {
        (**self).info(message);
    }

    fn error(&mut self, message: &str) {
        (**self).error(message);
    }
}

/// Sink that records every diagnostic in emission order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    entries: Vec<Diagnostic>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics, oldest first.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Recorded messages without severities.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.message.as_str()).collect()
    }

    /// Number of diagnostics recorded at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    /// Consume the sink, returning its diagnostics.
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl DiagnosticSink for RecordingSink {
    fn info(&mut self, message: &str) {
        self.entries.push(Diagnostic::info(message));
    }

    fn error(&mut self, message: &str) {
        self.entries.push(Diagnostic::error(message));
    }
}

/// Sink that forwards diagnostics to `tracing` events.
#[derive(Clone, Debug)]
pub struct TracingSink {
    page: String,
}

impl TracingSink {
    /// Create a sink whose events carry `page` as a field.
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }

    /// The page label attached to every event.
    pub fn page(&self) -> &str {
        &self.page
    }
}

impl DiagnosticSink for TracingSink {
    fn info(&mut self, message: &str) {
        tracing::info!(page = %self.page, "{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::error!(page = %self.page, "{message}");
    }
}

// ============================================================================
// Tests
// ============================================================================
