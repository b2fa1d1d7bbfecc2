//! The readiness probe.
//!
//! A probe run emits, in order:
//!
//! 1. an informational [`INIT_MESSAGE`];
//! 2. either an informational `content found: <size> <unit>` message, or an
//!    error-level [`MISSING_MESSAGE`].
//!
//! A missing content region is a reported condition, never an `Err`. The
//! document is only read.

use readyprobe_core::{DiagnosticSink, ProbeConfig, Result, SizeMeasure};
use readyprobe_dom::{ContentNode, ContentQuery, ContentSelector};
use serde::{Deserialize, Serialize};

/// Emitted once at the start of every run.
pub const INIT_MESSAGE: &str = "init success";

/// Emitted at error level when no content region matches.
pub const MISSING_MESSAGE: &str = "content not found";

/// Outcome of a single probe run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeReport {
    /// The content region exists.
    Found {
        /// Selector that matched.
        selector: String,
        /// Size of the region's serialized inner markup.
        size: usize,
        /// Unit `size` is expressed in.
        measure: SizeMeasure,
    },
    /// No element matched the selector.
    Missing {
        /// Selector that was tried.
        selector: String,
    },
}

impl ProbeReport {
    /// Whether the content region was present.
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeReport::Found { .. })
    }

    /// Reported size, if the region was present.
    pub fn size(&self) -> Option<usize> {
        match self {
            ProbeReport::Found { size, .. } => Some(*size),
            ProbeReport::Missing { .. } => None,
        }
    }

    /// The selector this report concerns.
    pub fn selector(&self) -> &str {
        match self {
            ProbeReport::Found { selector, .. } | ProbeReport::Missing { selector } => selector,
        }
    }
}

/// Checks a document for its primary content region.
#[derive(Clone, Debug)]
pub struct Probe {
    selector: ContentSelector,
    measure: SizeMeasure,
}

impl Probe {
    /// Build a probe from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configured selector does not parse.
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        Ok(Self {
            selector: ContentSelector::parse(&config.selector)?,
            measure: config.size_measure,
        })
    }

    /// The content region selector.
    pub fn selector(&self) -> &ContentSelector {
        &self.selector
    }

    /// The unit sizes are reported in.
    pub fn measure(&self) -> SizeMeasure {
        self.measure
    }

    /// Check `doc` and report through `sink`.
    pub fn run<D, S>(&self, doc: &D, sink: &mut S) -> ProbeReport
    where
        D: ContentQuery,
        S: DiagnosticSink + ?Sized,
    {
        sink.info(INIT_MESSAGE);

        let Some(node) = doc.first_match(&self.selector) else {
            sink.error(MISSING_MESSAGE);
            return ProbeReport::Missing {
                selector: self.selector.to_string(),
            };
        };

        if log::log_enabled!(log::Level::Debug) {
            let total = doc.count_matches(&self.selector);
            if total > 1 {
                log::debug!(
                    "{total} elements match '{}'; reporting on the first <{}>",
                    self.selector,
                    node.tag_name()
                );
            }
        }

        let size = self.measure.measure(&node.inner_markup());
        sink.info(&format!("content found: {size} {}", self.measure.unit()));

        ProbeReport::Found {
            selector: self.selector.to_string(),
            size,
            measure: self.measure,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
