//! Page readiness probe.
//!
//! Once a page's element tree is built, the probe announces that it ran,
//! looks up the page's primary content region (`main` by default), and
//! reports either the size of that region's serialized inner markup or the
//! fact that the region is missing.
//!
//! The document is always passed in; nothing reads ambient page state.
//!
//! # Example
//!
//! ```rust
//! use readyprobe::{page_load, HtmlDocument, Probe, ProbeConfig, RecordingSink};
//!
//! let probe = Probe::new(&ProbeConfig::default()).unwrap();
//! let doc = HtmlDocument::parse("<main>Hello</main>");
//! let mut sink = RecordingSink::new();
//!
//! let report = page_load(&probe, &doc, &mut sink);
//! assert_eq!(report.size(), Some(5));
//! assert_eq!(sink.messages(), vec!["init success", "content found: 5 characters"]);
//! ```

pub mod lifecycle;
pub mod probe;

pub use lifecycle::{FireOutcome, LoadHarness, LoadState, page_load};
pub use probe::{INIT_MESSAGE, MISSING_MESSAGE, Probe, ProbeReport};
pub use readyprobe_core::{
    Diagnostic, DiagnosticSink, Error, ProbeConfig, RecordingSink, Result, Severity, SizeMeasure,
    TracingSink,
};
pub use readyprobe_dom::{ContentNode, ContentQuery, ContentSelector, HtmlDocument};
