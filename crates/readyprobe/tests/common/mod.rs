//! Common test utilities for readiness probe integration tests.

use std::cell::Cell;

use readyprobe::{
    ContentNode, ContentQuery, ContentSelector, HtmlDocument, Probe, ProbeConfig, ProbeReport,
    RecordingSink, page_load,
};

/// An element held by a [`StaticDocument`].
#[derive(Clone, Debug)]
pub struct StaticElement {
    pub tag: String,
    pub markup: String,
}

impl ContentNode for &StaticElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn inner_markup(&self) -> String {
        self.markup.clone()
    }
}

/// In-memory document whose elements match by tag name only.
///
/// Counts the queries made against it so tests can see what a probe
/// touched.
#[derive(Debug, Default)]
pub struct StaticDocument {
    elements: Vec<StaticElement>,
    queries: Cell<usize>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, tag: &str, markup: &str) -> Self {
        self.elements.push(StaticElement {
            tag: tag.to_string(),
            markup: markup.to_string(),
        });
        self
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl ContentQuery for StaticDocument {
    type Node<'a> = &'a StaticElement;

    fn first_match(&self, selector: &ContentSelector) -> Option<&StaticElement> {
        self.queries.set(self.queries.get() + 1);
        self.elements.iter().find(|e| e.tag == selector.as_str())
    }

    fn count_matches(&self, selector: &ContentSelector) -> usize {
        self.queries.set(self.queries.get() + 1);
        self.elements
            .iter()
            .filter(|e| e.tag == selector.as_str())
            .count()
    }
}

/// A probe with default configuration.
pub fn default_probe() -> Probe {
    Probe::new(&ProbeConfig::default()).expect("default config is valid")
}

/// Parse `source` and run one page load with the default probe.
pub fn load_html(source: &str) -> (ProbeReport, RecordingSink) {
    let doc = HtmlDocument::parse(source);
    let mut sink = RecordingSink::new();
    let report = page_load(&default_probe(), &doc, &mut sink);
    (report, sink)
}
