//! Page loads against an in-memory document implementation.

use readyprobe::{
    Diagnostic, FireOutcome, LoadHarness, LoadState, Probe, ProbeConfig, RecordingSink,
    SizeMeasure, page_load,
};

use crate::common::{StaticDocument, default_probe};

#[test]
fn test_injected_document_found() {
    let doc = StaticDocument::new()
        .with_element("nav", "<a>Home</a>")
        .with_element("main", "Hello");
    let mut sink = RecordingSink::new();

    let report = page_load(&default_probe(), &doc, &mut sink);

    assert_eq!(report.size(), Some(5));
    assert_eq!(sink.messages()[1], "content found: 5 characters");
}

#[test]
fn test_injected_document_missing() {
    let doc = StaticDocument::new().with_element("div", "Hello");
    let mut sink = RecordingSink::new();

    let report = page_load(&default_probe(), &doc, &mut sink);

    assert!(!report.is_found());
    assert_eq!(sink.entries()[1], Diagnostic::error("content not found"));
}

#[test]
fn test_injected_document_first_match_wins() {
    let doc = StaticDocument::new()
        .with_element("main", "one")
        .with_element("main", "three");
    let mut sink = RecordingSink::new();

    let report = page_load(&default_probe(), &doc, &mut sink);

    assert_eq!(report.size(), Some(3));
    assert_eq!(sink.messages()[1], "content found: 3 characters");
}

#[test]
fn test_injected_document_custom_selector_and_measure() {
    let probe = Probe::new(&ProbeConfig {
        selector: "article".to_string(),
        size_measure: SizeMeasure::Bytes,
    })
    .unwrap();
    let doc = StaticDocument::new().with_element("article", "crème");
    let mut sink = RecordingSink::new();

    let report = page_load(&probe, &doc, &mut sink);

    assert_eq!(report.size(), Some(6));
    assert_eq!(sink.messages()[1], "content found: 6 bytes");
}

#[test]
fn test_probe_queries_only_after_event() {
    let doc = StaticDocument::new().with_element("main", "Hello");
    let probe = default_probe();
    let mut sink = RecordingSink::new();

    let mut harness = LoadHarness::new();
    harness.on_content_loaded(|page: &StaticDocument| {
        probe.run(page, &mut sink);
    });
    assert_eq!(doc.queries(), 0);
    assert_eq!(harness.state(), LoadState::Waiting);

    assert_eq!(harness.parse_complete(&doc), FireOutcome::Dispatched(1));
    assert_eq!(harness.parse_complete(&doc), FireOutcome::AlreadyFired);
    drop(harness);

    assert!(doc.queries() >= 1);
    assert_eq!(sink.entries().len(), 2);
}
