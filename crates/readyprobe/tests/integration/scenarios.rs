//! End-to-end page loads over parsed HTML.

use readyprobe::{
    Diagnostic, HtmlDocument, INIT_MESSAGE, MISSING_MESSAGE, ProbeReport, RecordingSink, Severity,
    SizeMeasure, page_load,
};

use crate::common::{default_probe, load_html};

#[test]
fn test_text_content_reports_length() {
    let (report, sink) = load_html("<main>Hello</main>");

    assert_eq!(
        sink.entries(),
        &[
            Diagnostic::info("init success"),
            Diagnostic::info("content found: 5 characters"),
        ]
    );
    assert_eq!(
        report,
        ProbeReport::Found {
            selector: "main".to_string(),
            size: 5,
            measure: SizeMeasure::Chars,
        }
    );
}

#[test]
fn test_nested_markup_counts_tags() {
    let (report, sink) = load_html("<main><p>Soup</p></main>");

    assert_eq!(report.size(), Some("<p>Soup</p>".len()));
    assert_eq!(report.size(), Some(11));
    assert_eq!(sink.messages(), vec![INIT_MESSAGE, "content found: 11 characters"]);
}

#[test]
fn test_missing_region_reports_error() {
    let (report, sink) = load_html("<div class=\"recipes\"><p>Soup</p></div>");

    assert!(!report.is_found());
    assert_eq!(
        sink.entries(),
        &[
            Diagnostic::info("init success"),
            Diagnostic::error("content not found"),
        ]
    );
}

#[test]
fn test_two_regions_reports_first_only() {
    let (report, sink) = load_html("<main><p>Soup</p></main><main>Hello</main>");

    assert_eq!(report.size(), Some(11));
    assert_eq!(sink.count(Severity::Info), 2);
    assert_eq!(sink.count(Severity::Error), 0);
}

#[test]
fn test_full_page_template() {
    let source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Recipe Manager</title>
    <link rel="stylesheet" href="/static/css/styles.css">
</head>
<body>
    <header><nav><a href="/recipes">Recipes</a></nav></header>
    <main><h1>Weekly plan</h1></main>
    <script src="/static/js/main.js"></script>
</body>
</html>"#;
    let (report, sink) = load_html(source);

    assert_eq!(report.size(), Some("<h1>Weekly plan</h1>".chars().count()));
    assert_eq!(sink.count(Severity::Error), 0);
}

#[test]
fn test_init_message_emitted_once_either_way() {
    for source in ["<main>x</main>", "<p>x</p>", ""] {
        let (_, sink) = load_html(source);
        let inits = sink
            .messages()
            .iter()
            .filter(|m| **m == INIT_MESSAGE)
            .count();
        assert_eq!(inits, 1, "source: {source:?}");
        assert_eq!(sink.entries().len(), 2, "source: {source:?}");
    }
}

#[test]
fn test_missing_never_reports_length() {
    let (_, sink) = load_html("<section>Stew</section>");

    assert_eq!(sink.count(Severity::Error), 1);
    assert!(
        sink.messages()
            .iter()
            .all(|m| !m.starts_with("content found"))
    );
    assert_eq!(sink.messages()[1], MISSING_MESSAGE);
}

#[test]
fn test_page_load_leaves_document_unchanged() {
    let doc = HtmlDocument::parse("<main><ul><li>Salt</li><li>Pepper</li></ul></main>");
    let before = doc.to_markup();

    let mut sink = RecordingSink::new();
    page_load(&default_probe(), &doc, &mut sink);
    page_load(&default_probe(), &doc, &mut sink);

    assert_eq!(doc.to_markup(), before);
}

#[test]
fn test_template_contents_are_not_the_region() {
    let (report, sink) = load_html("<template><main>inert</main></template><main>live</main>");

    assert_eq!(report.size(), Some(4));
    assert_eq!(sink.messages()[1], "content found: 4 characters");
}
