//! Property-based checks over page loads.

use proptest::prelude::*;
use readyprobe::{RecordingSink, Severity, page_load};

use crate::common::{StaticDocument, default_probe, load_html};

proptest! {
    #[test]
    fn test_found_reports_exact_length(markup in "\\PC*") {
        let doc = StaticDocument::new().with_element("main", &markup);
        let mut sink = RecordingSink::new();

        let report = page_load(&default_probe(), &doc, &mut sink);
        let expected = markup.chars().count();

        prop_assert_eq!(report.size(), Some(expected));
        prop_assert_eq!(sink.count(Severity::Info), 2);
        prop_assert_eq!(sink.count(Severity::Error), 0);
        let expected_message = format!("content found: {expected} characters");
        prop_assert_eq!(sink.messages()[1], expected_message.as_str());
    }

    #[test]
    fn test_parsed_text_length(text in "[a-zA-Z0-9 .,!?]{0,200}") {
        let (report, _) = load_html(&format!("<main>{text}</main>"));
        prop_assert_eq!(report.size(), Some(text.chars().count()));
    }

    #[test]
    fn test_missing_reports_single_error(tag in "(div|section|article|nav|aside)") {
        let doc = StaticDocument::new().with_element(&tag, "content");
        let mut sink = RecordingSink::new();

        let report = page_load(&default_probe(), &doc, &mut sink);

        prop_assert!(!report.is_found());
        prop_assert_eq!(sink.count(Severity::Error), 1);
        prop_assert_eq!(sink.count(Severity::Info), 1);
    }
}
