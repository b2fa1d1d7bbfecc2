//! HTML documents backed by `scraper`.
//!
//! Parsing follows the HTML5 tree-construction rules, so fragments are
//! wrapped in an implied `html`/`body` and malformed markup is repaired
//! rather than rejected.
//!
//! Elements inside a `<template>` are inert: they belong to the template's
//! content fragment, not to the document, and queries never return them.
//!
//! # Example
//!
//! ```rust
//! use readyprobe_dom::{ContentNode, ContentQuery, ContentSelector, HtmlDocument};
//!
//! let doc = HtmlDocument::parse("<header>Nav</header><main>Hello</main>");
//! let main = ContentSelector::parse("main").unwrap();
//!
//! assert_eq!(doc.first_match(&main).unwrap().inner_markup(), "Hello");
//! ```

use scraper::{ElementRef, Html};

use crate::query::{ContentNode, ContentQuery};
use crate::selector::ContentSelector;

/// A parsed, read-only HTML document.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            log::debug!(
                "Recovered from {} HTML parse error(s): {:?}",
                html.errors.len(),
                html.errors
            );
        }
        Self { html }
    }

    /// Serialize the whole document back to markup.
    pub fn to_markup(&self) -> String {
        self.html.html()
    }

    fn attached<'a, 's>(
        &'a self,
        selector: &'s ContentSelector,
    ) -> impl Iterator<Item = ElementRef<'a>> + use<'a, 's> {
        self.html
            .select(selector.compiled())
            .filter(|element| !in_template(element))
    }
}

fn in_template(element: &ElementRef<'_>) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| el.name() == "template")
    })
}

impl ContentQuery for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn first_match(&self, selector: &ContentSelector) -> Option<HtmlNode<'_>> {
        let found = self.attached(selector).next().map(HtmlNode);
        log::debug!(
            "Query '{}' {}",
            selector,
            if found.is_some() { "matched" } else { "found nothing" }
        );
        found
    }

    fn count_matches(&self, selector: &ContentSelector) -> usize {
        self.attached(selector).count()
    }
}

/// An element inside an [`HtmlDocument`].
#[derive(Clone, Copy, Debug)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl ContentNode for HtmlNode<'_> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn inner_markup(&self) -> String {
        self.0.inner_html()
    }
}

// ============================================================================
// Tests
// ============================================================================
