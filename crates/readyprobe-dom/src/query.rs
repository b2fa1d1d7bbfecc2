//! The query capability a probe consumes.
//!
//! A document hands out short-lived, read-only node references. A node
//! reference borrows the document, so it cannot outlive the check that
//! obtained it.

use crate::selector::ContentSelector;

/// A read-only reference to an element attached to a document.
pub trait ContentNode {
    /// Local tag name of the element (e.g. `main`).
    fn tag_name(&self) -> &str;

    /// The element's serialized inner markup.
    fn inner_markup(&self) -> String;
}

/// Find elements in a document.
pub trait ContentQuery {
    /// Node reference type, borrowing the document.
    type Node<'a>: ContentNode
    where
        Self: 'a;

    /// The first element in document order matching `selector`, if any.
    fn first_match(&self, selector: &ContentSelector) -> Option<Self::Node<'_>>;

    /// Number of elements matching `selector`.
    fn count_matches(&self, selector: &ContentSelector) -> usize;
}
