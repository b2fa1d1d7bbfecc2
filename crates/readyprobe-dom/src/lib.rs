//! HTML document parsing and content region queries.
//!
//! This crate turns HTML text into a read-only, queryable document and
//! defines the query capability the readiness probe consumes.
//!
//! # Modules
//!
//! - [`selector`]: Validated content region selectors
//! - [`query`]: The [`ContentQuery`] / [`ContentNode`] seam
//! - [`document`]: [`HtmlDocument`], the `scraper`-backed implementation
//!
//! # Example
//!
//! ```rust
//! use readyprobe_dom::{ContentNode, ContentQuery, ContentSelector, HtmlDocument};
//!
//! let doc = HtmlDocument::parse("<main><p>Soup</p></main>");
//! let selector = ContentSelector::parse("main").unwrap();
//!
//! let node = doc.first_match(&selector).unwrap();
//! assert_eq!(node.inner_markup(), "<p>Soup</p>");
//! ```

pub mod document;
pub mod query;
pub mod selector;

pub use document::{HtmlDocument, HtmlNode};
pub use query::{ContentNode, ContentQuery};
pub use selector::ContentSelector;
