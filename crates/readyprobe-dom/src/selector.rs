//! Validated content region selectors.

use std::fmt;

use readyprobe_core::{Error, Result};
use scraper::Selector;

/// A parsed CSS selector together with its source text.
///
/// Parsing happens once, up front, so a query against a document can
/// never fail.
#[derive(Clone, Debug)]
pub struct ContentSelector {
    source: String,
    compiled: Selector,
}

impl ContentSelector {
    /// Parse `source` as a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if `source` is empty or is not a
    /// valid selector.
    pub fn parse(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_selector(source, "selector is empty"));
        }

        let compiled =
            Selector::parse(trimmed).map_err(|e| Error::invalid_selector(trimmed, e.to_string()))?;

        Ok(Self {
            source: trimmed.to_string(),
            compiled,
        })
    }

    /// The selector text as given (trimmed).
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn compiled(&self) -> &Selector {
        &self.compiled
    }
}

impl fmt::Display for ContentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
