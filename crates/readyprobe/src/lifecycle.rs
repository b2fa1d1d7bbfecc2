//! Page lifecycle harness.
//!
//! [`LoadHarness`] models the "content loaded" point of a page: the moment
//! its element tree is complete. Listeners registered before that point run
//! once, in registration order, when the host calls
//! [`LoadHarness::parse_complete`]. The harness moves from
//! [`LoadState::Waiting`] to [`LoadState::Checked`] exactly once; later
//! events and late listeners are ignored.

use std::fmt;

use readyprobe_core::DiagnosticSink;
use readyprobe_dom::ContentQuery;

use crate::probe::{Probe, ProbeReport};

/// Where a page is in its load lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Element tree not yet complete.
    Waiting,
    /// Content-loaded event has fired.
    Checked,
}

/// Result of signalling that parsing completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// The event fired and this many listeners ran.
    Dispatched(usize),
    /// The event fired with nobody listening.
    NoListeners,
    /// The event had already fired; nothing ran.
    AlreadyFired,
}

type Listener<'cb, D> = Box<dyn FnOnce(&D) + 'cb>;

/// One-shot content-loaded event source for a single page.
pub struct LoadHarness<'cb, D: ?Sized> {
    state: LoadState,
    listeners: Vec<Listener<'cb, D>>,
}

impl<'cb, D: ?Sized> LoadHarness<'cb, D> {
    /// Create a harness for a page that is still loading.
    pub fn new() -> Self {
        Self {
            state: LoadState::Waiting,
            listeners: Vec::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Number of listeners waiting for the event.
    pub fn pending(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener for the content-loaded event.
    ///
    /// Returns `false`, dropping the listener unrun, if the event already
    /// fired.
    pub fn on_content_loaded<F>(&mut self, listener: F) -> bool
    where
        F: FnOnce(&D) + 'cb,
    {
        if self.state == LoadState::Checked {
            log::debug!("Listener registered after content loaded; ignoring");
            return false;
        }
        self.listeners.push(Box::new(listener));
        true
    }

    /// Signal that the document's element tree is complete.
    pub fn parse_complete(&mut self, doc: &D) -> FireOutcome {
        if self.state == LoadState::Checked {
            return FireOutcome::AlreadyFired;
        }
        self.state = LoadState::Checked;

        let listeners = std::mem::take(&mut self.listeners);
        if listeners.is_empty() {
            return FireOutcome::NoListeners;
        }

        let count = listeners.len();
        for listener in listeners {
            listener(doc);
        }
        FireOutcome::Dispatched(count)
    }
}

impl<D: ?Sized> Default for LoadHarness<'_, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: ?Sized> fmt::Debug for LoadHarness<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadHarness")
            .field("state", &self.state)
            .field("pending", &self.listeners.len())
            .finish()
    }
}

/// Run `probe` against `doc` as a single page load.
///
/// Registers the probe on a fresh [`LoadHarness`], fires the content-loaded
/// event once, and returns what the probe reported.
pub fn page_load<D, S>(probe: &Probe, doc: &D, sink: &mut S) -> ProbeReport
where
    D: ContentQuery,
    S: DiagnosticSink + ?Sized,
{
    let mut report = None;

    let mut harness = LoadHarness::new();
    harness.on_content_loaded(|page: &D| report = Some(probe.run(page, sink)));
    let outcome = harness.parse_complete(doc);
    drop(harness);

    log::debug!("Content-loaded event: {outcome:?}");
    report.unwrap_or_else(|| unreachable!("a fresh harness runs its only listener"))
}

// ============================================================================
// Tests
// ============================================================================
