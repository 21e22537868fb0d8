//! Keystroke debouncing for the search field.
//!
//! Each keystroke replaces the pending text; only the most recent text
//! is dispatched, and only once it has sat unchanged for the idle
//! window. Time is passed in by the caller so tests never sleep.

use std::time::{Duration, Instant};

/// Idle window before a pending query is dispatched.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces a stream of text-field edits into dispatchable queries.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Create a debouncer with the standard 300 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW)
    }

    /// Create a debouncer with a custom idle window.
    #[must_use]
    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a text-field edit at `now`, superseding any pending text.
    pub fn submit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Drop the pending text without dispatching it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending text if its idle window has elapsed by `now`.
    ///
    /// Returns at most once per submitted text; after a dispatch the
    /// debouncer is idle until the next `submit`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (_, submitted) = self.pending.as_ref()?;
        if now.duration_since(*submitted) < self.window {
            return None;
        }
        self.pending.take().map(|(text, _)| text)
    }
}
