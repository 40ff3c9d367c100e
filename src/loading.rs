// Debounced in-flight request counter for the loading indicator.
//
// Views report request start/finish; the tracker decides when the spinner
// should be visible. A minimum delay suppresses the spinner for requests
// that finish quickly; reaching zero outstanding requests hides it
// immediately. Time is passed in explicitly so the debounce is testable
// without sleeping.

use std::time::{Duration, Instant};

use tracing::debug;

/// Tracks the count of outstanding requests and the spinner debounce.
#[derive(Debug)]
pub struct LoadingTracker {
    pending: usize,
    /// When the count last rose from zero. `None` while idle.
    busy_since: Option<Instant>,
    /// Minimum time the tracker must be busy before the spinner shows.
    min_delay: Duration,
}

impl LoadingTracker {
    pub fn new(min_delay: Duration) -> Self {
        LoadingTracker {
            pending: 0,
            busy_since: None,
            min_delay,
        }
    }

    /// Number of outstanding requests.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Record a request starting at `now`.
    pub fn request_started(&mut self, now: Instant) {
        self.pending += 1;
        if self.pending == 1 {
            self.busy_since = Some(now);
        }
        debug!(pending = self.pending, "request started");
    }

    /// Record a request finishing. Saturates at zero, so an unmatched
    /// finish cannot wedge the counter negative.
    pub fn request_finished(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.busy_since = None;
        }
        debug!(pending = self.pending, "request finished");
    }

    /// Whether the spinner should be visible at `now`.
    ///
    /// True only while at least one request is outstanding AND the minimum
    /// delay has elapsed since the count last rose from zero.
    pub fn is_visible(&self, now: Instant) -> bool {
        match self.busy_since {
            Some(since) => self.pending > 0 && now.duration_since(since) >= self.min_delay,
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
