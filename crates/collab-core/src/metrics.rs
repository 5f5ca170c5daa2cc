//! Global atomic counters for coordinator runs.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. before the CLI exits).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters.
pub struct Metrics {
    runs_started: AtomicU64,
    delegations: AtomicU64,
    failures: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            runs_started: AtomicU64::new(0),
            delegations: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub fn inc_runs(&self) {
        self.runs_started.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "runs_started", "counter incremented");
    }

    /// One `perform` call delegated to a collaborator, successful or not.
    pub fn inc_delegations(&self) {
        self.delegations.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "delegations", "counter incremented");
    }

    pub fn inc_failures(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "failures", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            runs_started = self.runs_started(),
            delegations = self.delegations(),
            failures = self.failures(),
        );
    }

    pub fn runs_started(&self) -> u64 {
        self.runs_started.load(Ordering::Relaxed)
    }

    pub fn delegations(&self) -> u64 {
        self.delegations.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.runs_started.store(0, Ordering::Relaxed);
        self.delegations.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let m = Metrics::new();
        assert_eq!(m.runs_started(), 0);
        m.inc_runs();
        assert_eq!(m.runs_started(), 1);

        m.inc_delegations();
        m.inc_delegations();
        assert_eq!(m.delegations(), 2);

        m.inc_failures();
        assert_eq!(m.failures(), 1);
    }

    #[test]
    fn reset_zeroes_all() {
        let m = Metrics::new();
        m.inc_runs();
        m.inc_delegations();
        m.inc_failures();
        m.reset();
        assert_eq!(m.runs_started(), 0);
        assert_eq!(m.delegations(), 0);
        assert_eq!(m.failures(), 0);
    }
}
