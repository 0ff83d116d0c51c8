//! Logger metrics for observability
//!
//! Counters describing what a logger instance did: lines written, calls
//! gated off, placeholder lookups that failed and sink writes that failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use record_debug_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_line();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.lines_emitted(), 1);
/// assert_eq!(metrics.calls_suppressed(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines delivered to debug sinks
    lines_emitted: AtomicU64,

    /// Lines delivered to alert sinks
    alerts_emitted: AtomicU64,

    /// Calls rejected by the level gate
    calls_suppressed: AtomicU64,

    /// Placeholders that could not be resolved
    lookup_failures: AtomicU64,

    /// Sink writes that returned an error or panicked
    sink_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_emitted: AtomicU64::new(0),
            alerts_emitted: AtomicU64::new(0),
            calls_suppressed: AtomicU64::new(0),
            lookup_failures: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn alerts_emitted(&self) -> u64 {
        self.alerts_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn calls_suppressed(&self) -> u64 {
        self.calls_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lookup_failures(&self) -> u64 {
        self.lookup_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_line(&self) {
        self.lines_emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_alert(&self) {
        self.alerts_emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_suppressed(&self) {
        self.calls_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_lookup_failures(&self, count: usize) {
        self.lookup_failures.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a sink failure, returning the previous count
    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_emitted.store(0, Ordering::Relaxed);
        self.alerts_emitted.store(0, Ordering::Relaxed);
        self.calls_suppressed.store(0, Ordering::Relaxed);
        self.lookup_failures.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}
