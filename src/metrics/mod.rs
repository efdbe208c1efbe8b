//! Basic metrics instrumentation for the submission pipeline.
//!
//! Provides counters per pipeline outcome and duration tracking for the two
//! external calls (human verification and SMTP dispatch).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for tracking submission outcomes.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions that entered the orchestrator
    submissions_total: Arc<AtomicU64>,

    /// Forms rejected by the schema validator
    validation_failures_total: Arc<AtomicU64>,

    /// Submissions rejected by the human check
    verification_rejections_total: Arc<AtomicU64>,

    /// Template render failures
    render_failures_total: Arc<AtomicU64>,

    /// SMTP delivery failures
    delivery_failures_total: Arc<AtomicU64>,

    /// Messages accepted by the relay
    delivered_total: Arc<AtomicU64>,

    /// Total duration of verification calls in milliseconds
    verify_duration_total_ms: Arc<AtomicU64>,

    /// Total duration of dispatch calls in milliseconds
    dispatch_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            verification_rejections_total: Arc::new(AtomicU64::new(0)),
            render_failures_total: Arc::new(AtomicU64::new(0)),
            delivery_failures_total: Arc::new(AtomicU64::new(0)),
            delivered_total: Arc::new(AtomicU64::new(0)),
            verify_duration_total_ms: Arc::new(AtomicU64::new(0)),
            dispatch_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_verification_rejected(&self) {
        self.verification_rejections_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_render_failure(&self) {
        self.render_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivery_failure(&self) {
        self.delivery_failures_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self) {
        self.delivered_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the duration of one verification call.
    pub fn record_verify_duration(&self, duration: Duration) {
        self.verify_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record the duration of one dispatch call.
    pub fn record_dispatch_duration(&self, duration: Duration) {
        self.dispatch_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn verification_rejections_total(&self) -> u64 {
        self.verification_rejections_total.load(Ordering::Relaxed)
    }

    pub fn render_failures_total(&self) -> u64 {
        self.render_failures_total.load(Ordering::Relaxed)
    }

    pub fn delivery_failures_total(&self) -> u64 {
        self.delivery_failures_total.load(Ordering::Relaxed)
    }

    pub fn delivered_total(&self) -> u64 {
        self.delivered_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            validation_failures_total: self.validation_failures_total(),
            verification_rejections_total: self.verification_rejections_total(),
            render_failures_total: self.render_failures_total(),
            delivery_failures_total: self.delivery_failures_total(),
            delivered_total: self.delivered_total(),
            verify_duration_total_ms: self.verify_duration_total_ms.load(Ordering::Relaxed),
            dispatch_duration_total_ms: self.dispatch_duration_total_ms.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub validation_failures_total: u64,
    pub verification_rejections_total: u64,
    pub render_failures_total: u64,
    pub delivery_failures_total: u64,
    pub delivered_total: u64,
    pub verify_duration_total_ms: u64,
    pub dispatch_duration_total_ms: u64,
}

/// Times one external call and records it on completion.
pub struct CallTimer {
    start: Instant,
}

impl CallTimer {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
