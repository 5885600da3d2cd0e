//! Prediction request metrics.
//!
//! Recording is a no-op unless the host process installs a recorder.

use metrics::{counter, histogram};

/// Metric name constants for consistency.
pub mod names {
    /// Total prediction requests by outcome.
    pub const REQUESTS_TOTAL: &str = "predictor_requests_total";

    /// Request latency in seconds.
    pub const LATENCY_SECONDS: &str = "predictor_latency_seconds";
}

/// Record metrics for a completed prediction request.
///
/// `outcome` is `viral`, `not_viral`, or an error kind.
pub fn record_request(outcome: &'static str, latency_ms: f64) {
    counter!(names::REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    histogram!(names::LATENCY_SECONDS, "outcome" => outcome).record(latency_ms / 1000.0);
}
