//! Request metrics.
//!
//! # Metrics
//! - `mcsm_requests_total` (counter): requests by method and status
//!   (`error` when no response was received)
//! - `mcsm_request_duration_seconds` (histogram): latency by method
//!
//! Recorded through the `metrics` facade; without an installed recorder the
//! calls are no-ops.

use std::time::Duration;

/// Status label for a request outcome.
pub fn status_label(status: Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "error".to_string(),
    }
}

/// Record one completed (or failed) panel request.
pub fn record_request(method: &str, status: Option<u16>, elapsed: Duration) {
    metrics::counter!(
        "mcsm_requests_total",
        "method" => method.to_string(),
        "status" => status_label(status)
    )
    .increment(1);

    metrics::histogram!("mcsm_request_duration_seconds", "method" => method.to_string())
        .record(elapsed.as_secs_f64());
}
