//! Metrics for API request and navigation monitoring.
//!
//! Recorded through the `metrics` facade; the host process decides which
//! recorder (if any) to install.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// API request latency metric name.
pub const METRIC_API_REQUEST_LATENCY: &str = "api_request_latency_ms";
/// API requests issued counter metric name.
pub const METRIC_API_REQUESTS: &str = "api_requests_total";
/// API request errors counter metric name.
pub const METRIC_API_REQUEST_ERRORS: &str = "api_request_errors_total";
/// Navigations that matched no route counter metric name.
pub const METRIC_ROUTE_NOT_FOUND: &str = "route_not_found_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_API_REQUEST_LATENCY,
        "API request latency in milliseconds"
    );

    describe_counter!(METRIC_API_REQUESTS, "Total number of API requests issued");
    describe_counter!(
        METRIC_API_REQUEST_ERRORS,
        "Total number of API requests that failed"
    );
    describe_counter!(
        METRIC_ROUTE_NOT_FOUND,
        "Total number of navigations that matched no route"
    );

    debug!("Metrics initialized");
}

/// Record API request latency for an endpoint path.
pub fn record_request_latency(start: Instant, path: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_API_REQUEST_LATENCY, "path" => path.to_string()).record(latency_ms);
}

/// Increment the API requests counter.
pub fn inc_requests() {
    counter!(METRIC_API_REQUESTS).increment(1);
}

/// Increment the API request errors counter.
pub fn inc_request_errors() {
    counter!(METRIC_API_REQUEST_ERRORS).increment(1);
}

/// Increment the route-not-found counter.
pub fn inc_route_not_found() {
    counter!(METRIC_ROUTE_NOT_FOUND).increment(1);
}
