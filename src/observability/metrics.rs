//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cluster_mock_requests_total` (counter): requests by endpoint, status
//! - `cluster_mock_request_duration_seconds` (histogram): latency by endpoint
//! - `cluster_mock_generated_records_total` (counter): records by kind
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REQUESTS_TOTAL: &str = "cluster_mock_requests_total";
pub const REQUEST_DURATION: &str = "cluster_mock_request_duration_seconds";
pub const GENERATED_RECORDS: &str = "cluster_mock_generated_records_total";

/// Install the Prometheus recorder with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION, "endpoint" => endpoint.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_generated(kind: &'static str, count: usize) {
    counter!(GENERATED_RECORDS, "kind" => kind).increment(count as u64);
}

/// Route middleware recording count and latency per matched path.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;
    record_request(&endpoint, response.status().as_u16(), start);
    response
}
