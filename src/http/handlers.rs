//! Endpoint handlers.
//!
//! Each call regenerates its data from scratch; nothing is cached or shared
//! between requests beyond the read-only settings in [`AppState`].

use std::time::Duration;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::{Local, TimeDelta};
use rand::Rng;
use serde::Deserialize;

use crate::catalog::{service_names, SERVICES};
use crate::generator::{
    format_iso, generate_cluster_metrics, generate_commit_history, generate_logs, TimeWindow,
};
use crate::http::response::{
    ApiError, CommitHistoryResponse, LogsResponse, MetricsResponse, RootStatus, TimeRange,
};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Span of the `/logs` window.
pub fn log_window() -> TimeDelta {
    TimeDelta::hours(1)
}

/// Span of the `/commit_history` window.
pub fn commit_window() -> TimeDelta {
    TimeDelta::days(30)
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub num_logs: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CommitsQuery {
    pub num_commits: Option<i64>,
}

/// Resolve a record count against its default and inclusive bounds `[1, max]`.
pub fn resolve_count(name: &str, value: Option<i64>, default: u32, max: u32) -> Result<usize, ApiError> {
    let value = value.unwrap_or(i64::from(default));
    if value < 1 || value > i64::from(max) {
        return Err(ApiError::Validation(format!(
            "{name} must be between 1 and {max}, got {value}"
        )));
    }
    usize::try_from(value).map_err(|e| ApiError::Validation(format!("{name}: {e}")))
}

fn time_range(window: &TimeWindow) -> TimeRange {
    TimeRange {
        start: window.start_iso(),
        end: window.end_iso(),
    }
}

/// `GET /`: reports `{"status":200}`, or `{"status":500}` after a delay.
///
/// The failure travels in the body only; the transport status is always 200.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let chaos = &state.config.chaos;
    let fail = rand::thread_rng().gen_bool(chaos.root_failure_probability);

    if fail {
        tracing::debug!(delay_ms = chaos.root_failure_delay_ms, "Injecting root failure");
        tokio::time::sleep(Duration::from_millis(chaos.root_failure_delay_ms)).await;
        Json(RootStatus { status: 500 })
    } else {
        Json(RootStatus { status: 200 })
    }
}

/// `GET /logs`
pub async fn list_logs(
    State(state): State<AppState>,
    query: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<LogsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let limits = &state.config.limits;
    let num_logs = resolve_count("num_logs", query.num_logs, limits.default_logs, limits.max_logs)?;

    let window = TimeWindow::ending_now(log_window());
    let records = generate_logs(&mut rand::thread_rng(), &window, num_logs);
    metrics::record_generated("log", records.len());

    tracing::debug!(
        num_logs,
        service_count = SERVICES.len(),
        "Generated logs"
    );

    let logs = records
        .iter()
        .map(|record| record.line.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Json(LogsResponse {
        cluster_name: state.config.cluster.name.clone(),
        total_services: SERVICES.len(),
        services: service_names(),
        log_count: records.len(),
        time_range: time_range(&window),
        logs,
    }))
}

/// `GET /commit_history`
pub async fn list_commit_history(
    State(state): State<AppState>,
    query: Result<Query<CommitsQuery>, QueryRejection>,
) -> Result<Json<CommitHistoryResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let limits = &state.config.limits;
    let num_commits = resolve_count(
        "num_commits",
        query.num_commits,
        limits.default_commits,
        limits.max_commits,
    )?;

    let window = TimeWindow::ending_now(commit_window());
    let history = generate_commit_history(&mut rand::thread_rng(), &window, num_commits);
    metrics::record_generated("commit", history.len());

    tracing::debug!(num_commits, "Generated commit history");

    let commits = history
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Json(CommitHistoryResponse {
        cluster_name: state.config.cluster.name.clone(),
        total_commits: history.len(),
        services: service_names(),
        time_range: time_range(&window),
        commits,
    }))
}

/// `GET /metrics`
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let services = generate_cluster_metrics(&mut rand::thread_rng());
    let anomalies = services.iter().filter(|m| m.anomaly_detected).count();
    metrics::record_generated("metrics", services.len());

    tracing::debug!(anomalies, "Generated service metrics");

    Json(MetricsResponse {
        timestamp: format_iso(Local::now().naive_local()),
        cluster_name: state.config.cluster.name.clone(),
        services,
    })
}
