//! Flaky root endpoint driven in-process.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cluster_mock::http::HttpServer;
use serde_json::Value;
use tower::ServiceExt;

mod common;

async fn call_root(server: &HttpServer) -> (StatusCode, Value) {
    let response = server
        .router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_success_is_immediate() {
    let server = HttpServer::new(common::deterministic_root(false, 3000));
    let start = Instant::now();
    let (status, body) = call_root(&server).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": 200}));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_root_failure_is_delayed() {
    let server = HttpServer::new(common::deterministic_root(true, 200));
    let start = Instant::now();
    let (status, body) = call_root(&server).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": 500}));
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_default_root_fails_about_half_the_time() {
    let mut config = cluster_mock::ServerConfig::default();
    config.chaos.root_failure_delay_ms = 0;
    let server = HttpServer::new(config);
    let mut failures = 0;
    for _ in 0..200 {
        let (status, body) = call_root(&server).await;
        assert_eq!(status, StatusCode::OK);
        if body["status"] == 500 {
            failures += 1;
        }
    }
    assert!((60..=140).contains(&failures), "failures: {failures}");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = HttpServer::new(cluster_mock::ServerConfig::default());
    assert_eq!(server.config().cluster.name, "production-cluster-01");
    let response = server
        .router()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
