//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use cluster_mock::config::ServerConfig;
use cluster_mock::http::HttpServer;
use cluster_mock::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start the server on `addr` and return the handle that stops it.
#[allow(dead_code)]
pub async fn start_server(addr: SocketAddr, mut config: ServerConfig) -> Shutdown {
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let listener = TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.listener();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown
}

/// Config whose root endpoint always answers the same way.
#[allow(dead_code)]
pub fn deterministic_root(fail: bool, delay_ms: u64) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.chaos.root_failure_probability = if fail { 1.0 } else { 0.0 };
    config.chaos.root_failure_delay_ms = delay_ms;
    config
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
