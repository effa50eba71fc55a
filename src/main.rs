//! Mock Kubernetes cluster observability API.
//!
//! # Architecture Overview
//!
//! ```text
//!                ┌───────────────────────────────────────────────────┐
//!                │                   CLUSTER MOCK                     │
//!   GET request  │  ┌────────┐   ┌──────────┐   ┌─────────────────┐  │
//!   ─────────────┼─▶│  http  │──▶│ handlers │──▶│   generator     │  │
//!                │  │ server │   │ validate │   │ logs / metrics  │  │
//!                │  └────────┘   └──────────┘   │ / commits       │  │
//!   JSON body    │       ▲            │         └────────┬────────┘  │
//!   ◀────────────┼───────┴────────────┘                  │           │
//!                │                                ┌──────▼──────┐    │
//!                │                                │   catalog   │    │
//!                │                                └─────────────┘    │
//!                │  config · observability · lifecycle               │
//!                └───────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cluster_mock::config::{load_config, validate_config, ConfigError, ServerConfig};
use cluster_mock::lifecycle::Shutdown;
use cluster_mock::observability::{logging, metrics};
use cluster_mock::HttpServer;

#[derive(Parser)]
#[command(name = "cluster-mock")]
#[command(about = "Synthetic Kubernetes cluster logs, metrics and commit history", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(args: &Args) -> Result<ServerConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("cluster-mock v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        cluster_name = %config.cluster.name,
        request_timeout_secs = config.timeouts.request_secs,
        root_failure_probability = config.chaos.root_failure_probability,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics endpoint");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.listener();
    shutdown.trigger_on_os_signal();

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
