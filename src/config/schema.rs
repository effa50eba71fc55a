//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_CLUSTER_NAME;

/// Root configuration for the mock service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Identity of the simulated cluster.
    pub cluster: ClusterConfig,

    /// Behaviour of the intentionally flaky root endpoint.
    pub chaos: ChaosConfig,

    /// Query parameter defaults and bounds.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Cluster name echoed in every payload.
    pub name: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLUSTER_NAME.to_string(),
        }
    }
}

/// Simulated failure injection for `GET /`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChaosConfig {
    /// Probability that a root request fails (0.0 - 1.0).
    pub root_failure_probability: f64,

    /// Delay before a failing root request answers, in milliseconds.
    pub root_failure_delay_ms: u64,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            root_failure_probability: 0.5,
            root_failure_delay_ms: 3000,
        }
    }
}

/// Defaults and upper bounds of the record-count query parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub default_logs: u32,
    pub max_logs: u32,
    pub default_commits: u32,
    pub max_commits: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            default_logs: 100,
            max_logs: 10_000,
            default_commits: 50,
            max_commits: 1_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus endpoint for the server's own metrics.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
