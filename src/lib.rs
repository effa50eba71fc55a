//! Mock Kubernetes cluster observability API.
//!
//! Serves synthetic logs, per-service performance metrics and commit history
//! for a fixed set of microservices, plus an intentionally flaky root endpoint.

pub mod catalog;
pub mod config;
pub mod generator;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
