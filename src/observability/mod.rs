//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers + middleware produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows into every request span
//! - Self-metrics describe the mock server, not the simulated cluster

pub mod logging;
pub mod metrics;
