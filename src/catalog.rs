//! Static reference data shared by every generator.
//!
//! All tables are immutable and loaded with the binary; nothing here is ever
//! mutated, so handlers read them without synchronization.

/// Cluster name reported when the config does not override it.
pub const DEFAULT_CLUSTER_NAME: &str = "production-cluster-01";

/// Services of the simulated cluster, in catalog order.
///
/// Catalog order drives the per-service record split and the order of the
/// `/metrics` payload.
pub const SERVICES: [&str; 6] = [
    "auth-service",
    "user-service",
    "payment-service",
    "notification-service",
    "analytics-service",
    "api-gateway",
];

/// Log levels paired with their sampling weights. Weights sum to 1.
pub const LOG_LEVELS: [(&str, f64); 4] = [
    ("INFO", 0.60),
    ("DEBUG", 0.25),
    ("WARN", 0.10),
    ("ERROR", 0.05),
];

/// Placeholder substituted in log templates.
pub const PLACEHOLDER: &str = "{}";

pub const LOG_MESSAGES: [&str; 15] = [
    "Request processed successfully",
    "Database connection established",
    "Cache hit for key: {}",
    "Processing batch job",
    "HTTP request received: GET /api/v1/{}",
    "Response sent with status code: {}",
    "Authentication successful for user: {}",
    "Rate limit check passed",
    "Circuit breaker closed",
    "Health check completed",
    "Memory usage: {} MB",
    "Connection timeout, retrying...",
    "Invalid request parameter: {}",
    "Service discovery updated",
    "Background task scheduled",
];

/// Conventional-commit prefixes.
pub const COMMIT_TYPES: [&str; 7] = ["feat", "fix", "refactor", "perf", "docs", "test", "chore"];

pub const COMMIT_MESSAGES: [&str; 30] = [
    "add authentication middleware",
    "fix memory leak in connection pool",
    "update dependencies to latest versions",
    "optimize database query performance",
    "implement rate limiting",
    "add unit tests for API endpoints",
    "refactor error handling logic",
    "improve logging format",
    "fix race condition in cache invalidation",
    "add health check endpoint",
    "update API documentation",
    "implement circuit breaker pattern",
    "optimize memory usage",
    "fix null pointer exception",
    "add integration tests",
    "refactor service discovery logic",
    "improve error messages",
    "add metrics collection",
    "fix timeout handling",
    "implement retry mechanism",
    "update configuration management",
    "add request validation",
    "optimize response time",
    "fix connection leak",
    "add monitoring dashboards",
    "refactor database access layer",
    "implement graceful shutdown",
    "add feature flags support",
    "fix concurrent access issues",
    "improve security headers",
];

pub const DEVELOPERS: [&str; 8] = [
    "alice.chen",
    "bob.smith",
    "carol.jones",
    "david.kim",
    "emma.wilson",
    "frank.garcia",
    "grace.lee",
    "henry.brown",
];

/// Alphabet for abbreviated commit hashes.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Length of an abbreviated commit hash.
pub const COMMIT_HASH_LEN: usize = 7;

/// Service names as owned strings, for response payloads.
pub fn service_names() -> Vec<String> {
    SERVICES.iter().map(|s| s.to_string()).collect()
}
