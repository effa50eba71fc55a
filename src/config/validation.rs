//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (probabilities, limits, timeouts)
//! - Check that addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("chaos.root_failure_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("{field} must be at least 1")]
    ZeroLimit { field: &'static str },

    #[error("{field} ({value}) exceeds its maximum ({max})")]
    DefaultAboveMax { field: &'static str, value: u32, max: u32 },

    #[error("cluster.name must not be empty")]
    EmptyClusterName,

    #[error("timeouts.request_secs ({request_secs}s) must exceed chaos.root_failure_delay_ms ({delay_ms}ms)")]
    TimeoutBelowDelay { request_secs: u64, delay_ms: u64 },
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    let probability = config.chaos.root_failure_probability;
    if !(0.0..=1.0).contains(&probability) {
        errors.push(ValidationError::InvalidProbability(probability));
    }

    let limits = &config.limits;
    for (field, value) in [
        ("limits.default_logs", limits.default_logs),
        ("limits.max_logs", limits.max_logs),
        ("limits.default_commits", limits.default_commits),
        ("limits.max_commits", limits.max_commits),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroLimit { field });
        }
    }
    if limits.default_logs > limits.max_logs {
        errors.push(ValidationError::DefaultAboveMax {
            field: "limits.default_logs",
            value: limits.default_logs,
            max: limits.max_logs,
        });
    }
    if limits.default_commits > limits.max_commits {
        errors.push(ValidationError::DefaultAboveMax {
            field: "limits.default_commits",
            value: limits.default_commits,
            max: limits.max_commits,
        });
    }

    if config.cluster.name.trim().is_empty() {
        errors.push(ValidationError::EmptyClusterName);
    }

    if config.timeouts.request_secs.saturating_mul(1000) <= config.chaos.root_failure_delay_ms {
        errors.push(ValidationError::TimeoutBelowDelay {
            request_secs: config.timeouts.request_secs,
            delay_ms: config.chaos.root_failure_delay_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServerConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.limits.max_commits = 0;
        config.cluster.name = "  ".into();
        config.timeouts.request_secs = 2;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: "not-an-address".into(),
        }));
        assert!(errors.contains(&ValidationError::ZeroLimit { field: "limits.max_commits" }));
        assert!(errors.contains(&ValidationError::DefaultAboveMax {
            field: "limits.default_commits",
            value: 50,
            max: 0,
        }));
        assert!(errors.contains(&ValidationError::EmptyClusterName));
        assert!(errors.contains(&ValidationError::TimeoutBelowDelay {
            request_secs: 2,
            delay_ms: 3000,
        }));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
