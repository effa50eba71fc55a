//! Synthetic per-service performance metrics.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::SERVICES;
use crate::generator::round2;

/// Probability that a service reports an elevated leak score.
pub const LEAK_PROBABILITY: f64 = 0.20;

pub const CPU_ANOMALY_THRESHOLD: f64 = 85.0;
pub const LATENCY_ANOMALY_THRESHOLD_MS: f64 = 400.0;
pub const ERROR_RATE_ANOMALY_THRESHOLD: f64 = 3.0;
pub const LEAK_ANOMALY_THRESHOLD: f64 = 70.0;

/// Snapshot of one service's health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceMetrics {
    pub service_name: String,
    pub cpu_usage_percent: f64,
    pub memory_mb: u32,
    pub p99_latency_ms: f64,
    pub request_rate_per_sec: f64,
    pub error_rate_percent: f64,
    /// 0-100, higher suggests a leak.
    pub memory_leak_score: f64,
    pub anomaly_detected: bool,
}

/// Threshold rule deciding whether a snapshot is flagged.
pub fn is_anomalous(cpu: f64, p99_latency_ms: f64, error_rate: f64, leak_score: f64) -> bool {
    cpu > CPU_ANOMALY_THRESHOLD
        || p99_latency_ms > LATENCY_ANOMALY_THRESHOLD_MS
        || error_rate > ERROR_RATE_ANOMALY_THRESHOLD
        || leak_score > LEAK_ANOMALY_THRESHOLD
}

impl ServiceMetrics {
    /// Recompute the anomaly rule from the numeric fields.
    pub fn breaches_thresholds(&self) -> bool {
        is_anomalous(
            self.cpu_usage_percent,
            self.p99_latency_ms,
            self.error_rate_percent,
            self.memory_leak_score,
        )
    }
}

/// Leak score is bimodal: a leaking band [60, 95] and a normal band [0, 40].
fn leak_score<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(LEAK_PROBABILITY) {
        round2(rng.gen_range(60.0..=95.0))
    } else {
        round2(rng.gen_range(0.0..=40.0))
    }
}

pub fn generate_service_metrics<R: Rng + ?Sized>(rng: &mut R, service: &str) -> ServiceMetrics {
    let cpu_usage_percent = round2(rng.gen_range(5.0..=95.0));
    let memory_mb = rng.gen_range(128..=2048);
    let p99_latency_ms = round2(rng.gen_range(10.0..=500.0));
    let request_rate_per_sec = round2(rng.gen_range(10.0..=1000.0));
    let error_rate_percent = round2(rng.gen_range(0.0..=5.0));
    let memory_leak_score = leak_score(rng);

    ServiceMetrics {
        service_name: service.to_string(),
        cpu_usage_percent,
        memory_mb,
        p99_latency_ms,
        request_rate_per_sec,
        error_rate_percent,
        memory_leak_score,
        anomaly_detected: is_anomalous(
            cpu_usage_percent,
            p99_latency_ms,
            error_rate_percent,
            memory_leak_score,
        ),
    }
}

/// One snapshot per catalog service, in catalog order.
pub fn generate_cluster_metrics<R: Rng + ?Sized>(rng: &mut R) -> Vec<ServiceMetrics> {
    SERVICES
        .iter()
        .map(|service| generate_service_metrics(rng, service))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fields_within_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..2000 {
            let m = generate_service_metrics(&mut rng, "auth-service");
            assert!((5.0..=95.0).contains(&m.cpu_usage_percent));
            assert!((128..=2048).contains(&m.memory_mb));
            assert!((10.0..=500.0).contains(&m.p99_latency_ms));
            assert!((10.0..=1000.0).contains(&m.request_rate_per_sec));
            assert!((0.0..=5.0).contains(&m.error_rate_percent));
            assert_eq!(m.anomaly_detected, m.breaches_thresholds());
        }
    }

    #[test]
    fn test_leak_score_is_bimodal() {
        let mut rng = StdRng::seed_from_u64(8);
        let draws = 10_000;
        let mut elevated = 0;
        for _ in 0..draws {
            let score = leak_score(&mut rng);
            assert!(
                (0.0..=40.0).contains(&score) || (60.0..=95.0).contains(&score),
                "score in gap: {score}"
            );
            if score >= 60.0 {
                elevated += 1;
            }
        }
        let ratio = elevated as f64 / draws as f64;
        assert!((ratio - LEAK_PROBABILITY).abs() < 0.02, "elevated ratio {ratio}");
    }

    #[test]
    fn test_anomaly_thresholds_are_strict() {
        assert!(!is_anomalous(85.0, 400.0, 3.0, 70.0));
        assert!(is_anomalous(85.01, 10.0, 0.0, 0.0));
        assert!(is_anomalous(5.0, 400.01, 0.0, 0.0));
        assert!(is_anomalous(5.0, 10.0, 3.01, 0.0));
        assert!(is_anomalous(5.0, 10.0, 0.0, 70.01));
    }

    #[test]
    fn test_cluster_metrics_follow_catalog_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let names: Vec<_> = generate_cluster_metrics(&mut rng)
            .into_iter()
            .map(|m| m.service_name)
            .collect();
        assert_eq!(names, SERVICES);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut rng = StdRng::seed_from_u64(4);
        let json = serde_json::to_value(generate_service_metrics(&mut rng, "api-gateway")).unwrap();
        for key in [
            "service_name",
            "cpu_usage_percent",
            "memory_mb",
            "p99_latency_ms",
            "request_rate_per_sec",
            "error_rate_percent",
            "memory_leak_score",
            "anomaly_detected",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
