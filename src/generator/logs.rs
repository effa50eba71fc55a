//! Log line generation.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{LOG_LEVELS, LOG_MESSAGES, PLACEHOLDER, SERVICES};
use crate::generator::{allocate_per_service, TimeWindow};

/// Millisecond-precision layout that prefixes every log line.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LEVEL_DISTRIBUTION: LazyLock<WeightedIndex<f64>> = LazyLock::new(|| {
    WeightedIndex::new(LOG_LEVELS.iter().map(|(_, weight)| *weight))
        .expect("log level weights are positive constants")
});

/// A generated line and the instant it claims to describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub line: String,
}

fn pick_level<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    LOG_LEVELS[LEVEL_DISTRIBUTION.sample(rng)].0
}

/// Value substituted into a templated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    User(u32),
    StatusCode(u32),
    Resource(u32),
    MemoryMb(u32),
}

impl Placeholder {
    /// One of the four flavours, chosen uniformly.
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Placeholder::User(rng.gen_range(1000..=9999)),
            1 => Placeholder::StatusCode(rng.gen_range(200..=500)),
            2 => Placeholder::Resource(rng.gen_range(1..=100)),
            _ => Placeholder::MemoryMb(rng.gen_range(64..=512)),
        }
    }

    fn render(self) -> String {
        match self {
            Placeholder::User(id) => format!("user_{id}"),
            Placeholder::Resource(id) => format!("resource_{id}"),
            Placeholder::StatusCode(n) | Placeholder::MemoryMb(n) => n.to_string(),
        }
    }
}

/// Render a single line: `<timestamp> [LEVEL] [service] message`.
pub fn generate_log_line<R: Rng + ?Sized>(rng: &mut R, service: &str, timestamp: NaiveDateTime) -> String {
    let level = pick_level(rng);
    let template = LOG_MESSAGES.choose(rng).copied().unwrap_or(LOG_MESSAGES[0]);

    let message = if template.contains(PLACEHOLDER) {
        template.replacen(PLACEHOLDER, &Placeholder::sample(rng).render(), 1)
    } else {
        template.to_string()
    };

    format!(
        "{} [{}] [{}] {}",
        timestamp.format(LOG_TIMESTAMP_FORMAT),
        level,
        service,
        message
    )
}

/// Generate `total` records spread over all services, oldest first.
pub fn generate_logs<R: Rng + ?Sized>(rng: &mut R, window: &TimeWindow, total: usize) -> Vec<LogRecord> {
    let mut records = Vec::with_capacity(total);

    for (service, count) in SERVICES.iter().zip(allocate_per_service(total, SERVICES.len())) {
        for _ in 0..count {
            let timestamp = window.sample(rng);
            records.push(LogRecord {
                timestamp,
                line: generate_log_line(rng, service, timestamp),
            });
        }
    }

    records.sort_by_key(|record| record.timestamp);
    records
}
