//! Synthetic data generators.
//!
//! # Data Flow
//! ```text
//! handler (count, window)
//!     → allocate_per_service (even split, catalog order)
//!     → TimeWindow::sample (uniform timestamp per record)
//!     → logs.rs / commits.rs / metrics.rs (one record per draw)
//!     → sort by timestamp → join into one text blob
//! ```
//!
//! Every generator takes the RNG as a parameter so tests can drive it with a
//! seeded `StdRng` while handlers use the thread-local RNG.

pub mod commits;
pub mod logs;
pub mod metrics;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use rand::Rng;

pub use self::commits::{format_commit, generate_commit, generate_commit_history, Commit};
pub use self::logs::{generate_log_line, generate_logs, LogRecord};
pub use self::metrics::{generate_cluster_metrics, generate_service_metrics, is_anomalous, ServiceMetrics};

/// ISO-8601 layout used for window bounds and the metrics timestamp.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Same layout when the microsecond component is zero.
pub const ISO_FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Split `total` records across `services` as evenly as possible.
///
/// The first `total % services` entries receive one extra record.
pub fn allocate_per_service(total: usize, services: usize) -> Vec<usize> {
    if services == 0 {
        return Vec::new();
    }
    let base = total / services;
    let remainder = total % services;
    (0..services)
        .map(|idx| base + usize::from(idx < remainder))
        .collect()
}

/// Closed time interval from which record timestamps are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Window of the given length ending at `end`.
    pub fn ending_at(end: NaiveDateTime, length: TimeDelta) -> Self {
        Self { start: end - length, end }
    }

    /// Window of the given length ending at the current local time.
    pub fn ending_now(length: TimeDelta) -> Self {
        Self::ending_at(Local::now().naive_local(), length)
    }

    /// Draw a timestamp uniformly from the window, microsecond resolution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let span = (self.end - self.start).num_microseconds().unwrap_or(i64::MAX);
        if span <= 0 {
            return self.start;
        }
        self.start + TimeDelta::microseconds(rng.gen_range(0..=span))
    }

    pub fn start_iso(&self) -> String {
        format_iso(self.start)
    }

    pub fn end_iso(&self) -> String {
        format_iso(self.end)
    }
}

/// Microsecond ISO-8601; the fraction is omitted when it is zero.
pub fn format_iso(ts: NaiveDateTime) -> String {
    let layout = if ts.nanosecond() / 1_000 == 0 {
        ISO_FORMAT_WHOLE_SECONDS
    } else {
        ISO_FORMAT
    };
    ts.format(layout).to_string()
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_allocation_sums_and_balances() {
        for total in 1..=200 {
            let counts = allocate_per_service(total, 6);
            assert_eq!(counts.len(), 6);
            assert_eq!(counts.iter().sum::<usize>(), total);
            let floor = total / 6;
            assert!(counts.iter().all(|&c| c == floor || c == floor + 1));
        }
    }

    #[test]
    fn test_allocation_remainder_goes_first() {
        assert_eq!(allocate_per_service(10, 6), vec![2, 2, 2, 2, 1, 1]);
        assert_eq!(allocate_per_service(6, 6), vec![1; 6]);
        assert_eq!(allocate_per_service(1, 6), vec![1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_window_sample_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = TimeWindow::ending_now(TimeDelta::hours(1));
        for _ in 0..1000 {
            let ts = window.sample(&mut rng);
            assert!(ts >= window.start && ts <= window.end);
        }
    }

    #[test]
    fn test_empty_window_returns_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let now = Local::now().naive_local();
        let window = TimeWindow::ending_at(now, TimeDelta::zero());
        assert_eq!(window.sample(&mut rng), now);
    }

    #[test]
    fn test_iso_format() {
        let ts = NaiveDateTime::parse_from_str("2024-03-01 12:30:45.123456", "%Y-%m-%d %H:%M:%S%.f").unwrap();
        assert_eq!(format_iso(ts), "2024-03-01T12:30:45.123456");
    }

    #[test]
    fn test_iso_format_whole_seconds() {
        let ts = NaiveDateTime::parse_from_str("2024-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_iso(ts), "2024-01-01T10:00:00");

        let ts = NaiveDateTime::parse_from_str("2024-01-01 10:00:00.000007", "%Y-%m-%d %H:%M:%S%.f").unwrap();
        assert_eq!(format_iso(ts), "2024-01-01T10:00:00.000007");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(0.004), 0.0);
    }
}
