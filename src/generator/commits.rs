//! Synthetic commit history and its git-log rendering.

use std::fmt;

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{COMMIT_HASH_LEN, COMMIT_MESSAGES, COMMIT_TYPES, DEVELOPERS, HEX_ALPHABET, SERVICES};
use crate::generator::{allocate_per_service, TimeWindow};

/// Second-precision layout of the `Date:` line.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub commit_hash: String,
    pub author: String,
    pub date: String,
    /// `"<type>: <text>"`.
    pub message: String,
    pub service: String,
    pub files_changed: u32,
    pub insertions: u32,
    pub deletions: u32,
}

impl fmt::Display for Commit {
    /// Git-log style block. Consumers parse this, keep the spacing intact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "commit {}", self.commit_hash)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Date:   {}", self.date)?;
        writeln!(f, "Service: {}", self.service)?;
        writeln!(f)?;
        writeln!(f, "    {}", self.message)?;
        writeln!(f)?;
        writeln!(
            f,
            "    {} files changed, {} insertions(+), {} deletions(-)",
            self.files_changed, self.insertions, self.deletions
        )
    }
}

pub fn format_commit(commit: &Commit) -> String {
    commit.to_string()
}

fn commit_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..COMMIT_HASH_LEN)
        .map(|_| HEX_ALPHABET[rng.gen_range(0..HEX_ALPHABET.len())] as char)
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

pub fn generate_commit<R: Rng + ?Sized>(rng: &mut R, service: &str, timestamp: NaiveDateTime) -> Commit {
    let commit_hash = commit_hash(rng);
    let author = pick(rng, &DEVELOPERS);
    let kind = pick(rng, &COMMIT_TYPES);
    let text = pick(rng, &COMMIT_MESSAGES);

    Commit {
        commit_hash,
        author: author.to_string(),
        date: timestamp.format(COMMIT_DATE_FORMAT).to_string(),
        message: format!("{kind}: {text}"),
        service: service.to_string(),
        files_changed: rng.gen_range(1..=15),
        insertions: rng.gen_range(5..=200),
        deletions: rng.gen_range(1..=100),
    }
}

/// Generate `total` commits spread over all services, most recent first.
pub fn generate_commit_history<R: Rng + ?Sized>(rng: &mut R, window: &TimeWindow, total: usize) -> Vec<Commit> {
    let mut dated = Vec::with_capacity(total);

    for (service, count) in SERVICES.iter().zip(allocate_per_service(total, SERVICES.len())) {
        for _ in 0..count {
            let timestamp = window.sample(rng);
            dated.push((timestamp, generate_commit(rng, service, timestamp)));
        }
    }

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, commit)| commit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn fixed_ts() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-01-02 03:04:05", COMMIT_DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_commit_fields() {
        let mut rng = StdRng::seed_from_u64(21);
        let hash_re = regex::Regex::new(r"^[0-9a-f]{7}$").unwrap();
        for _ in 0..1000 {
            let c = generate_commit(&mut rng, "user-service", fixed_ts());
            assert!(hash_re.is_match(&c.commit_hash), "bad hash {}", c.commit_hash);
            assert!(DEVELOPERS.contains(&c.author.as_str()));
            let (kind, text) = c.message.split_once(": ").unwrap();
            assert!(COMMIT_TYPES.contains(&kind));
            assert!(COMMIT_MESSAGES.contains(&text));
            assert!((1..=15).contains(&c.files_changed));
            assert!((5..=200).contains(&c.insertions));
            assert!((1..=100).contains(&c.deletions));
            assert_eq!(c.date, "2024-01-02 03:04:05");
            assert_eq!(c.service, "user-service");
        }
    }

    #[test]
    fn test_type_and_text_are_independent() {
        let mut rng = StdRng::seed_from_u64(13);
        let combos: HashSet<String> = (0..20_000)
            .map(|_| generate_commit(&mut rng, "api-gateway", fixed_ts()).message)
            .collect();
        assert_eq!(combos.len(), COMMIT_TYPES.len() * COMMIT_MESSAGES.len());
    }

    #[test]
    fn test_format_is_git_log_shaped() {
        let commit = Commit {
            commit_hash: "a1b2c3d".into(),
            author: "grace.lee".into(),
            date: "2024-01-02 03:04:05".into(),
            message: "fix: fix connection leak".into(),
            service: "payment-service".into(),
            files_changed: 3,
            insertions: 42,
            deletions: 7,
        };
        let expected = "commit a1b2c3d\n\
                        Author: grace.lee\n\
                        Date:   2024-01-02 03:04:05\n\
                        Service: payment-service\n\
                        \n    fix: fix connection leak\n\
                        \n    3 files changed, 42 insertions(+), 7 deletions(-)\n";
        assert_eq!(format_commit(&commit), expected);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut rng = StdRng::seed_from_u64(17);
        let window = TimeWindow::ending_at(fixed_ts(), TimeDelta::days(30));
        let history = generate_commit_history(&mut rng, &window, 250);
        assert_eq!(history.len(), 250);
        assert!(history.windows(2).all(|w| w[0].date >= w[1].date));
    }
}
