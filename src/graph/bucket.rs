use super::GraphConfig;
use crate::model::CommitMeta;
use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};
use std::collections::HashMap;

/// Sentinel for commits that fall outside the rendered window.
pub const OUT_OF_RANGE: usize = 99_999;

/// Commit counts keyed by "days ago", 0 meaning today.
///
/// Keys `1..=window_days` are pre-initialized to zero so an author with no
/// activity still renders a full grid. Key 0 is reserved for today and only
/// appears once a commit lands on it; readers treat a missing key as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    config: GraphConfig,
    counts: HashMap<usize, u32>,
}

impl DayBucket {
    pub fn new(config: GraphConfig) -> Self {
        let mut counts = HashMap::with_capacity(config.window_days);
        for day in 1..=config.window_days {
            counts.insert(day, 0);
        }
        Self { config, counts }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Commit count for `days_ago`, with missing keys reading as zero.
    pub fn get(&self, days_ago: usize) -> u32 {
        self.counts.get(&days_ago).copied().unwrap_or(0)
    }

    /// All present keys in ascending order.
    pub fn keys_sorted(&self) -> Vec<usize> {
        let mut keys: Vec<usize> = self.counts.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Fold one batch of commits into the bucket. Repositories are processed
    /// one after another, all accumulating into the same counts.
    pub fn add_commits(&mut self, email: &str, commits: &[CommitMeta], now: DateTime<Utc>) {
        let offset = weekday_offset(now.weekday());
        for commit in commits {
            if commit.email != email {
                continue;
            }
            let days = count_days_since(commit.timestamp, now, self.config.window_days);
            if days == OUT_OF_RANGE {
                continue;
            }
            *self.counts.entry(days + offset).or_insert(0) += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, days_ago: usize, count: u32) {
        self.counts.insert(days_ago, count);
    }
}

/// Aggregate commits authored by `email` into a fresh bucket.
pub fn aggregate(
    config: GraphConfig,
    email: &str,
    commits: &[CommitMeta],
    now: DateTime<Utc>,
) -> DayBucket {
    let mut bucket = DayBucket::new(config);
    bucket.add_commits(email, commits, now);
    bucket
}

pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&t.date_naive().and_time(NaiveTime::MIN))
}

/// Count the calendar-day boundaries between `timestamp` and `now` by
/// stepping one day at a time, so a timestamp in the future or more than
/// `window_days` back yields [`OUT_OF_RANGE`] instead of a usable key.
pub fn count_days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>, window_days: usize) -> usize {
    let today = start_of_day(now);
    let mut day = start_of_day(timestamp);
    if day > today {
        return OUT_OF_RANGE;
    }

    let mut days = 0;
    while day < today {
        day += Duration::days(1);
        days += 1;
        if days > window_days {
            return OUT_OF_RANGE;
        }
    }
    days
}

/// Days missing to fill the current week's column, so the rightmost column
/// always terminates on today no matter which weekday the tool runs on.
pub fn weekday_offset(weekday: Weekday) -> usize {
    match weekday {
        Weekday::Sun => 7,
        Weekday::Mon => 6,
        Weekday::Tue => 5,
        Weekday::Wed => 4,
        Weekday::Thu => 3,
        Weekday::Fri => 2,
        Weekday::Sat => 1,
    }
}
