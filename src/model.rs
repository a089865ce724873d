use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Author email and authored timestamp of one commit, the only two fields
/// the aggregation cares about.
#[derive(Debug, Clone)]
pub struct CommitMeta {
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub days_ago: usize,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub email: String,
    pub days: Vec<DayCount>,
}
