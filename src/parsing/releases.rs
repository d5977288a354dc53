//! Raw payload of the `releases` / `nightlies` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MetricsResult;
use crate::parsing::builds::NamedRawSeries;
use crate::parsing::from_json;

/// Raw nightlies payload: `[nightlyLabel, buildCount]` pairs plus the
/// streak summary and per-builder timings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasesPayload {
    pub nightlies: Vec<(String, i64)>,
    #[serde(default)]
    pub streak_summary: Option<NightlyStreakSummary>,
    #[serde(default)]
    pub builder_times_mins: Vec<NamedRawSeries>,
}

/// Summary of consecutive successful nightly builds, passed through to the
/// view unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightlyStreakSummary {
    pub longest_length_days: u32,
    pub longest_start: NaiveDate,
    pub longest_end: NaiveDate,
    pub current_length_days: u32,
    pub last_failure: Option<NaiveDate>,
}

pub fn parse_releases(json: &str) -> MetricsResult<ReleasesPayload> {
    from_json(json)
}
