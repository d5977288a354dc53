//! Raw payloads of the `issues` and `pullrequests` endpoints.

use serde::{Deserialize, Serialize};

use crate::core::domain::TimeSeriesPoint;
use crate::error::MetricsResult;
use crate::parsing::from_json;

/// Raw `issues` endpoint payload. Per-day series are `[epochSeconds, value]`
/// pairs; timestamps are rescaled later by the transformations.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPayload {
    pub opened_per_day: Vec<TimeSeriesPoint>,
    pub closed_per_day: Vec<TimeSeriesPoint>,
    pub days_open_before_close: Vec<TimeSeriesPoint>,
    pub current_open_age_days_mean: f64,
    pub num_open_p_high_issues: i64,
    pub num_open_regression_nightly_issues: i64,
    pub num_open_regression_beta_issues: i64,
    pub num_open_regression_stable_issues: i64,
}

/// Raw `pullrequests` endpoint payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestsPayload {
    pub opened_per_day: Vec<TimeSeriesPoint>,
    pub closed_per_day: Vec<TimeSeriesPoint>,
    pub merged_per_day: Vec<TimeSeriesPoint>,
    pub days_open_before_close: Vec<TimeSeriesPoint>,
    pub current_open_age_days_mean: f64,
    #[serde(default)]
    pub bors_retries: Vec<BorsRetry>,
}

/// One automated merge-queue retry, passed through to the view unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorsRetry {
    pub repository: String,
    pub issue_num: i64,
    pub comment_id: i64,
    pub issue_title: String,
    pub merged: bool,
}

pub fn parse_issues(json: &str) -> MetricsResult<IssuesPayload> {
    from_json(json)
}

pub fn parse_pull_requests(json: &str) -> MetricsResult<PullRequestsPayload> {
    from_json(json)
}
