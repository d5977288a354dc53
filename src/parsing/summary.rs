//! Raw payload of the `summary` endpoint, which nests one section per
//! metrics family.

use serde::Deserialize;

use crate::error::MetricsResult;
use crate::parsing::builds::BuildbotsPayload;
use crate::parsing::from_json;
use crate::parsing::issues::{IssuesPayload, PullRequestsPayload};
use crate::parsing::releases::ReleasesPayload;

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryPayload {
    pub issues: IssuesPayload,
    pub pull_requests: PullRequestsPayload,
    pub buildbots: BuildbotsPayload,
    pub nightlies: ReleasesPayload,
}

pub fn parse_summary(json: &str) -> MetricsResult<SummaryPayload> {
    from_json(json)
}
