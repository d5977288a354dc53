//! Raw payload of the `hot-issues` endpoint.

use serde::Deserialize;

use crate::core::domain::Issue;
use crate::error::MetricsResult;
use crate::parsing::from_json;

/// Raw hot-issues payload: `[word, count]` pairs from the word cloud plus
/// the issues currently drawing the most activity.
#[derive(Debug, Clone, Deserialize)]
pub struct HotIssuesPayload {
    pub word_counts: Vec<(String, i64)>,
    pub issues: Vec<Issue>,
}

pub fn parse_hot_issues(json: &str) -> MetricsResult<HotIssuesPayload> {
    from_json(json)
}
