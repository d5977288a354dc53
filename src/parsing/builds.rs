//! Raw payloads of the `buildbots` and `builds` endpoints.
//!
//! The buildbots endpoint identifies builders by bare name; the newer
//! builds endpoint carries a [`BuildInfo`] header with an explicit `os`
//! field per builder series.

use serde::{Deserialize, Serialize};

use crate::core::domain::TimeSeriesPoint;
use crate::error::MetricsResult;
use crate::parsing::from_json;

/// A `[builderName, [[epochSeconds, value], ...]]` wire pair.
pub type NamedRawSeries = (String, Vec<TimeSeriesPoint>);

/// Raw `buildbots` endpoint payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildbotsPayload {
    pub per_builder_times_mins: Vec<NamedRawSeries>,
    pub per_builder_failures: Vec<NamedRawSeries>,
}

/// Builder identity header of the `builds` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub builder_name: String,
    /// Absent or unrecognized values leave the series unclassified.
    #[serde(default)]
    pub os: Option<String>,
    pub env: String,
}

/// Raw `builds` endpoint payload.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildsPayload {
    pub per_builder_times: Vec<(BuildInfo, Vec<TimeSeriesPoint>)>,
    pub per_builder_failures: Vec<(BuildInfo, Vec<TimeSeriesPoint>)>,
    #[serde(default)]
    pub failures_last_day: Vec<RecentFailure>,
}

/// One recent build failure; the service layer derives a display name and
/// a provider URL from these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFailure {
    pub builder_name: String,
    pub env: String,
    #[serde(default)]
    pub build_id: Option<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
}

pub fn parse_buildbots(json: &str) -> MetricsResult<BuildbotsPayload> {
    from_json(json)
}

pub fn parse_builds(json: &str) -> MetricsResult<BuildsPayload> {
    from_json(json)
}
