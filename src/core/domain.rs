//! Domain records for dashboard time series, CI builders, FCP proposals
//! and the stable-release schedule.
//!
//! Everything here is a plain record with no lifecycle beyond a single
//! transform cycle. Inputs are never mutated; each transformation allocates
//! its own output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point of a dashboard time series.
///
/// On the wire a point is a two-element array `[timestamp, value]`, which is
/// how the charting layer consumes it, so serialization round-trips through
/// a tuple rather than a map.
///
/// `value` may be null to indicate missing data; regression skips null
/// values instead of zero-filling them.
///
/// # Examples
///
/// ```
/// use dashboard_metrics::core::domain::TimeSeriesPoint;
///
/// let point: TimeSeriesPoint = serde_json::from_str("[1453420800, 42.5]").unwrap();
/// assert_eq!(point.timestamp, 1453420800.0);
/// assert_eq!(point.value, Some(42.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub timestamp: f64,
    pub value: Option<f64>,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: f64, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }
}

impl Serialize for TimeSeriesPoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.timestamp, self.value).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeSeriesPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (timestamp, value) = <(f64, Option<f64>)>::deserialize(deserializer)?;
        Ok(Self { timestamp, value })
    }
}

/// A labelled time series, the unit the chart widgets plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    pub data: Vec<TimeSeriesPoint>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, data: Vec<TimeSeriesPoint>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// OS classification for a CI builder. Every classified builder lands in
/// exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsBucket {
    Windows,
    Linux,
    Mac,
    Other,
}

/// Builder series partitioned by OS bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuilderBuckets {
    pub windows: Vec<NamedSeries>,
    pub linux: Vec<NamedSeries>,
    pub mac: Vec<NamedSeries>,
    pub other: Vec<NamedSeries>,
}

impl BuilderBuckets {
    /// Append a series to the bucket it was classified into.
    pub fn push(&mut self, bucket: OsBucket, series: NamedSeries) {
        match bucket {
            OsBucket::Windows => self.windows.push(series),
            OsBucket::Linux => self.linux.push(series),
            OsBucket::Mac => self.mac.push(series),
            OsBucket::Other => self.other.push(series),
        }
    }
}

/// A builder record that could not be classified into any bucket, e.g.
/// because its `os` field was absent or unrecognized. These are omitted
/// from every bucket and reported back so callers can log them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unclassified {
    pub builder_name: String,
    pub os: Option<String>,
}

/// Issue metadata carried through the FCP and hot-issues view-models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: i64,
    pub title: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A single reviewer sign-off on an FCP proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub reviewer: String,
    pub approved: bool,
}

/// A final-comment-period proposal awaiting reviewer sign-off.
#[derive(Debug, Clone, PartialEq)]
pub struct FcpProposal {
    pub disposition: String,
    pub issue: Issue,
    pub status_comment: String,
    pub reviews: Vec<Review>,
}

/// An FCP proposal reduced to what the team dashboards display: its
/// disposition, issue, status comment and the reviewers still pending.
///
/// `pending_reviewers` holds the logins with `approved == false`, sorted
/// lexicographically ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingReviewSummary {
    pub disposition: String,
    pub issue: Issue,
    pub status_comment: String,
    pub pending_reviewers: Vec<String>,
}

/// FCP summaries grouped under one team label ("T-" prefixed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamGroup {
    pub team: String,
    pub fcps: Vec<PendingReviewSummary>,
}

/// GitHub user record for the nag pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// One FCP a single reviewer is being nagged about.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualFcp {
    pub issue: Issue,
    pub disposition: String,
}

/// Anchor for the stable-release projection: a known pair of consecutive
/// releases (plus the one after) from which the 6-week train is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseAnchor {
    pub previous: NaiveDate,
    pub next: NaiveDate,
    pub next_next: NaiveDate,
    pub previous_version: u32,
    pub next_version: u32,
    pub next_next_version: u32,
}

impl ReleaseAnchor {
    /// The historical anchor the dashboard projects from: 1.5 shipped on
    /// 2015-12-11 and 1.6 was due 2016-01-22.
    pub fn stable() -> Self {
        Self {
            previous: NaiveDate::from_ymd_opt(2015, 12, 11).unwrap(),
            next: NaiveDate::from_ymd_opt(2016, 1, 22).unwrap(),
            next_next: NaiveDate::from_ymd_opt(2016, 3, 4).unwrap(),
            previous_version: 5,
            next_version: 6,
            next_next_version: 7,
        }
    }
}

/// The projected release train once advanced past a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseSchedule {
    pub previous: NaiveDate,
    pub next: NaiveDate,
    pub next_next: NaiveDate,
    pub previous_version: u32,
    pub next_version: u32,
    pub next_next_version: u32,
}
