//! View-model Data Transfer Objects.
//!
//! These are the structures the chart components bind against, so field
//! names are part of the wire contract and stable across the dashboard's
//! view templates (`per_builder_times`, `per_builder_fails`,
//! `open_close_per_day`, `pendingReviewers`, ...). Keep them flat and
//! built from primitives and [`NamedSeries`]; anything strongly typed is
//! converted at this boundary.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::domain::{GitHubUser, IndividualFcp, Issue, NamedSeries, ReleaseSchedule, TeamGroup};
use crate::parsing::issues::BorsRetry;
use crate::parsing::releases::NightlyStreakSummary;

/// Chart series for one OS bucket of a CI endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlatformSection {
    pub per_builder_times: Vec<NamedSeries>,
    pub per_builder_fails: Vec<NamedSeries>,
}

/// View-model of the `buildbots` page, bucketed by builder-name rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildbotMetrics {
    pub windows: PlatformSection,
    pub linux: PlatformSection,
    pub mac: PlatformSection,
    pub other: PlatformSection,
}

/// One recent build failure with its provider link resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentFailureView {
    pub builder_name: String,
    pub display_name: String,
    pub env: String,
    pub url: Option<String>,
}

/// View-model of the `builds` page, bucketed by the explicit `os` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildMetrics {
    pub windows: PlatformSection,
    pub linux: PlatformSection,
    pub mac: PlatformSection,
    pub recent_failures: Vec<RecentFailureView>,
}

/// View-model of the `issues` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueMetrics {
    /// Mean age of open issues, formatted to 2 decimal places for display.
    pub days_open_current_mean: String,
    pub num_high_priority: i64,
    pub num_nightly_regress: i64,
    pub num_beta_regress: i64,
    pub num_stable_regress: i64,
    pub open_close_per_day: Vec<NamedSeries>,
    pub days_open_before_close: Vec<NamedSeries>,
}

/// View-model of the `pullrequests` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestMetrics {
    pub days_open_current_mean: String,
    pub open_close_per_day: Vec<NamedSeries>,
    pub days_open_before_close: Vec<NamedSeries>,
    pub bors_retries: Vec<BorsRetry>,
}

/// View-model of the `releases` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseMetrics {
    pub nightlies: Vec<(String, i64)>,
    pub streak_summary: Option<NightlyStreakSummary>,
    pub builder_times: Vec<NamedSeries>,
}

/// Projected stable releases, with dates formatted the way the templates
/// print them ("Fri Jan 22 2016").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StableReleaseSchedule {
    pub previous_date: String,
    pub next_date: String,
    pub next_next_date: String,
    pub previous_version: u32,
    pub next_version: u32,
    pub next_next_version: u32,
}

impl From<ReleaseSchedule> for StableReleaseSchedule {
    fn from(schedule: ReleaseSchedule) -> Self {
        Self {
            previous_date: to_date_string(schedule.previous),
            next_date: to_date_string(schedule.next),
            next_next_date: to_date_string(schedule.next_next),
            previous_version: schedule.previous_version,
            next_version: schedule.next_version,
            next_next_version: schedule.next_next_version,
        }
    }
}

/// Format a date like `Date.toDateString()` does: "Fri Jan 22 2016".
fn to_date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// View-model of the FCP dashboard: one group per team label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FcpDashboard {
    pub fcps: Vec<TeamGroup>,
}

/// View-model of the `nag/users` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NagUsers {
    pub users: Vec<String>,
}

/// View-model of a single reviewer's nag page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NagUserMetrics {
    pub user: GitHubUser,
    pub fcps: Vec<IndividualFcp>,
}

/// One entry of the hot-issues word cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: i64,
}

/// View-model of the `hot-issues` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotIssuesMetrics {
    pub word_counts: Vec<WordCount>,
    pub issues: Vec<Issue>,
}

/// View-model of the `summary` landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub issues: IssueMetrics,
    pub pull_requests: PullRequestMetrics,
    pub buildbots: BuildbotMetrics,
    pub nightlies: ReleaseMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_date_string_matches_js_format() {
        let date = NaiveDate::from_ymd_opt(2016, 1, 22).unwrap();
        assert_eq!(to_date_string(date), "Fri Jan 22 2016");

        let padded = NaiveDate::from_ymd_opt(2016, 3, 4).unwrap();
        assert_eq!(to_date_string(padded), "Fri Mar 04 2016");
    }
}
