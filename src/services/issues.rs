//! Assemble the `issues` page view-model.

use crate::api::IssueMetrics;
use crate::core::domain::NamedSeries;
use crate::parsing::issues::IssuesPayload;
use crate::transformations::{timestamps::to_epoch_millis, trend_line};

/// Build the issues view-model: chart-ready series plus the scalar
/// counters the page displays.
pub fn issue_metrics(payload: &IssuesPayload) -> IssueMetrics {
    let opened = to_epoch_millis(&payload.opened_per_day);
    let closed = to_epoch_millis(&payload.closed_per_day);
    let days_open = to_epoch_millis(&payload.days_open_before_close);
    let days_open_trend = trend_line(&days_open);

    IssueMetrics {
        days_open_current_mean: format!("{:.2}", payload.current_open_age_days_mean),
        num_high_priority: payload.num_open_p_high_issues,
        num_nightly_regress: payload.num_open_regression_nightly_issues,
        num_beta_regress: payload.num_open_regression_beta_issues,
        num_stable_regress: payload.num_open_regression_stable_issues,
        open_close_per_day: vec![
            NamedSeries::new("Issues Opened Per Day", opened),
            NamedSeries::new("Issues Closed Per Day", closed),
        ],
        days_open_before_close: vec![
            NamedSeries::new("Issues Days Open Before Closed (by week)", days_open),
            NamedSeries::new("Trend", days_open_trend),
        ],
    }
}
